use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").unwrap());
static DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]*#[ \t]*\w+").unwrap());

/// A highlighted region of source text. Lines are 1-based, columns are
/// 0-based character offsets within their line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

fn width(text: &str) -> u32 {
    text.chars().count() as u32
}

/// Span of a token whose text contains no line break: numbers, keywords,
/// identifiers, single-line string and character literals.
pub fn simple_span(line: u32, column: u32, text: &str) -> Span {
    Span {
        start_line: line,
        start_column: column,
        end_line: line,
        end_column: column + width(text),
    }
}

/// Span of a comment, which may cross lines. The end column of a
/// multi-line comment is measured from the start of its last physical
/// line, so a trailing line break yields an empty last segment and an
/// end column of zero.
pub fn comment_span(line: u32, column: u32, text: &str) -> Span {
    let segments: Vec<&str> = LINE_BREAK.split(text).collect();
    if segments.len() == 1 {
        return simple_span(line, column, text);
    }
    Span {
        start_line: line,
        start_column: column,
        end_line: line + segments.len() as u32 - 1,
        end_column: width(segments[segments.len() - 1]),
    }
}

/// Span of a preprocessor directive, covering only the directive keyword
/// (`#include`, `#  define`), never its arguments. Skipped text with no
/// recognizable directive keyword collapses to a zero-width span at the
/// start position.
pub fn directive_span(line: u32, column: u32, text: &str) -> Span {
    let end_column = match DIRECTIVE.find(text) {
        Some(m) => column + width(m.as_str()),
        None => column,
    };
    Span {
        start_line: line,
        start_column: column,
        end_line: line,
        end_column,
    }
}
