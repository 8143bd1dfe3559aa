use crate::highlighter::FileHighlighter;
use crate::sink::{HighlightError, HighlightSink};
use crate::token::Token;

pub mod highlighter;
pub mod location;
pub mod sink;
pub mod token;

/// Runs one complete highlighting session over a file's token stream:
/// begin, one visit per token in source order, end. The tokens are
/// expected in strictly increasing source position, as the tokenizer
/// delivers them.
pub fn highlight_file<S: HighlightSink>(sink: &mut S, file: &S::File, tokens: &[Token]) -> Result<(), HighlightError> {
    let mut highlighter = FileHighlighter::begin(sink, file)?;
    for token in tokens {
        highlighter.visit_token(token);
    }
    highlighter.finish();
    Ok(())
}
