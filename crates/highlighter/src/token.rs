use ecow::EcoString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TokenKind {
    Number,
    String,
    Character,
    Keyword,
    Identifier,
    Other,
}

/// A lexical unit as delivered by the tokenizer, positioned by its
/// 1-based line and 0-based column within that line.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: EcoString,
    pub line: u32,
    pub column: u32,
    pub generated: bool,
    pub trivia: Vec<Trivia>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<EcoString>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
            generated: false,
            trivia: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriviaKind {
    Comment,
    Preprocessor,
    Skipped,
}

/// Non-grammatical text the tokenizer attached to the token it precedes,
/// carrying its own position.
#[derive(Debug, Clone)]
pub struct Trivia {
    pub kind: TriviaKind,
    pub text: EcoString,
    pub line: u32,
    pub column: u32,
}

impl Trivia {
    pub fn new(kind: TriviaKind, text: impl Into<EcoString>, line: u32, column: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            column,
        }
    }
}
