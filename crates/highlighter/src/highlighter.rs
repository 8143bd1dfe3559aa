use crate::location::{comment_span, directive_span, simple_span, Span};
use crate::sink::{HighlightError, HighlightSession, HighlightSink};
use crate::token::{Token, TokenKind, TriviaKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Constant,
    Keyword,
    StringLiteral,
    Comment,
    PreprocessorDirective,
}

/// Highlight category for a token kind. Character literals share the
/// string category; identifiers and punctuation are left unhighlighted.
pub fn highlight_for(kind: TokenKind) -> Option<HighlightKind> {
    match kind {
        TokenKind::Number => Some(HighlightKind::Constant),
        TokenKind::Keyword => Some(HighlightKind::Keyword),
        TokenKind::String => Some(HighlightKind::StringLiteral),
        TokenKind::Character => Some(HighlightKind::StringLiteral),
        TokenKind::Identifier | TokenKind::Other => None,
    }
}

/// Walks one file's token stream in source order and feeds classified
/// spans to the sink session it owns. Dropping the highlighter without
/// calling `finish` abandons the session, which is the abort path.
pub struct FileHighlighter<S: HighlightSession> {
    session: S,
}

impl<S: HighlightSession> FileHighlighter<S> {
    pub fn begin<K>(sink: &mut K, file: &K::File) -> Result<Self, HighlightError>
    where
        K: HighlightSink<Session = S>,
    {
        let session = sink.begin_file(file)?;
        log::debug!("[highlight] session begin");
        Ok(Self { session })
    }

    pub fn visit_token(&mut self, token: &Token) {
        if token.generated {
            // generated tokens have no reliable source position
            return;
        }
        if let Some(kind) = highlight_for(token.kind) {
            self.emit(simple_span(token.line, token.column, &token.text), kind);
        }
        for trivia in &token.trivia {
            match trivia.kind {
                TriviaKind::Comment => {
                    self.emit(comment_span(trivia.line, trivia.column, &trivia.text), HighlightKind::Comment);
                }
                TriviaKind::Preprocessor => {
                    self.emit(directive_span(trivia.line, trivia.column, &trivia.text), HighlightKind::PreprocessorDirective);
                }
                TriviaKind::Skipped => {}
            }
        }
    }

    pub fn finish(self) {
        log::debug!("[highlight] session end");
        self.session.end();
    }

    fn emit(&mut self, span: Span, kind: HighlightKind) {
        log::trace!("[highlight] {kind:?} {span:?}");
        self.session.highlight(span, kind);
    }
}
