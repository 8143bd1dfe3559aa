use thiserror::Error;

use crate::highlighter::HighlightKind;
use crate::location::Span;

#[derive(Debug, Clone, Error)]
pub enum HighlightError {
    #[error("no input file resolved for {0}")]
    UnboundFile(String),
}

/// Consumer of highlighting output, implemented by the host. The file
/// identity is opaque to the core; resolving it is the sink's job, and a
/// failure to do so aborts that file's session before anything is emitted.
pub trait HighlightSink {
    type File;
    type Session: HighlightSession;

    fn begin_file(&mut self, file: &Self::File) -> Result<Self::Session, HighlightError>;
}

/// One file's highlighting session. `highlight` is called once per span in
/// source order; `end` consumes the session, so a finished session cannot
/// be reused. Dropping a session without calling `end` discards it.
pub trait HighlightSession {
    fn highlight(&mut self, span: Span, kind: HighlightKind);
    fn end(self);
}
