//! Reader errors.

use thiserror::Error;

/// Byte range into the source text.
pub type Span = std::ops::Range<usize>;

/// Failure to turn source text into a syntax tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReadError {
    #[error("unexpected character '{ch}'")]
    UnexpectedChar { ch: char, span: Span },
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    #[error("unclosed '{open}'")]
    UnclosedDelimiter { open: char, span: Span },
    #[error("unexpected '{found}'")]
    UnexpectedCloser { found: char, span: Span },
}

impl ReadError {
    /// Source range the error points at.
    pub fn span(&self) -> Span {
        match self {
            ReadError::UnexpectedChar { span, .. }
            | ReadError::UnterminatedString { span }
            | ReadError::UnclosedDelimiter { span, .. }
            | ReadError::UnexpectedCloser { span, .. } => span.clone(),
        }
    }

    /// 1-based line and column of the error in `source`.
    pub fn position(&self, source: &str) -> (usize, usize) {
        let offset = self.span().start.min(source.len());
        let before = &source[..offset];
        let line = before.matches('\n').count() + 1;
        let column = before
            .rfind('\n')
            .map_or(before.chars().count(), |nl| before[nl + 1..].chars().count())
            + 1;
        (line, column)
    }
}
