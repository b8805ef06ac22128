//! Syntax-level parse errors with 1-based locations.

use crate::base::LineIndex;
use crate::parser::{ParseErrorKind, SyntaxError};
use text_size::TextSize;

/// Parse error type for document-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    /// 1-based line
    pub line: usize,
    /// 1-based column, in bytes
    pub column: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            column,
        }
    }

    /// Locate an error at a byte offset.
    pub fn at_offset(
        kind: ParseErrorKind,
        message: impl Into<String>,
        offset: TextSize,
        index: &LineIndex,
    ) -> Self {
        let pos = index.line_col(offset);
        Self::new(kind, message, pos.line as usize + 1, pos.col as usize + 1)
    }

    /// Convert a parser error, locating it at the start of its range.
    pub fn from_syntax_error(error: &SyntaxError, index: &LineIndex) -> Self {
        Self::at_offset(error.kind, error.message.clone(), error.range.start(), index)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.line,
            self.column,
            self.kind.as_str(),
            self.message
        )
    }
}

impl std::error::Error for ParseError {}
