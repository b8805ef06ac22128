//! Parser error types
//!
//! Errors are collected rather than raised so one pass reports every
//! problem in a document; callers decide whether any error is fatal.

use rowan::{TextRange, TextSize};

/// Category of a parse failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Malformed Ion text
    Syntax,
    /// A quoted symbol or string with an escape that denotes no character
    InvalidEscape,
    /// A `$n` symbol ID that cannot be resolved
    UnknownSymbolId,
    /// An Ion Schema version marker other than `$ion_schema_2_0`
    UnsupportedVersion,
    /// No version marker where one was required
    MissingVersionMarker,
}

impl ParseErrorKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Syntax => "syntax error",
            Self::InvalidEscape => "invalid escape",
            Self::UnknownSymbolId => "unknown symbol ID",
            Self::UnsupportedVersion => "unsupported version",
            Self::MissingVersionMarker => "missing version marker",
        }
    }
}

/// A syntax error with location and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: TextRange,
    pub kind: ParseErrorKind,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, range: TextRange) -> Self {
        Self::with_kind(message, range, ParseErrorKind::Syntax)
    }

    pub fn with_kind(message: impl Into<String>, range: TextRange, kind: ParseErrorKind) -> Self {
        Self {
            message: message.into(),
            range,
            kind,
        }
    }

    /// Create an error at a specific offset with zero-width range
    pub fn at_offset(message: impl Into<String>, offset: TextSize) -> Self {
        Self::new(message, TextRange::empty(offset))
    }
}
