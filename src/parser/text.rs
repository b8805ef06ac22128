//! Resolution of symbol-bearing tokens to their symbol text.
//!
//! This is the single place where the null-symbol policy lives: `$0` has no
//! text and resolves to `None` wherever it appears. The zero-length quoted
//! symbol `''` resolves to the empty text.

use smol_str::SmolStr;
use std::fmt;

use super::escape::{EscapeError, strip_delimiters, unescape};
use super::syntax_kind::SyntaxKind;
use crate::base::constants::system_symbol;

/// Why a token's text could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// A quoted token contains an escape that denotes no character
    InvalidEscape(EscapeError),
    /// A `$n` symbol ID outside the system symbol table
    UnknownSymbolId(String),
    /// The token kind never carries text
    NotText(SyntaxKind),
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEscape(e) => write!(f, "{e}"),
            Self::UnknownSymbolId(id) => write!(
                f,
                "symbol ID {id} cannot be resolved without a local symbol table"
            ),
            Self::NotText(kind) => write!(f, "{kind:?} token has no text"),
        }
    }
}

impl std::error::Error for TextError {}

/// Resolve the text of a single symbol, string, or keyword token.
///
/// Returns `Ok(None)` only for the null symbol `$0`.
pub fn token_text(kind: SyntaxKind, text: &str) -> Result<Option<SmolStr>, TextError> {
    match kind {
        SyntaxKind::IDENT
        | SyntaxKind::OPERATOR
        | SyntaxKind::NULL_KW
        | SyntaxKind::TRUE_KW
        | SyntaxKind::FALSE_KW
        | SyntaxKind::NAN_KW => Ok(Some(SmolStr::new(text))),
        SyntaxKind::QUOTED_SYMBOL => unquote(text, "'").map(Some),
        SyntaxKind::STRING => unquote(text, "\"").map(Some),
        SyntaxKind::LONG_STRING => unquote(text, "'''").map(Some),
        SyntaxKind::SYMBOL_ID => resolve_symbol_id(text),
        other => Err(TextError::NotText(other)),
    }
}

fn unquote(text: &str, delimiter: &str) -> Result<SmolStr, TextError> {
    unescape(strip_delimiters(text, delimiter))
        .map(SmolStr::from)
        .map_err(TextError::InvalidEscape)
}

fn resolve_symbol_id(text: &str) -> Result<Option<SmolStr>, TextError> {
    let sid = text
        .strip_prefix('$')
        .and_then(|digits| digits.parse::<u64>().ok())
        .ok_or_else(|| TextError::UnknownSymbolId(text.to_string()))?;
    match system_symbol(sid) {
        Some(resolved) => Ok(resolved.map(SmolStr::new_static)),
        None => Err(TextError::UnknownSymbolId(text.to_string())),
    }
}
