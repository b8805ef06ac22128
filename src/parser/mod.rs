//! Rowan-based lossless parser for Ion text
//!
//! This module provides a lossless parser using:
//! - **logos** for fast lexing
//! - **rowan** for the CST (Concrete Syntax Tree)
//!
//! We build a lossless CST that preserves all whitespace and comments, then
//! expose a typed AST layer on top.
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Parser → GreenNode tree (immutable, cheap to clone)
//!     ↓
//! SyntaxNode (rowan) → CST with parent pointers
//!     ↓
//! AST layer → Typed wrappers over SyntaxNode
//!     ↓
//! Symbol collection
//! ```

#[allow(clippy::module_inception)]
mod parser;

pub mod ast;
mod errors;
mod escape;
mod lexer;
mod syntax_kind;
mod text;

pub use ast::*;
pub use errors::{ParseErrorKind, SyntaxError};
pub use escape::{EscapeError, unescape};
pub use lexer::{Lexer, Token, tokenize};
pub use parser::{MAX_NESTING_DEPTH, Parse, parse};
pub use syntax_kind::{IonLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};
pub use text::{TextError, token_text};

/// Re-export rowan types for convenience
pub use rowan::{GreenNode, TextRange, TextSize};
