//! Typed AST wrappers over the untyped rowan CST.
//!
//! This module provides strongly-typed accessors for Ion syntax nodes.
//! Each struct wraps a SyntaxNode and provides methods to access children.
//! Symbol-bearing nodes expose their text with quoting stripped and escapes
//! resolved; see [`super::text::token_text`] for the null-symbol policy.

use smol_str::SmolStr;

use super::syntax_kind::SyntaxKind;
use super::text::{TextError, token_text};
use super::{SyntaxNode, SyntaxToken};

// ============================================================================
// Helper utilities
// ============================================================================

/// Direct child tokens of a node, trivia excluded.
#[inline]
fn significant_tokens(node: &SyntaxNode) -> impl Iterator<Item = SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(|t| !t.kind().is_trivia())
}

/// Resolve the text held by a symbol-bearing node.
///
/// Adjacent long-string segments concatenate into one text.
fn node_text(node: &SyntaxNode) -> Result<Option<SmolStr>, TextError> {
    let mut segments = significant_tokens(node).filter(|t| is_text_token(t.kind()));
    let Some(first) = segments.next() else {
        return Err(TextError::NotText(node.kind()));
    };
    let head = token_text(first.kind(), first.text())?;
    let mut rest = segments.peekable();
    if rest.peek().is_none() {
        return Ok(head);
    }
    let mut joined = head.map(String::from).unwrap_or_default();
    for segment in rest {
        if let Some(text) = token_text(segment.kind(), segment.text())? {
            joined.push_str(&text);
        }
    }
    Ok(Some(SmolStr::from(joined)))
}

#[inline]
fn is_text_token(kind: SyntaxKind) -> bool {
    kind.is_symbol_token()
        || matches!(
            kind,
            SyntaxKind::OPERATOR
                | SyntaxKind::STRING
                | SyntaxKind::LONG_STRING
                | SyntaxKind::NULL_KW
                | SyntaxKind::TRUE_KW
                | SyntaxKind::FALSE_KW
                | SyntaxKind::NAN_KW
        )
}

/// Macro to generate a method that finds the first child of a specific AST type.
macro_rules! first_child_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get the first `", stringify!($type), "` child of this node.")]
        pub fn $name(&self) -> Option<$type> {
            self.0.children().find_map($type::cast)
        }
    };
}

/// Macro to generate a method that returns an iterator over children of a specific AST type.
macro_rules! children_method {
    ($name:ident, $type:ident) => {
        #[doc = concat!("Get all `", stringify!($type), "` children of this node.")]
        pub fn $name(&self) -> impl Iterator<Item = $type> + '_ {
            self.0.children().filter_map($type::cast)
        }
    };
}

/// Trait for AST nodes that wrap a SyntaxNode
pub trait AstNode: Sized {
    fn can_cast(kind: SyntaxKind) -> bool;
    fn cast(node: SyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &SyntaxNode;

    /// Find all descendant nodes of a specific AST type
    fn descendants<T: AstNode>(&self) -> impl Iterator<Item = T> {
        self.syntax().descendants().filter_map(T::cast)
    }
}

// ============================================================================
// Helper macros
// ============================================================================

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) SyntaxNode);

        impl AstNode for $name {
            fn can_cast(kind: SyntaxKind) -> bool {
                kind == SyntaxKind::$kind
            }

            fn cast(node: SyntaxNode) -> Option<Self> {
                if Self::can_cast(node.kind()) {
                    Some(Self(node))
                } else {
                    None
                }
            }

            fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

// Submodules (declared after the macros so macro_rules! are in scope)
mod values;

pub use self::values::*;
