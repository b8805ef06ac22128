//! Syntax kinds for the Rowan-based CST
//!
//! This enum defines all possible node and token kinds in the syntax tree
//! of an Ion text document.

/// All syntax kinds (tokens and nodes) in Ion text
///
/// Tokens are leaf nodes (symbols, scalars, punctuation).
/// Nodes are composite (containers, fields, annotations, value wrappers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - preserved but not semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // SYMBOL TOKENS
    // =========================================================================
    IDENT,              // foo, $ion_schema_2_0
    QUOTED_SYMBOL,      // 'foo bar'
    SYMBOL_ID,          // $4
    OPERATOR,           // + - <= (s-expressions only)

    // =========================================================================
    // SCALAR TOKENS
    // =========================================================================
    NULL_KW,            // null
    TYPED_NULL,         // null.symbol
    TRUE_KW,            // true
    FALSE_KW,           // false
    NAN_KW,             // nan
    POS_INF,            // +inf
    NEG_INF,            // -inf
    INT,                // 42, 0xFF, 0b101
    DECIMAL,            // 1.5, 2d-3
    FLOAT,              // 1.5e3
    TIMESTAMP,          // 2007-02-23T12:14Z
    STRING,             // "hello"
    LONG_STRING,        // '''hello'''
    BLOB,               // {{ aGVsbG8= }}
    CLOB,               // {{ "hello" }}

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_BRACE,            // {
    R_BRACE,            // }
    L_BRACKET,          // [
    R_BRACKET,          // ]
    L_PAREN,            // (
    R_PAREN,            // )
    COMMA,              // ,
    COLON,              // :
    COLON_COLON,        // ::

    // =========================================================================
    // NODES
    // =========================================================================
    SOURCE_FILE,
    ANNOTATION,         // foo::
    STRUCT,             // { ... }
    LIST,               // [ ... ]
    SEXP,               // ( ... )
    FIELD,              // name: value
    FIELD_NAME,         // name
    SYMBOL_VALUE,       // a symbol in value position
    SCALAR,             // any other scalar in value position

    // Special
    ERROR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT)
    }

    /// Check if this token is a symbol that may appear in annotation or value position
    pub fn is_symbol_token(self) -> bool {
        matches!(self, Self::IDENT | Self::QUOTED_SYMBOL | Self::SYMBOL_ID)
    }

    /// Check if this token is a non-symbol scalar
    pub fn is_scalar_token(self) -> bool {
        (self as u16) >= (Self::NULL_KW as u16) && (self as u16) <= (Self::CLOB as u16)
    }

    /// Check if this is a punctuation token
    pub fn is_punct(self) -> bool {
        (self as u16) >= (Self::L_BRACE as u16) && (self as u16) <= (Self::COLON_COLON as u16)
    }

    /// Check if this is a value node kind
    pub fn is_value(self) -> bool {
        matches!(
            self,
            Self::STRUCT | Self::LIST | Self::SEXP | Self::SYMBOL_VALUE | Self::SCALAR
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IonLanguage {}

impl rowan::Language for IonLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<IonLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<IonLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<IonLanguage>;
