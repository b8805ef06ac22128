//! Logos-based lexer for Ion text
//!
//! Fast tokenization using the logos crate. Every byte of the input ends up
//! in exactly one token so the parser can build a lossless tree.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use rowan::TextSize;

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(LogosToken::Lob) => classify_lob(text),
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// A lob whose content is a string is a clob; anything else is base64 (a blob).
fn classify_lob(text: &str) -> SyntaxKind {
    let body = text
        .strip_prefix("{{")
        .and_then(|s| s.strip_suffix("}}"))
        .unwrap_or(text)
        .trim_start();
    if body.starts_with('"') || body.starts_with("'''") {
        SyntaxKind::CLOB
    } else {
        SyntaxKind::BLOB
    }
}

/// Find the end of a quoted run starting at `start` (just past the opening
/// delimiter). Returns the index just past the closing delimiter.
fn find_closing(bytes: &[u8], start: usize, delimiter: &[u8]) -> Option<usize> {
    let mut i = start;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 2;
        } else if bytes[i..].starts_with(delimiter) {
            return Some(i + delimiter.len());
        } else {
            i += 1;
        }
    }
    None
}

fn lex_long_string(lex: &mut logos::Lexer<LogosToken>) -> bool {
    let rest = lex.remainder();
    match find_closing(rest.as_bytes(), 0, b"'''") {
        Some(end) => {
            lex.bump(end);
            true
        }
        None => {
            lex.bump(rest.len());
            false
        }
    }
}

fn lex_lob(lex: &mut logos::Lexer<LogosToken>) -> bool {
    let rest = lex.remainder();
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let next = if bytes[i..].starts_with(b"}}") {
            lex.bump(i + 2);
            return true;
        } else if bytes[i..].starts_with(b"'''") {
            find_closing(bytes, i + 3, b"'''")
        } else if bytes[i] == b'"' {
            find_closing(bytes, i + 1, b"\"")
        } else {
            Some(i + 1)
        };
        match next {
            Some(n) => i = n,
            None => break,
        }
    }
    lex.bump(rest.len());
    false
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\x0B\x0C]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
    BlockComment,

    // =========================================================================
    // SYMBOLS
    // =========================================================================
    #[regex(r"[$_a-zA-Z][$_a-zA-Z0-9]*", priority = 1)]
    Ident,

    #[regex(r"'([^'\\\n]|\\(.|\n))*'")]
    QuotedSymbol,

    #[regex(r"\$[0-9]+", priority = 5)]
    SymbolId,

    #[regex(r"[!#%&*+\-./;<=>?@^`|~]+", priority = 1)]
    Operator,

    // =========================================================================
    // SCALARS
    // =========================================================================
    #[token("null")]
    Null,

    #[regex(r"null\.(null|bool|int|float|decimal|timestamp|string|symbol|blob|clob|struct|list|sexp)")]
    TypedNull,

    #[token("true")]
    True,

    #[token("false")]
    False,

    #[token("nan")]
    Nan,

    #[token("+inf")]
    PosInf,

    #[token("-inf")]
    NegInf,

    #[regex(r"-?(0|[1-9](_?[0-9])*)")]
    #[regex(r"-?0[xX][0-9a-fA-F](_?[0-9a-fA-F])*")]
    #[regex(r"-?0[bB][01](_?[01])*")]
    Int,

    #[regex(r"-?(0|[1-9](_?[0-9])*)\.([0-9](_?[0-9])*)?([dD][+-]?[0-9]+)?")]
    #[regex(r"-?(0|[1-9](_?[0-9])*)[dD][+-]?[0-9]+")]
    Decimal,

    #[regex(r"-?(0|[1-9](_?[0-9])*)(\.([0-9](_?[0-9])*)?)?[eE][+-]?[0-9]+")]
    Float,

    #[regex(r"[0-9]{4}T")]
    #[regex(r"[0-9]{4}-[0-9]{2}T")]
    #[regex(r"[0-9]{4}-[0-9]{2}-[0-9]{2}T?")]
    #[regex(r"[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}(:[0-9]{2}(\.[0-9]+)?)?(Z|[+-][0-9]{2}:[0-9]{2})")]
    Timestamp,

    #[regex(r#""([^"\\\n]|\\(.|\n))*""#)]
    String,

    #[token("'''", lex_long_string)]
    LongString,

    #[token("{{", lex_lob)]
    Lob,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("::")]
    ColonColon,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,

            Ident => SyntaxKind::IDENT,
            QuotedSymbol => SyntaxKind::QUOTED_SYMBOL,
            SymbolId => SyntaxKind::SYMBOL_ID,
            Operator => SyntaxKind::OPERATOR,

            Null => SyntaxKind::NULL_KW,
            TypedNull => SyntaxKind::TYPED_NULL,
            True => SyntaxKind::TRUE_KW,
            False => SyntaxKind::FALSE_KW,
            Nan => SyntaxKind::NAN_KW,
            PosInf => SyntaxKind::POS_INF,
            NegInf => SyntaxKind::NEG_INF,
            Int => SyntaxKind::INT,
            Decimal => SyntaxKind::DECIMAL,
            Float => SyntaxKind::FLOAT,
            Timestamp => SyntaxKind::TIMESTAMP,
            String => SyntaxKind::STRING,
            LongString => SyntaxKind::LONG_STRING,
            // Refined into BLOB or CLOB by the lexer wrapper
            Lob => SyntaxKind::BLOB,

            ColonColon => SyntaxKind::COLON_COLON,
            LBrace => SyntaxKind::L_BRACE,
            RBrace => SyntaxKind::R_BRACE,
            LBracket => SyntaxKind::L_BRACKET,
            RBracket => SyntaxKind::R_BRACKET,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Comma => SyntaxKind::COMMA,
            Colon => SyntaxKind::COLON,
        }
    }
}
