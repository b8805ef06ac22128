//! Recursive descent parser for Ion text
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST. Escape sequences and
//! symbol IDs are validated while parsing, so a tree without errors only holds
//! symbol tokens whose text can be resolved.

use super::errors::{ParseErrorKind, SyntaxError};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use super::text::{TextError, token_text};
use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<SyntaxError>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> super::SyntaxNode {
        super::SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Deepest container nesting the parser accepts. A container opened below
/// this depth is reported and skipped without being descended into.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse Ion text into a CST
pub fn parse(input: &str) -> Parse {
    let tokens: Vec<_> = Lexer::new(input).collect();
    let mut parser = Parser::new(&tokens);
    parser.parse_source_file();
    parser.finish()
}

/// Where a value is being parsed; decides separators and whether operators
/// are legal symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Container {
    TopLevel,
    Struct,
    List,
    Sexp,
}

/// The parser state
struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    errors: Vec<SyntaxError>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            errors: Vec::new(),
            depth: 0,
        }
    }

    fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.errors,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn current_kind(&self) -> SyntaxKind {
        self.current().map(|t| t.kind).unwrap_or(SyntaxKind::ERROR)
    }

    fn current_text(&self) -> &str {
        self.current().map(|t| t.text).unwrap_or("")
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        !self.at_eof() && self.current_kind() == kind
    }

    fn at_any(&self, kinds: &[SyntaxKind]) -> bool {
        !self.at_eof() && kinds.contains(&self.current_kind())
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn at_closing_delimiter(&self) -> bool {
        self.at_any(&[
            SyntaxKind::R_BRACE,
            SyntaxKind::R_BRACKET,
            SyntaxKind::R_PAREN,
        ])
    }

    fn nth(&self, n: usize) -> SyntaxKind {
        // Look ahead, skipping trivia
        self.tokens[self.pos.min(self.tokens.len())..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map(|t| t.kind)
            .unwrap_or(SyntaxKind::ERROR)
    }

    fn describe_current(&self) -> String {
        if self.at_eof() {
            "end of input".to_string()
        } else {
            format!("'{}'", self.current_text())
        }
    }

    // =========================================================================
    // Token consumption
    // =========================================================================

    fn bump(&mut self) {
        if let Some(token) = self.current() {
            self.builder.token(token.kind.into(), token.text);
            self.pos += 1;
        }
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat(kind) {
            true
        } else {
            self.error(format!("expected {what}, found {}", self.describe_current()));
            false
        }
    }

    fn skip_trivia(&mut self) {
        while self.current().map(|t| t.kind.is_trivia()).unwrap_or(false) {
            self.bump();
        }
    }

    // =========================================================================
    // Error handling
    // =========================================================================

    fn current_range(&self) -> TextRange {
        match self.current() {
            Some(t) => TextRange::at(t.offset, TextSize::of(t.text)),
            None => {
                let end = self
                    .tokens
                    .last()
                    .map(|t| t.offset + TextSize::of(t.text))
                    .unwrap_or_default();
                TextRange::empty(end)
            }
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        let range = self.current_range();
        self.errors.push(SyntaxError::new(message, range));
    }

    fn error_recover(&mut self, message: impl Into<String>, recovery: &[SyntaxKind]) {
        self.error(message);
        self.builder.start_node(SyntaxKind::ERROR.into());
        // Always consume at least one token to make progress
        let mut consumed = false;
        while !self.at_eof() && !self.at_any(recovery) {
            self.bump();
            consumed = true;
        }
        if !consumed && !self.at_eof() {
            self.bump();
        }
        self.builder.finish_node();
    }

    /// Wrap the current token in an ERROR node without reporting again.
    fn bump_as_error(&mut self) {
        self.start_node(SyntaxKind::ERROR);
        self.bump();
        self.finish_node();
    }

    /// Check that the current token's text resolves, recording an error if not.
    fn validate_text_token(&mut self) {
        let Some(token) = self.current() else {
            return;
        };
        let kind = token.kind;
        if let Err(err) = token_text(kind, token.text) {
            let range = self.current_range();
            let error = match err {
                TextError::InvalidEscape(e) => {
                    let offset = token.offset + delimiter_len(kind) + TextSize::from(e.offset as u32);
                    SyntaxError::with_kind(
                        e.message,
                        TextRange::empty(offset),
                        ParseErrorKind::InvalidEscape,
                    )
                }
                TextError::UnknownSymbolId(_) => SyntaxError::with_kind(
                    err.to_string(),
                    range,
                    ParseErrorKind::UnknownSymbolId,
                ),
                TextError::NotText(_) => return,
            };
            self.errors.push(error);
        }
    }

    // =========================================================================
    // Node building helpers
    // =========================================================================

    fn start_node(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// SourceFile = Value*
    fn parse_source_file(&mut self) {
        self.start_node(SyntaxKind::SOURCE_FILE);

        loop {
            self.skip_trivia();
            if self.at_eof() {
                break;
            }
            let pos_before = self.pos;
            if self.at(SyntaxKind::COMMA) {
                self.error("top-level values are not separated by ','");
                self.bump_as_error();
                continue;
            }
            self.parse_value(Container::TopLevel);
            if self.pos == pos_before && !self.at_eof() {
                self.bump_as_error();
            }
        }

        self.finish_node();
    }

    /// Value = Annotation* (Struct | List | Sexp | Symbol | Scalar)
    fn parse_value(&mut self, container: Container) {
        let checkpoint = self.builder.checkpoint();
        let annotated = self.parse_annotations();

        match self.current_kind() {
            _ if self.at_eof() => self.missing_value(checkpoint, annotated),
            SyntaxKind::L_BRACE | SyntaxKind::L_BRACKET | SyntaxKind::L_PAREN
                if self.depth >= MAX_NESTING_DEPTH =>
            {
                self.error(format!("containers are nested deeper than {MAX_NESTING_DEPTH} levels"));
                self.builder.start_node_at(checkpoint, SyntaxKind::ERROR.into());
                self.skip_container();
                self.finish_node();
            }
            SyntaxKind::L_BRACE => {
                self.builder.start_node_at(checkpoint, SyntaxKind::STRUCT.into());
                self.parse_struct_body();
                self.finish_node();
            }
            SyntaxKind::L_BRACKET => {
                self.builder.start_node_at(checkpoint, SyntaxKind::LIST.into());
                self.parse_sequence_body(Container::List);
                self.finish_node();
            }
            SyntaxKind::L_PAREN => {
                self.builder.start_node_at(checkpoint, SyntaxKind::SEXP.into());
                self.parse_sequence_body(Container::Sexp);
                self.finish_node();
            }
            SyntaxKind::IDENT | SyntaxKind::QUOTED_SYMBOL | SyntaxKind::SYMBOL_ID => {
                self.builder
                    .start_node_at(checkpoint, SyntaxKind::SYMBOL_VALUE.into());
                self.validate_text_token();
                self.bump();
                self.finish_node();
            }
            SyntaxKind::OPERATOR if container == Container::Sexp => {
                self.builder
                    .start_node_at(checkpoint, SyntaxKind::SYMBOL_VALUE.into());
                self.bump();
                self.finish_node();
            }
            SyntaxKind::OPERATOR => {
                self.error(format!(
                    "operator {} is only allowed inside an s-expression",
                    self.describe_current()
                ));
                self.builder.start_node_at(checkpoint, SyntaxKind::ERROR.into());
                self.bump();
                self.finish_node();
            }
            SyntaxKind::LONG_STRING => {
                self.builder.start_node_at(checkpoint, SyntaxKind::SCALAR.into());
                self.parse_long_string_segments();
                self.finish_node();
            }
            kind if kind.is_scalar_token() => {
                let text = self.current().map(|t| t.text).unwrap_or("");
                self.builder.start_node_at(checkpoint, SyntaxKind::SCALAR.into());
                self.validate_text_token();
                self.bump();
                self.finish_node();
                if !matches!(kind, SyntaxKind::STRING | SyntaxKind::BLOB | SyntaxKind::CLOB) {
                    self.check_value_end(text);
                }
            }
            _ => self.missing_value(checkpoint, annotated),
        }
    }

    /// Numbers, timestamps and keywords end at whitespace, a comment, a
    /// delimiter, or a quote; `1a` is not an int followed by a symbol.
    fn check_value_end(&mut self, text: &str) {
        let Some(next) = self.current() else {
            return;
        };
        let ends_value = next.kind.is_trivia()
            || next.kind.is_punct()
            || matches!(
                next.kind,
                SyntaxKind::STRING
                    | SyntaxKind::LONG_STRING
                    | SyntaxKind::QUOTED_SYMBOL
                    | SyntaxKind::BLOB
                    | SyntaxKind::CLOB
            );
        if !ends_value {
            self.error(format!(
                "expected a delimiter after '{text}', found {}",
                self.describe_current()
            ));
        }
    }

    fn missing_value(&mut self, checkpoint: rowan::Checkpoint, annotated: bool) {
        let message = if annotated {
            format!("expected a value after annotations, found {}", self.describe_current())
        } else {
            format!("expected a value, found {}", self.describe_current())
        };
        self.error(message);
        if annotated {
            self.builder.start_node_at(checkpoint, SyntaxKind::ERROR.into());
            self.finish_node();
        } else if !self.at_eof() && !self.at_closing_delimiter() {
            self.bump_as_error();
        }
    }

    /// Annotation = Symbol '::'
    fn parse_annotations(&mut self) -> bool {
        let mut annotated = false;
        while self.current_kind().is_symbol_token()
            && !self.at_eof()
            && self.nth(1) == SyntaxKind::COLON_COLON
        {
            self.start_node(SyntaxKind::ANNOTATION);
            self.validate_text_token();
            self.bump();
            self.skip_trivia();
            self.bump();
            self.finish_node();
            self.skip_trivia();
            annotated = true;
        }
        annotated
    }

    /// Consume a container and everything inside it, iteratively.
    fn skip_container(&mut self) {
        let mut open = 0usize;
        while !self.at_eof() {
            match self.current_kind() {
                SyntaxKind::L_BRACE | SyntaxKind::L_BRACKET | SyntaxKind::L_PAREN => open += 1,
                SyntaxKind::R_BRACE | SyntaxKind::R_BRACKET | SyntaxKind::R_PAREN => {
                    open = open.saturating_sub(1)
                }
                _ => {}
            }
            self.bump();
            if open == 0 {
                break;
            }
        }
    }

    /// Struct = '{' (Field (',' Field)* ','?)? '}'
    fn parse_struct_body(&mut self) {
        self.depth += 1;
        self.bump();

        loop {
            self.skip_trivia();
            if self.at_eof() || self.at(SyntaxKind::R_BRACE) {
                break;
            }
            self.parse_field();
            self.skip_trivia();
            if self.eat(SyntaxKind::COMMA) {
                continue;
            }
            if !self.at_eof() && !self.at(SyntaxKind::R_BRACE) {
                self.error_recover(
                    format!("expected ',' or '}}' after struct field, found {}", self.describe_current()),
                    &[SyntaxKind::COMMA, SyntaxKind::R_BRACE],
                );
                self.eat(SyntaxKind::COMMA);
            }
        }

        self.expect(SyntaxKind::R_BRACE, "'}'");
        self.depth -= 1;
    }

    /// Field = FieldName ':' Value
    fn parse_field(&mut self) {
        self.start_node(SyntaxKind::FIELD);

        if is_field_name_token(self.current_kind()) {
            self.start_node(SyntaxKind::FIELD_NAME);
            if self.at(SyntaxKind::LONG_STRING) {
                self.parse_long_string_segments();
            } else {
                self.validate_text_token();
                self.bump();
            }
            self.finish_node();
        } else {
            self.error_recover(
                format!("expected a field name, found {}", self.describe_current()),
                &[SyntaxKind::COMMA, SyntaxKind::R_BRACE],
            );
            self.finish_node();
            return;
        }

        self.skip_trivia();
        if self.expect(SyntaxKind::COLON, "':' after field name") {
            self.skip_trivia();
            self.parse_value(Container::Struct);
        }

        self.finish_node();
    }

    /// List = '[' (Value (',' Value)* ','?)? ']'
    /// Sexp = '(' Value* ')'
    fn parse_sequence_body(&mut self, container: Container) {
        let (close, close_text) = match container {
            Container::List => (SyntaxKind::R_BRACKET, "']'"),
            _ => (SyntaxKind::R_PAREN, "')'"),
        };
        self.depth += 1;
        self.bump();

        loop {
            self.skip_trivia();
            if self.at_eof() || self.at(close) {
                break;
            }
            let pos_before = self.pos;
            self.parse_value(container);

            if container == Container::List {
                self.skip_trivia();
                if self.eat(SyntaxKind::COMMA) {
                    continue;
                }
                if !self.at_eof() && !self.at(close) {
                    self.error_recover(
                        format!(
                            "expected ',' or {close_text} after list element, found {}",
                            self.describe_current()
                        ),
                        &[SyntaxKind::COMMA, close],
                    );
                    self.eat(SyntaxKind::COMMA);
                }
            } else if self.pos == pos_before && !self.at_eof() && !self.at(close) {
                // a mismatched closing delimiter inside an s-expression
                self.bump_as_error();
            }
        }

        self.expect(close, close_text);
        self.depth -= 1;
    }

    /// Adjacent long strings form one value; only trivia may separate them.
    fn parse_long_string_segments(&mut self) {
        self.validate_text_token();
        self.bump();
        while self.nth(0) == SyntaxKind::LONG_STRING {
            self.skip_trivia();
            self.validate_text_token();
            self.bump();
        }
    }
}

fn is_field_name_token(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::IDENT
            | SyntaxKind::QUOTED_SYMBOL
            | SyntaxKind::SYMBOL_ID
            | SyntaxKind::STRING
            | SyntaxKind::LONG_STRING
            | SyntaxKind::NULL_KW
            | SyntaxKind::TRUE_KW
            | SyntaxKind::FALSE_KW
            | SyntaxKind::NAN_KW
    )
}

fn delimiter_len(kind: SyntaxKind) -> TextSize {
    match kind {
        SyntaxKind::LONG_STRING => TextSize::from(3),
        SyntaxKind::QUOTED_SYMBOL | SyntaxKind::STRING => TextSize::from(1),
        _ => TextSize::from(0),
    }
}
