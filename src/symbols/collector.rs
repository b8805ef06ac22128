//! Whole-document symbol collection.

use std::path::Path;

use smol_str::SmolStr;
use tracing::trace;

use super::SymbolSet;
use crate::base::constants::{ION_1_0_VERSION_MARKER, ION_SYMBOL_TABLE};
use crate::error::ExtractError;
use crate::parser::{Annotation, AstNode, FieldName, SyntaxKind, SyntaxNode, TextError, Value};
use crate::syntax::SchemaDocument;

/// Collect every symbol text of a document: annotations, field names, and
/// symbol values, at any depth.
///
/// The Ion version marker and local symbol tables at the top level are
/// system values and contribute nothing.
pub fn collect_document_symbols(doc: &SchemaDocument) -> Result<SymbolSet, ExtractError> {
    let mut collector = SymbolCollector::new(doc.path());
    let root = doc
        .source_file()
        .ok_or_else(|| collector.invariant("document root is not a source file"))?;

    for child in root.syntax().children() {
        let Some(value) = Value::cast(child.clone()) else {
            return Err(collector.unexpected(&child, "at top level"));
        };
        if is_system_value(&value) {
            trace!(path = %doc.path().display(), "skipping system value");
            continue;
        }
        collector.visit_value(&value)?;
    }

    Ok(collector.finish())
}

/// `$ion_1_0` written as a bare identifier, or a struct whose first
/// annotation is `$ion_symbol_table`.
fn is_system_value(value: &Value) -> bool {
    match value {
        Value::Symbol(symbol) => {
            !value.is_annotated()
                && symbol.is_identifier()
                && matches!(symbol.text(), Ok(Some(t)) if t.as_str() == ION_1_0_VERSION_MARKER)
        }
        Value::Struct(_) => value
            .annotations()
            .next()
            .is_some_and(|a| matches!(a.text(), Ok(Some(t)) if t.as_str() == ION_SYMBOL_TABLE)),
        _ => false,
    }
}

/// Accumulates the symbol texts of one document.
pub(super) struct SymbolCollector<'a> {
    path: &'a Path,
    symbols: SymbolSet,
}

impl<'a> SymbolCollector<'a> {
    pub(super) fn new(path: &'a Path) -> Self {
        Self {
            path,
            symbols: SymbolSet::new(),
        }
    }

    pub(super) fn finish(self) -> SymbolSet {
        self.symbols
    }

    /// Add a resolved text; `$0` resolves to nothing and is skipped.
    pub(super) fn add(&mut self, text: Result<Option<SmolStr>, TextError>) -> Result<(), ExtractError> {
        match text {
            Ok(Some(text)) => {
                self.symbols.insert(text);
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(err) => Err(self.invariant(format!("unresolvable symbol in a validated tree: {err}"))),
        }
    }

    /// Every symbol text of a value and its descendants.
    pub(super) fn visit_value(&mut self, value: &Value) -> Result<(), ExtractError> {
        if let Value::Symbol(symbol) = value {
            self.add(symbol.text())?;
        }

        for child in value.syntax().children() {
            match child.kind() {
                SyntaxKind::ANNOTATION => {
                    let annotation = Annotation::cast(child)
                        .ok_or_else(|| self.invariant("annotation node did not cast"))?;
                    self.add(annotation.text())?;
                }
                SyntaxKind::FIELD if matches!(value, Value::Struct(_)) => self.visit_field(&child)?,
                kind if kind.is_value() && matches!(value, Value::List(_) | Value::Sexp(_)) => {
                    if let Some(element) = Value::cast(child) {
                        self.visit_value(&element)?;
                    }
                }
                _ => return Err(self.unexpected(&child, "inside a value")),
            }
        }
        Ok(())
    }

    fn visit_field(&mut self, field: &SyntaxNode) -> Result<(), ExtractError> {
        let mut has_name = false;
        let mut has_value = false;
        for child in field.children() {
            match child.kind() {
                SyntaxKind::FIELD_NAME if !has_name => {
                    let name = FieldName::cast(child)
                        .ok_or_else(|| self.invariant("field name node did not cast"))?;
                    self.add(name.text())?;
                    has_name = true;
                }
                kind if kind.is_value() && has_name && !has_value => {
                    if let Some(value) = Value::cast(child) {
                        self.visit_value(&value)?;
                    }
                    has_value = true;
                }
                _ => return Err(self.unexpected(&child, "inside a struct field")),
            }
        }
        if has_value {
            Ok(())
        } else {
            Err(self.invariant("struct field without a value"))
        }
    }

    pub(super) fn invariant(&self, message: impl Into<String>) -> ExtractError {
        ExtractError::internal(self.path, message)
    }

    fn unexpected(&self, node: &SyntaxNode, place: &str) -> ExtractError {
        let range = node.text_range();
        self.invariant(format!(
            "unexpected {:?} node {place} at {}..{}",
            node.kind(),
            u32::from(range.start()),
            u32::from(range.end())
        ))
    }
}
