//! A parsed schema document.

use std::path::{Path, PathBuf};

use crate::base::LineIndex;
use smol_str::SmolStr;

use crate::base::constants::{
    ISL_2_0_VERSION_MARKER, ISL_VERSION_MARKER_PREFIX, SCHEMA_HEADER_ANNOTATION, TYPE_ANNOTATION,
};
use crate::error::ExtractError;
use crate::parser::{AstNode, Parse, ParseErrorKind, SourceFile, TextRange, TextSize, Value, parse};

use super::ParseError;

/// One schema document: its path, raw text, and parse tree.
///
/// Only constructed from error-free parses of ISL 2.0 documents, so every
/// symbol token in the tree resolves.
#[derive(Debug, Clone)]
pub struct SchemaDocument {
    path: PathBuf,
    text: String,
    parse: Parse,
    version_marker: Option<TextRange>,
}

impl SchemaDocument {
    /// Parse an ISL 2.0 document; one without `$ion_schema_2_0` is rejected.
    pub fn parse(path: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self, ExtractError> {
        Self::parse_with(path, text, true)
    }

    /// Parse a document. Without `require_version_marker`, a document with no
    /// version marker at all is read as ISL 2.0.
    pub fn parse_with(
        path: impl Into<PathBuf>,
        text: impl Into<String>,
        require_version_marker: bool,
    ) -> Result<Self, ExtractError> {
        let path = path.into();
        let text = text.into();
        let parse = parse(&text);

        if let Some(first) = parse.errors.first() {
            let index = LineIndex::new(&text);
            return Err(ExtractError::parse(
                path,
                ParseError::from_syntax_error(first, &index),
            ));
        }

        let version_marker = match check_version(&parse, &text, require_version_marker) {
            Ok(marker) => marker,
            Err(error) => return Err(ExtractError::parse(path, error)),
        };

        Ok(Self {
            path,
            text,
            parse,
            version_marker,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the root source file AST node
    pub fn source_file(&self) -> Option<SourceFile> {
        SourceFile::cast(self.parse.syntax())
    }

    /// Whether the document declares `$ion_schema_2_0` explicitly
    pub fn has_version_marker(&self) -> bool {
        self.version_marker.is_some()
    }

    /// The top-level values that make up the schema: those after the version
    /// marker, or every value when there is none.
    pub fn schema_content(&self) -> impl Iterator<Item = Value> {
        let start = self.version_marker.map(|range| range.end()).unwrap_or_default();
        self.source_file()
            .into_iter()
            .flat_map(|root| root.syntax().children().filter_map(Value::cast))
            .filter(move |value| value.syntax().text_range().start() >= start)
    }
}

/// Find the version marker: the first unannotated top-level symbol whose
/// text looks like `$ion_schema_<digit>...`.
///
/// A `type::` or `schema_header::` struct before any marker makes the
/// document ISL 1.0. Returns the range of an accepted marker.
fn check_version(parse: &Parse, text: &str, require_version_marker: bool) -> Result<Option<TextRange>, ParseError> {
    let Some(root) = SourceFile::cast(parse.syntax()) else {
        return Ok(None);
    };
    let unsupported = |message: String, offset: TextSize| {
        ParseError::at_offset(ParseErrorKind::UnsupportedVersion, message, offset, &LineIndex::new(text))
    };

    let mut isl_1_0_definition = None;
    for value in root.values() {
        let Some(marker) = version_marker(&value) else {
            if isl_1_0_definition.is_none() && is_schema_definition(&value) {
                isl_1_0_definition = Some(value.syntax().text_range().start());
            }
            continue;
        };
        let range = value.syntax().text_range();
        if marker.as_str() != ISL_2_0_VERSION_MARKER {
            return Err(unsupported(
                format!("{marker} is not supported; only {ISL_2_0_VERSION_MARKER} documents can be read"),
                range.start(),
            ));
        }
        if let Some(offset) = isl_1_0_definition {
            return Err(unsupported(
                format!("a type or schema header before {ISL_2_0_VERSION_MARKER} marks an ISL 1.0 document"),
                offset,
            ));
        }
        return Ok(Some(range));
    }

    if !require_version_marker {
        return Ok(None);
    }
    match isl_1_0_definition {
        Some(offset) => Err(unsupported(
            format!("a document without {ISL_2_0_VERSION_MARKER} is ISL 1.0"),
            offset,
        )),
        None => Err(ParseError::new(
            ParseErrorKind::MissingVersionMarker,
            format!("document does not declare {ISL_2_0_VERSION_MARKER}"),
            1,
            1,
        )),
    }
}

/// The text of an unannotated top-level symbol shaped like a version marker.
fn version_marker(value: &Value) -> Option<SmolStr> {
    let Value::Symbol(symbol) = value else {
        return None;
    };
    if value.is_annotated() {
        return None;
    }
    let Ok(Some(text)) = symbol.text() else {
        return None;
    };
    is_version_marker(&text).then_some(text)
}

fn is_schema_definition(value: &Value) -> bool {
    matches!(value, Value::Struct(_))
        && (value.has_annotation(TYPE_ANNOTATION) || value.has_annotation(SCHEMA_HEADER_ANNOTATION))
}

fn is_version_marker(text: &str) -> bool {
    text.strip_prefix(ISL_VERSION_MARKER_PREFIX)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}
