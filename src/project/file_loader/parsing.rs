use std::fs;
use std::io;
use std::path::Path;

use crate::error::ExtractError;
use crate::parser::ParseErrorKind;
use crate::syntax::{ParseError, SchemaDocument};

/// Read a document's text.
///
/// Text that is not UTF-8 cannot be Ion text and is reported as a syntax
/// error rather than an access failure.
pub fn load_file(path: &Path) -> Result<String, ExtractError> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::InvalidData {
            ExtractError::parse(
                path,
                ParseError::new(ParseErrorKind::Syntax, "document is not valid UTF-8", 1, 1),
            )
        } else {
            ExtractError::access(path, e)
        }
    })
}

/// Read and parse a schema document.
pub fn load_document(path: &Path, require_version_marker: bool) -> Result<SchemaDocument, ExtractError> {
    let text = load_file(path)?;
    SchemaDocument::parse_with(path, text, require_version_marker)
}
