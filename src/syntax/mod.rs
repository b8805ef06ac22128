//! Schema documents: parsed Ion text plus the Ion Schema version check.
//!
//! [`SchemaDocument::parse`] is the boundary between the lossless,
//! error-collecting [`crate::parser`] and the all-or-nothing extraction
//! pipeline: the first syntax error becomes a located [`ParseError`].

pub mod document;
pub mod parser;

pub use document::SchemaDocument;
pub use parser::ParseError;
