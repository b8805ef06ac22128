//! Symbol text extraction from parsed schema documents.
//!
//! Two collectors walk the typed tree of one [`SchemaDocument`]:
//! - [`collect_document_symbols`] takes every text in a symbol position
//!   (annotations, field names, symbol values) anywhere in the document.
//! - [`collect_declared_type_symbols`] takes only the texts that data
//!   matching the document's named types would carry.
//!
//! Per-document results are [`SymbolSet`]s, merged by set union.
//!
//! [`SchemaDocument`]: crate::syntax::SchemaDocument

mod collector;
mod declared;
mod set;

pub use collector::collect_document_symbols;
pub use declared::collect_declared_type_symbols;
pub use set::SymbolSet;
