//! # isl-symbols
//!
//! Symbol text extraction for Ion Schema 2.0 documents: walks a directory of
//! schemas, parses each one, and returns every distinct symbol text they use
//! (keywords, field names, type names, annotations, symbol values). The
//! result feeds a symbol-table builder.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract   → get_symbol_texts, SymbolExtractor, ExtractOptions
//!   ↓
//! symbols   → per-document collectors, SymbolSet
//!   ↓
//! project   → PathWalker, PathFilter, document loading
//!   ↓
//! syntax    → SchemaDocument, version check, ParseError
//!   ↓
//! parser    → Logos lexer, recursive-descent parser, typed AST
//!   ↓
//! base      → Primitives (LineIndex, TextRange, constants)
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use isl_symbols::{default_filter, get_symbol_texts};
//!
//! let symbols = get_symbol_texts("schemas/", &default_filter())?;
//! for text in symbols.sorted() {
//!     println!("{text}");
//! }
//! # Ok::<(), isl_symbols::ExtractError>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → syntax → project → symbols → extract)
// ============================================================================

/// Foundation types: LineIndex, TextRange, domain constants
pub mod base;

/// Parser: Logos lexer, recursive-descent parser, typed AST
pub mod parser;

/// Syntax: schema documents and located parse errors
pub mod syntax;

/// Project: corpus discovery and document loading
pub mod project;

/// Symbols: per-document collection and set union
pub mod symbols;

/// Extraction entry points and options
pub mod extract;

mod error;

// Re-export the public surface
pub use base::{LineCol, LineIndex, TextRange, TextSize};
pub use error::{ExtractError, Result};
pub use extract::{ExtractOptions, ExtractionMode, SymbolExtractor, get_symbol_texts};
pub use parser::ParseErrorKind;
pub use project::{FileMeta, PathFilter, accept_all, default_filter, has_extension, path_contains};
pub use symbols::SymbolSet;
pub use syntax::{ParseError, SchemaDocument};
