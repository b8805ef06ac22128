//! Foundation types for the extraction pipeline.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`TextRange`], [`TextSize`] - Source positions (byte offsets)
//! - [`LineCol`], [`LineIndex`] - Line/column conversion for diagnostics
//! - Domain constants (file extension, version markers, system symbols,
//!   the Ion Schema 2.0 grammar symbols)
//!
//! This module has NO dependencies on other crate modules.

pub mod constants;
mod span;

pub use span::{LineCol, LineIndex, TextRange, TextSize};

// Re-export text-size types for convenience
pub use text_size;
