//! Corpus discovery and document loading.
//!
//! [`PathWalker`] enumerates regular files under a root in a deterministic
//! order and consults a [`PathFilter`] with each file's metadata before the
//! file is ever opened. Accepted paths are loaded into
//! [`crate::syntax::SchemaDocument`]s by [`load_document`].

pub mod file_loader;

pub use file_loader::{
    FileMeta, PathFilter, PathWalker, accept_all, default_filter, has_extension, load_document,
    load_file, path_contains,
};
