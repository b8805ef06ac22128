mod collection;
mod filter;
mod parsing;

// Re-export core file loading functions
pub use collection::PathWalker;
pub use filter::{FileMeta, PathFilter, accept_all, default_filter, has_extension, path_contains};
pub use parsing::{load_document, load_file};
