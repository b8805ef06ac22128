//! Caller-supplied file selection.

use std::path::Path;

use crate::base::constants::ISL_EXT;

/// Read-only view of a candidate file, built from directory metadata only.
#[derive(Debug, Clone, Copy)]
pub struct FileMeta<'a> {
    path: &'a Path,
    relative_path: &'a Path,
    len: u64,
}

impl<'a> FileMeta<'a> {
    pub fn new(path: &'a Path, relative_path: &'a Path, len: u64) -> Self {
        Self {
            path,
            relative_path,
            len,
        }
    }

    /// Path as walked: the root joined with [`Self::relative_path`]
    pub fn path(&self) -> &'a Path {
        self.path
    }

    /// Path relative to the walk root
    pub fn relative_path(&self) -> &'a Path {
        self.relative_path
    }

    pub fn file_name(&self) -> Option<&'a str> {
        self.path.file_name().and_then(|n| n.to_str())
    }

    /// Extension without the leading dot
    pub fn extension(&self) -> Option<&'a str> {
        self.path.extension().and_then(|e| e.to_str())
    }

    /// Size in bytes
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Decides which discovered files take part in an extraction.
///
/// Implemented for every `Fn(&FileMeta) -> bool + Sync` closure.
pub trait PathFilter: Sync {
    fn accept(&self, file: &FileMeta<'_>) -> bool;
}

impl<F> PathFilter for F
where
    F: Fn(&FileMeta<'_>) -> bool + Sync,
{
    fn accept(&self, file: &FileMeta<'_>) -> bool {
        self(file)
    }
}

/// Accept files whose extension is exactly `extension` (no leading dot).
pub fn has_extension(extension: impl Into<String>) -> impl PathFilter {
    let extension = extension.into();
    move |file: &FileMeta<'_>| file.extension() == Some(extension.as_str())
}

/// Accept files whose root-relative path contains `fragment`.
pub fn path_contains(fragment: impl Into<String>) -> impl PathFilter {
    let fragment = fragment.into();
    move |file: &FileMeta<'_>| file.relative_path().to_string_lossy().contains(fragment.as_str())
}

/// Accept Ion Schema documents (`*.isl`).
pub fn default_filter() -> impl PathFilter {
    has_extension(ISL_EXT)
}

pub fn accept_all() -> impl PathFilter {
    |_: &FileMeta<'_>| true
}
