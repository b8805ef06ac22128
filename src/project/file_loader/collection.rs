//! Deterministic, filtered directory traversal.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use super::filter::{FileMeta, PathFilter};
use crate::error::ExtractError;

/// Recursively enumerates the regular files under a root that a
/// [`PathFilter`] accepts.
///
/// Entries are visited depth-first, sorted by file name. Directories are
/// never offered to the filter. A symbolic link to a file is offered like
/// the file itself; links to directories are not descended into unless
/// [`PathWalker::follow_links`] is set, and a link that loops back to one of
/// its ancestors is skipped.
pub struct PathWalker<'f> {
    root: PathBuf,
    filter: &'f dyn PathFilter,
    follow_links: bool,
}

impl<'f> PathWalker<'f> {
    pub fn new(root: impl Into<PathBuf>, filter: &'f dyn PathFilter) -> Self {
        Self {
            root: root.into(),
            filter,
            follow_links: false,
        }
    }

    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Start the walk.
    ///
    /// Fails up front when the root is missing or not a directory; later
    /// traversal failures are yielded in place of the entry they concern.
    pub fn walk(&self) -> Result<impl Iterator<Item = Result<PathBuf, ExtractError>> + '_, ExtractError> {
        let metadata = fs::metadata(&self.root).map_err(|e| ExtractError::access(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(ExtractError::access(
                &self.root,
                io::Error::new(io::ErrorKind::NotADirectory, "root is not a directory"),
            ));
        }

        let entries = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
            .into_iter();

        Ok(entries.filter_map(move |entry| match entry {
            Ok(entry) => self.visit(&entry),
            Err(err) => self.walk_error(err),
        }))
    }

    /// Collect the whole walk, stopping at the first error.
    pub fn collect_paths(&self) -> Result<Vec<PathBuf>, ExtractError> {
        self.walk()?.collect()
    }

    fn visit(&self, entry: &DirEntry) -> Option<Result<PathBuf, ExtractError>> {
        let path = entry.path();
        let metadata = if entry.file_type().is_file() {
            match entry.metadata() {
                Ok(metadata) => metadata,
                Err(err) => return self.walk_error(err),
            }
        } else if entry.path_is_symlink() {
            // a link that is not followed: offer it only when it names a file
            match fs::metadata(path) {
                Ok(metadata) if metadata.is_file() => metadata,
                Ok(_) => return None,
                Err(err) => {
                    debug!(path = %path.display(), error = %err, "skipping dangling symbolic link");
                    return None;
                }
            }
        } else {
            return None;
        };

        let relative_path = path.strip_prefix(&self.root).unwrap_or(path);
        let meta = FileMeta::new(path, relative_path, metadata.len());

        if self.filter.accept(&meta) {
            Some(Ok(path.to_path_buf()))
        } else {
            trace!(path = %path.display(), "rejected by filter");
            None
        }
    }

    fn walk_error(&self, err: walkdir::Error) -> Option<Result<PathBuf, ExtractError>> {
        if let Some(ancestor) = err.loop_ancestor() {
            warn!(
                path = %err.path().unwrap_or(self.root.as_path()).display(),
                ancestor = %ancestor.display(),
                "skipping symbolic link loop"
            );
            return None;
        }

        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        let source = err
            .into_io_error()
            .unwrap_or_else(|| io::Error::other("directory walk failed"));
        Some(Err(ExtractError::access(path, source)))
    }
}
