//! On-disk corpora in temporary directories.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory of schema documents, removed on drop.
pub struct Corpus {
    dir: TempDir,
}

impl Corpus {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Builder form of [`Corpus::write`].
    pub fn with(self, relative: &str, text: &str) -> Self {
        self.write(relative, text);
        self
    }

    /// Write `text` at `relative`, creating parent directories.
    pub fn write(&self, relative: &str, text: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, text).expect("write document");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
