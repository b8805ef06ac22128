//! Corpus-wide symbol extraction.
//!
//! ```text
//! PathWalker ──paths──▶ load + parse ──▶ collect ──▶ SymbolSet ─┐
//!  (sorted, filtered)    (per document, rayon)                  ├─ union ──▶ result
//!                                                    ...  ──────┘
//! ```
//!
//! The walk is sequential and ordered. Documents are independent: each is
//! read, parsed, collected and dropped on its own worker. Any failure aborts
//! the whole extraction; when several documents fail, the first one in walk
//! order is reported.

mod options;

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

pub use options::{ExtractOptions, ExtractionMode};

use crate::base::constants::isl_2_0_grammar_symbols;
use crate::error::ExtractError;
use crate::project::{PathFilter, PathWalker, load_document};
use crate::symbols::{SymbolSet, collect_declared_type_symbols, collect_document_symbols};
use crate::syntax::SchemaDocument;

/// Path reported for documents handed to [`SymbolExtractor::extract_source`].
pub const SOURCE_PATH: &str = "<source>";

/// Extract every distinct symbol text from the documents under `root` that
/// `filter` accepts, with default options.
pub fn get_symbol_texts(root: impl AsRef<Path>, filter: &dyn PathFilter) -> Result<SymbolSet, ExtractError> {
    SymbolExtractor::default().extract(root, filter)
}

/// Configurable symbol extraction over directories or in-memory documents.
#[derive(Debug, Clone, Default)]
pub struct SymbolExtractor {
    options: ExtractOptions,
}

impl SymbolExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extract from the documents under `root` that `filter` accepts.
    pub fn extract(&self, root: impl AsRef<Path>, filter: &dyn PathFilter) -> Result<SymbolSet, ExtractError> {
        let root = root.as_ref();
        let walker = PathWalker::new(root, filter).follow_links(self.options.follow_links);

        let mut paths = Vec::new();
        let mut walk_error = None;
        for entry in walker.walk()? {
            match entry {
                Ok(path) => paths.push(path),
                Err(err) => {
                    walk_error = Some(err);
                    break;
                }
            }
        }

        let documents = paths.len();
        let require_marker = self.options.require_version_marker;
        let symbols = self.run(paths, |path: PathBuf| {
            let doc = load_document(&path, require_marker)?;
            self.collect(&doc)
        })?;
        if let Some(err) = walk_error {
            return Err(err);
        }

        info!(
            root = %root.display(),
            documents,
            symbols = symbols.len(),
            "extracted symbol texts"
        );
        Ok(symbols)
    }

    /// Extract from in-memory documents, each named by the path used in errors.
    pub fn extract_documents<P, S>(
        &self,
        documents: impl IntoIterator<Item = (P, S)>,
    ) -> Result<SymbolSet, ExtractError>
    where
        P: Into<PathBuf>,
        S: Into<String>,
    {
        let documents: Vec<(PathBuf, String)> = documents
            .into_iter()
            .map(|(path, text)| (path.into(), text.into()))
            .collect();
        let count = documents.len();
        let require_marker = self.options.require_version_marker;

        let symbols = self.run(documents, |(path, text)| {
            let doc = SchemaDocument::parse_with(path, text, require_marker)?;
            self.collect(&doc)
        })?;

        info!(documents = count, symbols = symbols.len(), "extracted symbol texts");
        Ok(symbols)
    }

    /// Extract from a single document.
    pub fn extract_source(&self, text: &str) -> Result<SymbolSet, ExtractError> {
        let doc = SchemaDocument::parse_with(SOURCE_PATH, text, self.options.require_version_marker)?;
        let symbols = self.collect(&doc)?;
        Ok(self.seed(symbols))
    }

    fn collect(&self, doc: &SchemaDocument) -> Result<SymbolSet, ExtractError> {
        let symbols = match self.options.mode {
            ExtractionMode::Document => collect_document_symbols(doc)?,
            ExtractionMode::DeclaredTypes => collect_declared_type_symbols(doc)?,
        };
        debug!(
            path = %doc.path().display(),
            symbols = symbols.len(),
            "collected document symbols"
        );
        Ok(symbols)
    }

    /// Process every item and union the results.
    ///
    /// Parallel results are kept in input order so the reported error is the
    /// first failure in that order.
    fn run<T, F>(&self, items: Vec<T>, process: F) -> Result<SymbolSet, ExtractError>
    where
        T: Send,
        F: Fn(T) -> Result<SymbolSet, ExtractError> + Sync + Send,
    {
        let symbols = if self.options.parallel && items.len() > 1 {
            let results: Vec<_> = items.into_par_iter().map(&process).collect();
            let sets = results.into_iter().collect::<Result<Vec<_>, _>>()?;
            sets.into_par_iter().reduce(SymbolSet::new, SymbolSet::union)
        } else {
            items
                .into_iter()
                .try_fold(SymbolSet::new(), |acc, item| Ok::<_, ExtractError>(acc.union(process(item)?)))?
        };
        Ok(self.seed(symbols))
    }

    fn seed(&self, symbols: SymbolSet) -> SymbolSet {
        if self.options.include_grammar_symbols {
            symbols.union(isl_2_0_grammar_symbols().collect())
        } else {
            symbols
        }
    }
}
