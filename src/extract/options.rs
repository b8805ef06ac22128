/// What to collect from each document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ExtractionMode {
    /// Every symbol text anywhere in the document
    #[default]
    Document,
    /// Only the symbol texts that data matching the document's named types
    /// would carry
    DeclaredTypes,
}

/// Configuration for a [`super::SymbolExtractor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub mode: ExtractionMode,
    /// Parse and collect documents on the rayon thread pool
    pub parallel: bool,
    /// Follow symbolic links while walking; loops are skipped
    pub follow_links: bool,
    /// Reject documents that do not declare `$ion_schema_2_0`; when unset, a
    /// document without any version marker is read as ISL 2.0
    pub require_version_marker: bool,
    /// Seed every result with the complete ISL 2.0 grammar symbol list
    pub include_grammar_symbols: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::Document,
            parallel: true,
            follow_links: false,
            require_version_marker: true,
            include_grammar_symbols: false,
        }
    }
}

impl ExtractOptions {
    pub fn with_mode(mut self, mode: ExtractionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn with_require_version_marker(mut self, require: bool) -> Self {
        self.require_version_marker = require;
        self
    }

    pub fn with_grammar_symbols(mut self, include: bool) -> Self {
        self.include_grammar_symbols = include;
        self
    }
}
