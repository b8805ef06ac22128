use std::collections::HashSet;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

/// A deduplicated set of symbol texts.
///
/// Equality of texts is exact and case-sensitive. Iteration order is
/// unspecified; use [`SymbolSet::sorted`] for a stable view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolSet {
    symbols: FxHashSet<SmolStr>,
}

impl SymbolSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a text, returning whether it was new.
    pub fn insert(&mut self, text: impl Into<SmolStr>) -> bool {
        self.symbols.insert(text.into())
    }

    pub fn contains(&self, text: &str) -> bool {
        self.symbols.contains(text)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SmolStr> {
        self.symbols.iter()
    }

    /// Set union. Consumes both sets and reuses the larger allocation.
    pub fn union(self, other: Self) -> Self {
        let (mut larger, smaller) = if self.len() >= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        larger.symbols.extend(smaller.symbols);
        larger
    }

    /// Union of any number of sets; the empty set for none.
    pub fn aggregate(sets: impl IntoIterator<Item = Self>) -> Self {
        sets.into_iter().fold(Self::new(), Self::union)
    }

    /// Texts in ascending byte order
    pub fn sorted(&self) -> Vec<&str> {
        let mut texts: Vec<_> = self.symbols.iter().map(SmolStr::as_str).collect();
        texts.sort_unstable();
        texts
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut texts: Vec<_> = self.symbols.into_iter().map(String::from).collect();
        texts.sort_unstable();
        texts
    }

    pub fn into_string_set(self) -> HashSet<String> {
        self.symbols.into_iter().map(String::from).collect()
    }
}

impl<S: Into<SmolStr>> FromIterator<S> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<SmolStr>> Extend<S> for SymbolSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.symbols.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for SymbolSet {
    type Item = SmolStr;
    type IntoIter = std::collections::hash_set::IntoIter<SmolStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.into_iter()
    }
}

impl<'a> IntoIterator for &'a SymbolSet {
    type Item = &'a SmolStr;
    type IntoIter = std::collections::hash_set::Iter<'a, SmolStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
