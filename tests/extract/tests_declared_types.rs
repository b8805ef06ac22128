#![allow(clippy::unwrap_used, clippy::expect_used)]

use isl_symbols::{ExtractOptions, ExtractionMode, ParseErrorKind, SymbolExtractor, default_filter};

use crate::helpers::corpus::Corpus;
use crate::helpers::source_fixtures::*;

fn declared_extractor() -> SymbolExtractor {
    SymbolExtractor::new(ExtractOptions::default().with_mode(ExtractionMode::DeclaredTypes))
}

fn sorted(texts: &[&str]) -> Vec<String> {
    let mut texts: Vec<_> = texts.iter().map(|s| s.to_string()).collect();
    texts.sort();
    texts
}

#[test]
fn test_declared_types_example() {
    let symbols = declared_extractor().extract_source(DECLARED_TYPES).unwrap();
    assert_eq!(symbols.into_sorted_vec(), sorted(DECLARED_TYPES_EXPECTED));
}

#[test]
fn test_declared_types_over_a_corpus() {
    let corpus = Corpus::new()
        .with("a.isl", FILE_A)
        .with("b.isl", FILE_B)
        .with("c.isl", HEADER_AND_FOOTER);
    let symbols = declared_extractor()
        .extract(corpus.path(), &default_filter())
        .unwrap();
    // field names of `measurement` and the `status` enumeration
    assert_eq!(
        symbols.into_sorted_vec(),
        sorted(&["type", "value", "active", "inactive"])
    );
}

#[test]
fn test_declared_types_subset_of_document_mode() {
    let document = SymbolExtractor::default()
        .extract_source(DECLARED_TYPES)
        .unwrap();
    let declared = declared_extractor().extract_source(DECLARED_TYPES).unwrap();
    assert!(declared.iter().all(|s| document.contains(s)));
    assert!(document.contains("foo_type"));
    assert!(!declared.contains("foo_type"));
}

#[test]
fn test_grammar_symbols_with_declared_types() {
    let extractor = SymbolExtractor::new(
        ExtractOptions::default()
            .with_mode(ExtractionMode::DeclaredTypes)
            .with_grammar_symbols(true),
    );
    let symbols = extractor.extract_source(DECLARED_TYPES).unwrap();
    assert!(symbols.contains("foo"));
    assert!(symbols.contains("ordered_elements"));
    assert!(symbols.contains("$ion_schema_2_0"));
}

#[test]
fn test_declared_types_before_marker_are_rejected() {
    let err = declared_extractor()
        .extract_source("type::{ name: legacy, valid_values: [x] } $ion_schema_2_0")
        .unwrap_err();
    assert_eq!(
        err.parse_error().unwrap().kind,
        ParseErrorKind::UnsupportedVersion
    );
}

#[test]
fn test_declared_types_only_after_marker() {
    let symbols = declared_extractor()
        .extract_source("{ fields: { early: int } } $ion_schema_2_0 type::{ name: t, valid_values: [late] }")
        .unwrap();
    assert_eq!(symbols.into_sorted_vec(), sorted(&["late"]));
}
