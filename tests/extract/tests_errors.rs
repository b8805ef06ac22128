#![allow(clippy::unwrap_used, clippy::expect_used)]

use isl_symbols::{
    ExtractError, ExtractOptions, ParseErrorKind, SymbolExtractor, accept_all, default_filter,
    get_symbol_texts,
};
use rstest::rstest;

use crate::helpers::corpus::Corpus;
use crate::helpers::source_fixtures::*;

#[test]
fn test_parse_error_names_file_and_location() {
    let corpus = Corpus::new().with("a.isl", FILE_A).with("bad.isl", MALFORMED);
    let err = get_symbol_texts(corpus.path(), &default_filter()).unwrap_err();

    let ExtractError::Parse { path, error } = &err else {
        panic!("expected a parse error, got {err:?}");
    };
    assert_eq!(path, &corpus.path().join("bad.isl"));
    assert_eq!(error.kind, ParseErrorKind::Syntax);
    // `type` on line 5 follows `name: broken` without a comma
    assert_eq!((error.line, error.column), (5, 3));
    assert!(err.to_string().contains("bad.isl:5:3"));
}

#[test]
fn test_isl_1_0_is_rejected() {
    let corpus = Corpus::new().with("legacy.isl", ISL_1_0);
    let err = get_symbol_texts(corpus.path(), &accept_all()).unwrap_err();
    assert_eq!(
        err.parse_error().unwrap().kind,
        ParseErrorKind::UnsupportedVersion
    );
    assert_eq!(err.path(), corpus.path().join("legacy.isl"));
}

#[rstest]
#[case::sequential(false)]
#[case::parallel(true)]
fn test_first_failure_in_walk_order(#[case] parallel: bool) {
    let corpus = Corpus::new();
    for i in 0..20 {
        corpus.write(&format!("doc{i:02}.isl"), FILE_B);
    }
    corpus.write("doc05x.isl", MALFORMED);
    corpus.write("doc15x.isl", ISL_1_0);

    let extractor = SymbolExtractor::new(ExtractOptions::default().with_parallel(parallel));
    let err = extractor.extract(corpus.path(), &default_filter()).unwrap_err();
    assert_eq!(err.path(), corpus.path().join("doc05x.isl"));
}

#[test]
fn test_missing_root() {
    let corpus = Corpus::new();
    let missing = corpus.path().join("nope");
    let err = get_symbol_texts(&missing, &accept_all()).unwrap_err();
    assert!(matches!(err, ExtractError::Access { .. }));
    assert_eq!(err.path(), missing);
}

#[test]
fn test_root_is_a_file() {
    let corpus = Corpus::new();
    let file = corpus.write("a.isl", FILE_A);
    let err = get_symbol_texts(&file, &accept_all()).unwrap_err();
    assert!(matches!(err, ExtractError::Access { .. }));
}

#[rstest]
#[case::unknown_symbol_id("$ion_schema_2_0 type::{ name: $10 }", ParseErrorKind::UnknownSymbolId)]
#[case::invalid_escape(r"$ion_schema_2_0 type::{ name: 'a\qb' }", ParseErrorKind::InvalidEscape)]
#[case::unsupported_version("$ion_schema_3_0", ParseErrorKind::UnsupportedVersion)]
#[case::syntax("type::{ name: [ }", ParseErrorKind::Syntax)]
#[case::value_without_delimiter("$ion_schema_2_0 1a (1b) 2020-01-01Tx", ParseErrorKind::Syntax)]
fn test_error_kinds(#[case] src: &str, #[case] kind: ParseErrorKind) {
    let err = SymbolExtractor::default().extract_source(src).unwrap_err();
    assert_eq!(err.parse_error().unwrap().kind, kind);
}

#[test]
fn test_missing_marker_is_rejected_by_default() {
    let corpus = Corpus::new().with("a.isl", "{ name: unmarked }");
    let err = get_symbol_texts(corpus.path(), &accept_all()).unwrap_err();
    assert_eq!(
        err.parse_error().unwrap().kind,
        ParseErrorKind::MissingVersionMarker
    );

    let lenient = SymbolExtractor::new(ExtractOptions::default().with_require_version_marker(false));
    let symbols = lenient.extract(corpus.path(), &accept_all()).unwrap();
    assert!(symbols.contains("unmarked"));
}

#[rstest]
#[case::no_marker("type::{ name: legacy, type: string }")]
#[case::marker_after_type("type::{ name: legacy }\n$ion_schema_2_0")]
#[case::marker_after_header("schema_header::{}\n$ion_schema_2_0")]
fn test_unmarked_definitions_are_isl_1_0(#[case] src: &str) {
    let corpus = Corpus::new().with("legacy.isl", src);
    let err = get_symbol_texts(corpus.path(), &accept_all()).unwrap_err();
    assert_eq!(
        err.parse_error().unwrap().kind,
        ParseErrorKind::UnsupportedVersion
    );
    assert_eq!(err.path(), corpus.path().join("legacy.isl"));
}

#[rstest]
#[case::sequential(false)]
#[case::parallel(true)]
fn test_deep_nesting_is_a_parse_error(#[case] parallel: bool) {
    let deep = format!("$ion_schema_2_0 {}x{}", "[".repeat(2000), "]".repeat(2000));
    let corpus = Corpus::new().with("a.isl", FILE_A).with("deep.isl", &deep);

    let extractor = SymbolExtractor::new(ExtractOptions::default().with_parallel(parallel));
    let err = extractor.extract(corpus.path(), &default_filter()).unwrap_err();
    assert_eq!(err.path(), corpus.path().join("deep.isl"));
    assert_eq!(err.parse_error().unwrap().kind, ParseErrorKind::Syntax);
}
