#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::atomic::{AtomicUsize, Ordering};

use isl_symbols::{
    ExtractOptions, FileMeta, SymbolExtractor, accept_all, default_filter, get_symbol_texts,
    path_contains,
};
use rstest::rstest;

use crate::helpers::corpus::Corpus;
use crate::helpers::source_fixtures::*;

fn sorted(texts: &[&str]) -> Vec<String> {
    let mut texts: Vec<_> = texts.iter().map(|s| s.to_string()).collect();
    texts.sort();
    texts.dedup();
    texts
}

#[test]
fn test_two_file_scenario() {
    let corpus = Corpus::new().with("a.isl", FILE_A).with("b.isl", FILE_B);
    let symbols = get_symbol_texts(corpus.path(), &default_filter()).unwrap();

    for expected in ["type", "value", "range", "active", "inactive"] {
        assert!(symbols.contains(expected), "missing {expected}");
    }
    let mut expected = vec!["type", "value", "range", "active", "inactive"];
    expected.extend_from_slice(FILE_A_B_KEYWORDS);
    assert_eq!(symbols.into_sorted_vec(), sorted(&expected));
}

#[test]
fn test_filter_rejecting_everything_gives_empty_set() {
    let corpus = Corpus::new().with("a.isl", FILE_A).with("nested/b.isl", FILE_B);
    let symbols = get_symbol_texts(corpus.path(), &|_: &FileMeta<'_>| false).unwrap();
    assert!(symbols.is_empty());
}

#[test]
fn test_rejected_files_are_never_parsed() {
    // every file is malformed, so opening any of them would fail the call
    let corpus = Corpus::new()
        .with("a.isl", MALFORMED)
        .with("b.isl", MALFORMED)
        .with("deep/er/c.isl", MALFORMED);
    let calls = AtomicUsize::new(0);
    let filter = |_: &FileMeta<'_>| {
        calls.fetch_add(1, Ordering::SeqCst);
        false
    };

    let symbols = get_symbol_texts(corpus.path(), &filter).unwrap();
    assert!(symbols.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_default_filter_skips_other_files() {
    let corpus = Corpus::new()
        .with("a.isl", FILE_A)
        .with("README.md", "not :: ion [")
        .with("b.isl.bak", MALFORMED);
    let symbols = get_symbol_texts(corpus.path(), &default_filter()).unwrap();
    assert!(symbols.contains("measurement"));
}

#[test]
fn test_path_filter_excludes_legacy_documents() {
    let corpus = Corpus::new()
        .with("isl/ion_schema_2_0/a.isl", FILE_A)
        .with("isl/ion_schema_1_0/legacy.isl", ISL_1_0);
    let symbols = get_symbol_texts(corpus.path(), &path_contains("ion_schema_2_0")).unwrap();
    assert!(symbols.contains("measurement"));
    assert!(!symbols.contains("legacy"));
}

#[test]
fn test_annotations_and_field_names_anywhere() {
    let corpus = Corpus::new().with(
        "a.isl",
        "$ion_schema_2_0 x::1 { y: 1, n: [{ y: 2 }, x2::{ y: 3 }] } (deep::(deeper::[]))",
    );
    let symbols = get_symbol_texts(corpus.path(), &accept_all()).unwrap();
    assert_eq!(
        symbols.into_sorted_vec(),
        sorted(&["$ion_schema_2_0", "x", "y", "n", "x2", "deep", "deeper"])
    );
}

#[test]
fn test_quoting_collapses() {
    let corpus = Corpus::new().with("a.isl", "'$ion_schema_2_0' z 'z' [z, 'z'] { k: 'z' }");
    let symbols = get_symbol_texts(corpus.path(), &accept_all()).unwrap();
    assert_eq!(symbols.into_sorted_vec(), sorted(&["$ion_schema_2_0", "z", "k"]));
}

#[test]
fn test_header_footer_and_imports() {
    let corpus = Corpus::new().with("a.isl", HEADER_AND_FOOTER);
    let symbols = get_symbol_texts(corpus.path(), &accept_all()).unwrap();
    for expected in [
        "schema_header",
        "imports",
        "id",
        "type",
        "meters",
        "as",
        "distance",
        "user_reserved_fields",
        "documentation",
        "length",
        "schema_footer",
    ] {
        assert!(symbols.contains(expected), "missing {expected}");
    }
    assert!(!symbols.contains("common.isl"));
    assert!(!symbols.contains("how long"));
}

#[test]
fn test_empty_directory() {
    let corpus = Corpus::new();
    assert!(get_symbol_texts(corpus.path(), &accept_all()).unwrap().is_empty());
}

#[rstest]
#[case::sequential(false)]
#[case::parallel(true)]
fn test_deterministic_across_runs(#[case] parallel: bool) {
    let corpus = Corpus::new();
    for i in 0..40 {
        corpus.write(
            &format!("dir{}/doc{i}.isl", i % 5),
            &format!("$ion_schema_2_0 type::{{ name: t{i}, fields: {{ f{}: int }} }}", i % 7),
        );
    }
    let extractor = SymbolExtractor::new(ExtractOptions::default().with_parallel(parallel));
    let first = extractor.extract(corpus.path(), &default_filter()).unwrap();
    let second = extractor.extract(corpus.path(), &default_filter()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 40 + 7 + 5);
}

#[test]
fn test_parallel_matches_sequential() {
    let corpus = Corpus::new()
        .with("a.isl", FILE_A)
        .with("b.isl", FILE_B)
        .with("c.isl", HEADER_AND_FOOTER)
        .with("d.isl", DECLARED_TYPES);
    let sequential = SymbolExtractor::new(ExtractOptions::default().with_parallel(false))
        .extract(corpus.path(), &default_filter())
        .unwrap();
    let parallel = SymbolExtractor::new(ExtractOptions::default().with_parallel(true))
        .extract(corpus.path(), &default_filter())
        .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_in_memory_documents_match_disk() {
    let corpus = Corpus::new().with("a.isl", FILE_A).with("b.isl", FILE_B);
    let from_disk = get_symbol_texts(corpus.path(), &default_filter()).unwrap();
    let in_memory = SymbolExtractor::default()
        .extract_documents([("a.isl", FILE_A), ("b.isl", FILE_B)])
        .unwrap();
    assert_eq!(from_disk, in_memory);
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_terminates() {
    let corpus = Corpus::new().with("sub/a.isl", FILE_A);
    std::os::unix::fs::symlink(corpus.path(), corpus.path().join("sub/loop")).unwrap();

    let extractor = SymbolExtractor::new(ExtractOptions::default().with_follow_links(true));
    let symbols = extractor.extract(corpus.path(), &default_filter()).unwrap();
    assert!(symbols.contains("measurement"));
}

#[cfg(unix)]
#[test]
fn test_symlinked_document_is_read() {
    let corpus = Corpus::new().with("a.isl", FILE_A);
    let shared = Corpus::new().with(
        "shared.isl",
        "$ion_schema_2_0 type::{ name: only_in_linked, type: symbol }",
    );
    std::os::unix::fs::symlink(shared.path().join("shared.isl"), corpus.path().join("shared.isl"))
        .unwrap();

    let symbols = get_symbol_texts(corpus.path(), &default_filter()).unwrap();
    assert!(symbols.contains("only_in_linked"));
    assert!(symbols.contains("measurement"));
}
