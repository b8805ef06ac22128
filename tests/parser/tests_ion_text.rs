#![allow(clippy::unwrap_used, clippy::expect_used)]

use isl_symbols::parser::{AstNode, SourceFile, SyntaxKind, Value, parse, tokenize};
use rstest::rstest;

use crate::helpers::source_fixtures::*;

fn root(src: &str) -> SourceFile {
    let parsed = parse(src);
    assert!(parsed.ok(), "unexpected errors: {:?}", parsed.errors);
    SourceFile::cast(parsed.syntax()).unwrap()
}

#[rstest]
#[case::file_a(FILE_A)]
#[case::file_b(FILE_B)]
#[case::header_footer(HEADER_AND_FOOTER)]
#[case::declared_types(DECLARED_TYPES)]
#[case::legacy(ISL_1_0)]
fn test_fixtures_parse_losslessly(#[case] src: &str) {
    let parsed = parse(src);
    assert!(parsed.ok(), "{:?}", parsed.errors);
    assert_eq!(parsed.syntax().text().to_string(), src);

    let lexed: String = tokenize(src).iter().map(|t| t.text).collect();
    assert_eq!(lexed, src);
}

#[test]
fn test_type_definition_shape() {
    let file = root(FILE_A);
    let values: Vec<_> = file.values().collect();
    assert_eq!(values.len(), 2);

    let Value::Struct(definition) = &values[1] else {
        panic!("expected Struct");
    };
    assert!(values[1].has_annotation("type"));
    let fields = definition.field("fields").unwrap();
    let fields = fields.as_struct().unwrap();
    let names: Vec<_> = fields
        .fields()
        .map(|f| f.name().unwrap().text().unwrap().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["type", "value"]);

    let value = fields.field("value").unwrap();
    let range = value.as_struct().unwrap().field("valid_values").unwrap();
    assert!(range.has_annotation("range"));
    assert_eq!(range.as_list().unwrap().elements().count(), 2);
}

#[test]
fn test_malformed_fixture_reports_location() {
    let parsed = parse(MALFORMED);
    assert!(!parsed.ok());
    let error = &parsed.errors[0];
    let offset = MALFORMED.find("  type: int").unwrap() + 2;
    assert_eq!(usize::from(error.range.start()), offset);
}

#[test]
fn test_comments_are_trivia() {
    let parsed = parse("/* a */ x // b\n");
    let kinds: Vec<_> = parsed
        .syntax()
        .children_with_tokens()
        .map(|e| e.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::BLOCK_COMMENT,
            SyntaxKind::WHITESPACE,
            SyntaxKind::SYMBOL_VALUE,
            SyntaxKind::WHITESPACE,
            SyntaxKind::LINE_COMMENT,
            SyntaxKind::WHITESPACE,
        ]
    );
}
