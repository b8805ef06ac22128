//! Common schema document fixtures for tests.

/// Defines a type with fields `type` and `value` and uses the `range::` annotation.
pub const FILE_A: &str = r#"
$ion_schema_2_0
type::{
  name: measurement,
  fields: {
    type: symbol,
    value: { type: int, valid_values: range::[0, 100] },
  },
}
"#;

/// Defines an enumeration of symbol values, one written quoted.
pub const FILE_B: &str = r#"
$ion_schema_2_0
type::{
  name: status,
  valid_values: [active, 'inactive'],
}
"#;

/// Every grammar keyword the two files above spell as symbols.
pub const FILE_A_B_KEYWORDS: &[&str] = &[
    "$ion_schema_2_0",
    "fields",
    "int",
    "measurement",
    "name",
    "status",
    "symbol",
    "valid_values",
];

pub const HEADER_AND_FOOTER: &str = r#"
$ion_schema_2_0
schema_header::{
  imports: [
    { id: "common.isl" },
    { id: "units.isl", type: meters, as: distance },
  ],
  user_reserved_fields: { type: [documentation] },
}
type::{ name: length, type: distance, documentation: "how long" }
schema_footer::{}
"#;

/// The declared-type example of the original Ion Schema tooling.
pub const DECLARED_TYPES: &str = r#"
$ion_schema_2_0
type::{
  name: foo_type,
  annotations: closed::[foo],
  fields: {
    a1: int,
    a2: { valid_values: [1, true, yes] },
    a3: { type: symbol, codepoint_length: range::[1, 10] },
    haystack: { type: list, contains: [needle] },
  }
}

type::{
  name: bar_type,
  type: {
    one_of: [
      {
        any_of: [
          { valid_values: [a, b, c] },
          { annotations: required::[d, e, f] },
        ]
      },
      {
        all_of: [
          { contains: [g, h, i] },
          { not: { fields: { j: nothing } } }
        ]
      }
    ]
  }
}
"#;

pub const DECLARED_TYPES_EXPECTED: &[&str] = &[
    "foo", "a1", "a2", "a3", "yes", "haystack", "needle", "a", "b", "c", "d", "e", "f", "g",
    "h", "i", "j",
];

pub const ISL_1_0: &str = r#"
$ion_schema_1_0
type::{ name: legacy, type: string }
"#;

pub const MALFORMED: &str = r#"
$ion_schema_2_0
type::{
  name: broken
  type: int
}
"#;
