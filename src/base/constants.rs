//! Domain constants for Ion text and Ion Schema.

/// File extension of Ion Schema documents.
pub const ISL_EXT: &str = "isl";

/// Version marker of the only supported Ion Schema grammar.
pub const ISL_2_0_VERSION_MARKER: &str = "$ion_schema_2_0";

/// Version marker of the legacy grammar, rejected by extraction.
pub const ISL_1_0_VERSION_MARKER: &str = "$ion_schema_1_0";

/// Prefix shared by every Ion Schema version marker (`$ion_schema_<digit>...`).
pub const ISL_VERSION_MARKER_PREFIX: &str = "$ion_schema_";

/// Annotation of a top-level named type definition.
pub const TYPE_ANNOTATION: &str = "type";

/// Annotation of the schema header struct.
pub const SCHEMA_HEADER_ANNOTATION: &str = "schema_header";

/// The Ion 1.0 version marker; a system value, not user content.
pub const ION_1_0_VERSION_MARKER: &str = "$ion_1_0";

/// Annotation marking a top-level local symbol table struct.
pub const ION_SYMBOL_TABLE: &str = "$ion_symbol_table";

/// Annotation allowing `null` in ISL type arguments.
pub const NULL_OR: &str = "$null_or";

/// The Ion 1.0 system symbol table, indexed by symbol ID minus one.
///
/// `$0` is absent: it is the symbol with unknown text.
pub const SYSTEM_SYMBOLS: [&str; 9] = [
    "$ion",
    "$ion_1_0",
    "$ion_symbol_table",
    "name",
    "version",
    "imports",
    "symbols",
    "max_id",
    "$ion_shared_symbol_table",
];

/// Resolve a symbol ID against the system symbol table.
///
/// Returns `Some(None)` for `$0`, `Some(Some(text))` for a system symbol, and
/// `None` when the ID lies outside the system table.
pub fn system_symbol(sid: u64) -> Option<Option<&'static str>> {
    match sid {
        0 => Some(None),
        n => usize::try_from(n - 1)
            .ok()
            .and_then(|index| SYSTEM_SYMBOLS.get(index))
            .map(|text| Some(*text)),
    }
}

/// Built-in type names of Ion Schema 2.0, including the `$`-prefixed
/// (non-nullable Ion) variants.
pub const ISL_2_0_BUILTIN_TYPES: &[&str] = &[
    "any", "$any", "blob", "$blob", "bool", "$bool", "clob", "$clob", "decimal", "$decimal",
    "document", "float", "$float", "int", "$int", "list", "$list", "lob", "$lob", "nothing",
    "$null", "number", "$number", "sexp", "$sexp", "string", "$string", "struct", "$struct",
    "symbol", "$symbol", "text", "$text", "timestamp", "$timestamp",
];

/// Keywords of Ion Schema 2.0: header/footer/type fields and constraint names.
pub const ISL_2_0_KEYWORDS: &[&str] = &[
    "all_of",
    "annotations",
    "any_of",
    "as",
    "byte_length",
    "codepoint_length",
    "container_length",
    "contains",
    "element",
    "exponent",
    "field_names",
    "fields",
    "id",
    "ieee754_float",
    "imports",
    "name",
    "not",
    "occurs",
    "one_of",
    "ordered_elements",
    "precision",
    "regex",
    "schema_footer",
    "schema_header",
    "timestamp_offset",
    "timestamp_precision",
    "type",
    "user_reserved_fields",
    "utf8_byte_length",
    "valid_values",
];

/// Range syntax and occurrence modifiers.
pub const ISL_2_0_RANGE_SYMBOLS: &[&str] =
    &["range", "min", "max", "exclusive", "optional", "required"];

/// Timestamp precision names accepted by `timestamp_precision`.
pub const ISL_2_0_TIMESTAMP_PRECISIONS: &[&str] = &[
    "year",
    "month",
    "day",
    "minute",
    "second",
    "millisecond",
    "microsecond",
    "nanosecond",
];

/// Interchange formats accepted by `ieee754_float`.
pub const ISL_2_0_FLOAT_FORMATS: &[&str] = &["binary16", "binary32", "binary64"];

/// Modifier annotations: regex flags, `closed`, `distinct`, `required`, `$null_or`.
pub const ISL_2_0_MODIFIERS: &[&str] = &["i", "m", "closed", "distinct", "required", NULL_OR];

/// Every symbol the Ion Schema 2.0 grammar itself defines.
pub fn isl_2_0_grammar_symbols() -> impl Iterator<Item = &'static str> {
    std::iter::once(ISL_2_0_VERSION_MARKER)
        .chain(ISL_2_0_BUILTIN_TYPES.iter().copied())
        .chain(ISL_2_0_KEYWORDS.iter().copied())
        .chain(ISL_2_0_RANGE_SYMBOLS.iter().copied())
        .chain(ISL_2_0_TIMESTAMP_PRECISIONS.iter().copied())
        .chain(ISL_2_0_FLOAT_FORMATS.iter().copied())
        .chain(ISL_2_0_MODIFIERS.iter().copied())
}
