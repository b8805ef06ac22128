//! Symbols that data conforming to a document's named types would carry.
//!
//! Only the constraints that admit symbols into data are considered:
//!
//! | constraint | contributes |
//! |---|---|
//! | `fields` | every field name, plus the field's type argument |
//! | `valid_values` | every symbol of each non-range value |
//! | `contains` | every symbol of each value |
//! | `annotations` | list form: its symbols; otherwise its type argument |
//! | `type`, `not`, `element`, `field_names` | the type argument |
//! | `ordered_elements`, `any_of`, `all_of`, `one_of` | each type argument |
//!
//! A type argument contributes only when it is an inline type definition.
//! Named references and imports add nothing. Constraints nested under `not`
//! are included even though they describe data that does *not* match.

use tracing::trace;

use super::SymbolSet;
use super::collector::SymbolCollector;
use crate::base::constants::TYPE_ANNOTATION;
use crate::error::ExtractError;
use crate::parser::{Struct, Value};
use crate::syntax::SchemaDocument;

const ID: &str = "id";
const RANGE: &str = "range";

/// Collect the symbol texts admitted by the document's top-level `type::`
/// definitions. Values before the version marker are not part of the schema.
pub fn collect_declared_type_symbols(doc: &SchemaDocument) -> Result<SymbolSet, ExtractError> {
    let mut collector = SymbolCollector::new(doc.path());

    for value in doc.schema_content() {
        let Value::Struct(definition) = &value else {
            continue;
        };
        if !value.has_annotation(TYPE_ANNOTATION) {
            continue;
        }
        trace!(path = %doc.path().display(), "visiting type definition");
        visit_type_definition(&mut collector, definition)?;
    }

    Ok(collector.finish())
}

fn visit_type_definition(collector: &mut SymbolCollector<'_>, definition: &Struct) -> Result<(), ExtractError> {
    for field in definition.fields() {
        let (Some(name), Some(value)) = (field.name(), field.value()) else {
            continue;
        };
        let Ok(Some(name)) = name.text() else {
            continue;
        };

        match name.as_str() {
            "fields" => {
                if let Value::Struct(fields) = &value {
                    for field in fields.fields() {
                        if let Some(field_name) = field.name() {
                            collector.add(field_name.text())?;
                        }
                        if let Some(argument) = field.value() {
                            visit_type_argument(collector, &argument)?;
                        }
                    }
                }
            }
            "valid_values" => {
                if value.has_annotation(RANGE) {
                    continue;
                }
                for element in value.sequence_elements() {
                    if !element.has_annotation(RANGE) {
                        collector.visit_value(&element)?;
                    }
                }
            }
            "contains" => {
                for element in value.sequence_elements() {
                    collector.visit_value(&element)?;
                }
            }
            "annotations" => match &value {
                Value::List(list) => {
                    for element in list.elements() {
                        if let Value::Symbol(symbol) = &element {
                            collector.add(symbol.text())?;
                        }
                    }
                }
                _ => visit_type_argument(collector, &value)?,
            },
            "type" | "not" | "element" | "field_names" => visit_type_argument(collector, &value)?,
            "ordered_elements" | "any_of" | "all_of" | "one_of" => {
                for argument in value.sequence_elements() {
                    visit_type_argument(collector, &argument)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Inline type definitions recurse; references and imports (`{ id, type }`)
/// carry no symbols of their own.
fn visit_type_argument(collector: &mut SymbolCollector<'_>, argument: &Value) -> Result<(), ExtractError> {
    match argument {
        Value::Struct(inline) if inline.field(ID).is_none() => visit_type_definition(collector, inline),
        _ => Ok(()),
    }
}
