mod tests_declared_types;
mod tests_errors;
mod tests_get_symbol_texts;
