mod tests_ion_text;
