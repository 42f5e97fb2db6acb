use super::Dialect;

/// Plain ANSI SQL. Positional `?` placeholders, double-quoted identifiers,
/// no schema catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiDialect;

impl Dialect for AnsiDialect {
    fn name(&self) -> &str {
        "ansi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let d = AnsiDialect;
        assert_eq!(d.name(), "ansi");
        assert!(!d.supports_named_parameter());
        assert!(!d.supports_indexed_parameter());
        assert_eq!(d.parameter_placeholder(), "?");
        assert_eq!(d.quote_string("it's"), "'it''s'");
        assert_eq!(d.quote_identifier("a\"b"), "\"a\"\"b\"");
        assert_eq!(d.table_schema_sql("t"), None);
        assert_eq!(d.parameters_sql("p"), None);
    }
}
