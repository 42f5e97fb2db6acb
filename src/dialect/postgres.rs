use super::Dialect;

/// PostgreSQL. Indexed `$1` placeholders, double-quoted identifiers,
/// catalog queries scoped to `current_schema()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl Dialect for PostgresDialect {
    fn name(&self) -> &str {
        "postgres"
    }

    fn supports_indexed_parameter(&self) -> bool {
        true
    }

    fn parameter_placeholder(&self) -> &str {
        "$"
    }

    fn table_schema_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "select table_catalog as \"catalog\", table_schema as \"schema\", \
             table_name as \"name\", table_type as \"type\" \
             from information_schema.tables \
             where table_name = {} \
             and table_schema = current_schema() \
             and table_schema not in ('pg_catalog', 'information_schema');",
            self.quote_string(name)
        ))
    }

    fn columns_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "select column_name as \"name\", ordinal_position as \"position\", \
             case is_nullable when 'YES' then true else false end as \"nullable\", \
             data_type as \"datatype\", \
             COALESCE(character_maximum_length, 0) as \"length\", \
             COALESCE(numeric_precision, 0) as \"precision\", \
             COALESCE(numeric_scale, 0) as \"scale\", \
             case when pg_get_serial_sequence(table_name, column_name) is null \
             then false else true end as \"autoincrement\", \
             case is_updatable when 'YES' then false else true end as \"readonly\", \
             case when exists ( \
             select kc.column_name \
             from information_schema.table_constraints tc, \
             information_schema.key_column_usage kc \
             where kc.table_name = c.table_name and kc.table_schema = c.table_schema \
             and kc.column_name = c.column_name \
             and tc.constraint_type = 'PRIMARY KEY' \
             and kc.table_name = tc.table_name and kc.table_schema = tc.table_schema \
             and kc.constraint_name = tc.constraint_name \
             ) then true else false end as \"primarykey\" \
             from information_schema.columns c \
             where table_name = {} \
             and table_schema = current_schema() \
             order by ordinal_position;",
            self.quote_string(name)
        ))
    }

    fn function_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "select routine_catalog as \"catalog\", routine_schema as \"schema\", \
             routine_name as \"name\" \
             from information_schema.routines \
             where routine_name = {} and routine_schema = current_schema();",
            self.quote_string(name)
        ))
    }

    fn parameters_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "select p.parameter_name as \"name\", p.ordinal_position as \"position\", \
             p.parameter_mode as \"dirmode\", p.data_type as \"datatype\", \
             COALESCE(p.character_maximum_length, 0) as \"length\", \
             COALESCE(p.numeric_precision, 0) as \"precision\", \
             COALESCE(p.numeric_scale, 0) as \"scale\" \
             from information_schema.parameters p, information_schema.routines r \
             where p.specific_catalog = r.specific_catalog \
             and p.specific_schema = r.specific_schema \
             and p.specific_name = r.specific_name \
             and r.routine_name = {} and r.routine_schema = current_schema() \
             order by ordinal_position;",
            self.quote_string(name)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_indexed() {
        let d = PostgresDialect;
        assert!(d.supports_indexed_parameter());
        assert!(!d.supports_named_parameter());
        assert_eq!(d.parameter_placeholder(), "$");
    }

    #[test]
    fn catalog_queries_are_schema_scoped() {
        let d = PostgresDialect;
        let sql = d.table_schema_sql("ttable").unwrap();
        assert!(sql.contains("table_name = 'ttable'"));
        assert!(sql.contains("current_schema()"));
        let sql = d.function_sql("fn_query").unwrap();
        assert!(sql.contains("routine_name = 'fn_query'"));
    }
}
