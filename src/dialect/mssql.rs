use super::Dialect;

/// SQL Server. Positional `?` placeholders, bracketed identifiers, catalog
/// queries over `sys` and `information_schema`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MssqlDialect;

impl Dialect for MssqlDialect {
    fn name(&self) -> &str {
        "mssql"
    }

    fn quote_identifier(&self, s: &str) -> String {
        format!("[{}]", s.replace(']', "]]"))
    }

    fn table_schema_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "SELECT TABLE_CATALOG AS [catalog], TABLE_SCHEMA AS [schema], \
             TABLE_NAME AS [name], TABLE_TYPE AS [type] \
             FROM information_schema.[TABLES] WHERE TABLE_NAME = {};",
            self.quote_string(name)
        ))
    }

    fn columns_sql(&self, name: &str) -> Option<String> {
        let quoted = self.quote_string(name);
        Some(format!(
            "select c.[name], c.column_id as [position], c.is_nullable as [nullable], \
             t.name as [datatype], c.max_length as [length], c.[precision], c.[scale], \
             c.is_identity as [autoincrement], \
             case when (c.is_identity = 1 or c.is_computed = 1) then 1 else 0 end as [readonly], \
             isnull(ict.primarykey, 0) as [primarykey] \
             from sys.columns c \
             inner join sys.types t on c.user_type_id = t.user_type_id \
             left join ( \
             select ic.column_id, 1 primarykey \
             from sys.indexes i \
             inner join sys.index_columns ic \
             on i.object_id = ic.object_id and i.index_id = ic.index_id \
             where i.object_id = object_id({quoted}) and i.is_primary_key = 1 \
             ) as ict on c.column_id = ict.column_id \
             where c.object_id = object_id({quoted}) \
             order by c.column_id;"
        ))
    }

    fn function_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "SELECT ROUTINE_CATALOG AS [catalog], ROUTINE_SCHEMA AS [schema], \
             ROUTINE_NAME AS [name] \
             FROM information_schema.ROUTINES WHERE ROUTINE_NAME = {};",
            self.quote_string(name)
        ))
    }

    fn parameters_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "SELECT Substring(PARAMETER_NAME, 2, len(PARAMETER_NAME) - 1) AS [name], \
             ORDINAL_POSITION AS [position], PARAMETER_MODE AS [dirmode], \
             DATA_TYPE AS [datatype], \
             ISNULL(CHARACTER_MAXIMUM_LENGTH, 0) AS [length], \
             ISNULL(NUMERIC_PRECISION, 0) AS [precision], \
             ISNULL(NUMERIC_SCALE, 0) AS [scale] \
             FROM information_schema.PARAMETERS WHERE SPECIFIC_NAME = {} \
             ORDER BY ORDINAL_POSITION;",
            self.quote_string(name)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_quoting_uses_brackets() {
        let d = MssqlDialect;
        assert_eq!(d.quote_identifier("order"), "[order]");
        assert_eq!(d.quote_identifier("a]b"), "[a]]b]");
    }

    #[test]
    fn catalog_queries_quote_the_name() {
        let d = MssqlDialect;
        let sql = d.table_schema_sql("ttable").unwrap();
        assert!(sql.contains("TABLE_NAME = 'ttable'"));
        let sql = d.columns_sql("t'table").unwrap();
        assert!(sql.contains("object_id('t''table')"));
    }
}
