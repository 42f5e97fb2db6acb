use super::Dialect;

/// MySQL. Positional `?` placeholders, backtick identifiers, catalog
/// queries scoped to the current database.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlDialect;

impl Dialect for MysqlDialect {
    fn name(&self) -> &str {
        "mysql"
    }

    fn quote_identifier(&self, s: &str) -> String {
        format!("`{}`", s.replace('`', "``"))
    }

    fn table_schema_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "SELECT TABLE_CATALOG AS `catalog`, TABLE_SCHEMA AS `schema`, \
             TABLE_NAME AS `name`, TABLE_TYPE AS `type` \
             FROM information_schema.`TABLES` \
             WHERE TABLE_NAME = {} AND TABLE_SCHEMA = DATABASE();",
            self.quote_string(name)
        ))
    }

    fn columns_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "SELECT COLUMN_NAME AS `name`, ORDINAL_POSITION AS `position`, \
             CASE IS_NULLABLE WHEN 'YES' THEN TRUE ELSE FALSE END AS `nullable`, \
             DATA_TYPE AS `datatype`, \
             IFNULL(CHARACTER_MAXIMUM_LENGTH, 0) AS `length`, \
             IFNULL(NUMERIC_PRECISION, 0) AS `precision`, \
             IFNULL(NUMERIC_SCALE, 0) AS `scale`, \
             CASE WHEN EXTRA LIKE '%auto_increment%' THEN TRUE ELSE FALSE END AS `autoincrement`, \
             CASE WHEN EXTRA LIKE '%auto_increment%' THEN TRUE ELSE FALSE END AS `readonly`, \
             CASE WHEN COLUMN_KEY = 'PRI' THEN TRUE ELSE FALSE END AS `primarykey` \
             FROM information_schema.COLUMNS \
             WHERE TABLE_NAME = {} AND TABLE_SCHEMA = DATABASE() \
             ORDER BY ORDINAL_POSITION;",
            self.quote_string(name)
        ))
    }

    fn function_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "SELECT ROUTINE_CATALOG AS `catalog`, ROUTINE_SCHEMA AS `schema`, \
             ROUTINE_NAME AS `name` \
             FROM information_schema.ROUTINES \
             WHERE ROUTINE_NAME = {} AND ROUTINE_SCHEMA = DATABASE();",
            self.quote_string(name)
        ))
    }

    fn parameters_sql(&self, name: &str) -> Option<String> {
        Some(format!(
            "SELECT PARAMETER_NAME AS `name`, ORDINAL_POSITION AS `position`, \
             PARAMETER_MODE AS `dirmode`, DATA_TYPE AS `datatype`, \
             IFNULL(CHARACTER_MAXIMUM_LENGTH, 0) AS `length`, \
             IFNULL(NUMERIC_PRECISION, 0) AS `precision`, \
             IFNULL(NUMERIC_SCALE, 0) AS `scale` \
             FROM information_schema.PARAMETERS \
             WHERE SPECIFIC_NAME = {} AND SPECIFIC_SCHEMA = DATABASE() \
             ORDER BY ORDINAL_POSITION;",
            self.quote_string(name)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_quoting_uses_backticks() {
        let d = MysqlDialect;
        assert_eq!(d.quote_identifier("order"), "`order`");
        assert_eq!(d.quote_identifier("a`b"), "`a``b`");
    }

    #[test]
    fn catalog_queries_are_database_scoped() {
        let d = MysqlDialect;
        let sql = d.table_schema_sql("ttable").unwrap();
        assert!(sql.contains("TABLE_NAME = 'ttable'"));
        assert!(sql.contains("TABLE_SCHEMA = DATABASE()"));
        let sql = d.parameters_sql("usp_query").unwrap();
        assert!(sql.contains("SPECIFIC_NAME = 'usp_query'"));
    }
}
