//! Dialect profiles: placeholder styles, quoting rules and schema queries.

mod ansi;
mod mssql;
mod mysql;
mod postgres;
mod types;

pub use self::ansi::AnsiDialect;
pub use self::mssql::MssqlDialect;
pub use self::mysql::MysqlDialect;
pub use self::postgres::PostgresDialect;
pub use self::types::{canonical_type_of, CanonicalType};

/// Everything the compilers need to know about a target database.
///
/// Every method has an ANSI default, so a profile only overrides where its
/// engine deviates.
pub trait Dialect: Send + Sync {
    /// Driver-facing dialect name, e.g. `"mysql"`.
    fn name(&self) -> &str;

    /// Placeholders carry the parameter name, like `@name`.
    fn supports_named_parameter(&self) -> bool {
        false
    }

    /// Placeholders carry a 1-based ordinal, like `$1`.
    fn supports_indexed_parameter(&self) -> bool {
        false
    }

    /// The placeholder prefix: `?`, `$` or `@`.
    fn parameter_placeholder(&self) -> &str {
        "?"
    }

    /// Renders a string literal, escaping embedded quotes.
    fn quote_string(&self, s: &str) -> String {
        format!("'{}'", s.replace('\'', "''"))
    }

    /// Quotes an object name, like `"table"` or `[table]`.
    fn quote_identifier(&self, s: &str) -> String {
        format!("\"{}\"", s.replace('"', "\"\""))
    }

    /// SQL that looks up the schema of a table or view, or `None` when the
    /// engine exposes no portable catalog for it.
    fn table_schema_sql(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }

    /// SQL that lists the columns of a table.
    fn columns_sql(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }

    /// SQL that looks up a stored procedure or function.
    fn function_sql(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }

    /// SQL that lists the parameters of a stored procedure.
    fn parameters_sql(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }

    /// Maps a native column type name to its canonical category.
    fn canonical_type(&self, native: &str) -> CanonicalType {
        canonical_type_of(native)
    }
}
