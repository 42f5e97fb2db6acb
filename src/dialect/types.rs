//! Dialect-neutral column types and the native type name mapping.

use serde::{Deserialize, Serialize};

/// A database column type reduced to a portable category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanonicalType {
    Str,
    Boolean,
    Bytes,
    Date,
    DateTime,
    Guid,
    Int,
    Numeric,
    Float,
    Unknown,
}

impl CanonicalType {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            CanonicalType::Int | CanonicalType::Numeric | CanonicalType::Float
        )
    }

    pub fn is_string(&self) -> bool {
        matches!(self, CanonicalType::Str)
    }

    pub fn is_datetime(&self) -> bool {
        matches!(self, CanonicalType::Date | CanonicalType::DateTime)
    }

    pub fn has_precision_and_scale(&self) -> bool {
        matches!(self, CanonicalType::Numeric)
    }
}

impl std::fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CanonicalType::Str => "string",
            CanonicalType::Boolean => "boolean",
            CanonicalType::Bytes => "bytes",
            CanonicalType::Date => "date",
            CanonicalType::DateTime => "datetime",
            CanonicalType::Guid => "guid",
            CanonicalType::Int => "int",
            CanonicalType::Numeric => "numeric",
            CanonicalType::Float => "float",
            CanonicalType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Maps a native column type name, as reported by any of the supported
/// engines, to its canonical category. Matching is case-insensitive; names
/// no engine in the table reports map to [`CanonicalType::Unknown`].
pub fn canonical_type_of(native: &str) -> CanonicalType {
    match native.to_lowercase().as_str() {
        "xml" | "tinytext" | "mediumtext" | "longtext" | "ntext" | "text" | "sysname"
        | "sql_variant" | "note" | "memo" | "clob" => CanonicalType::Str,
        "char" | "character" | "nchar" | "varchar" | "nvarchar" | "string" | "longvarchar"
        | "longchar" | "varyingcharacter" => CanonicalType::Str,
        "nativecharacter" | "nativevaryingcharacter" | "character varying" => CanonicalType::Str,
        "bit" | "bool" | "boolean" | "yesno" | "logical" => CanonicalType::Boolean,
        "tinyint unsigned" | "uint16" | "smallint unsigned" | "uint32" | "integer unsigned"
        | "uint64" | "bigint unsigned" => CanonicalType::Int,
        "tinyint" | "smallint" | "int" | "mediumint" | "bigint" | "int16" | "int32" | "int64"
        | "integer" | "long" => CanonicalType::Int,
        "bigserial" | "serial" | "smallserial" => CanonicalType::Int,
        "identity" | "counter" | "autoincrement" => CanonicalType::Int,
        "year" => CanonicalType::Int,
        "decimal" | "newdecimal" | "numeric" => CanonicalType::Numeric,
        "currency" | "money" | "smallmoney" => CanonicalType::Numeric,
        "float" | "real" | "double" | "double precision" => CanonicalType::Float,
        "date" | "smalldate" => CanonicalType::Date,
        "time" | "datetime" | "datetime2" | "smalldatetime" | "timestamp"
        | "timestamp without time zone" | "timestamp with time zone" => CanonicalType::DateTime,
        "image" | "varbinary" | "binary" | "blob" | "tinyblob" | "mediumblob" | "longblob"
        | "oleobject" | "general" | "bit varying" | "bytea" => CanonicalType::Bytes,
        "uniqueidentifier" | "guid" | "uuid" => CanonicalType::Guid,
        _ => CanonicalType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_names_map_across_engines() {
        assert_eq!(canonical_type_of("NVARCHAR"), CanonicalType::Str);
        assert_eq!(canonical_type_of("character varying"), CanonicalType::Str);
        assert_eq!(canonical_type_of("bigint unsigned"), CanonicalType::Int);
        assert_eq!(canonical_type_of("serial"), CanonicalType::Int);
        assert_eq!(canonical_type_of("newdecimal"), CanonicalType::Numeric);
        assert_eq!(canonical_type_of("double precision"), CanonicalType::Float);
        assert_eq!(
            canonical_type_of("timestamp with time zone"),
            CanonicalType::DateTime
        );
        assert_eq!(canonical_type_of("uniqueidentifier"), CanonicalType::Guid);
        assert_eq!(canonical_type_of("bytea"), CanonicalType::Bytes);
        assert_eq!(canonical_type_of("geometry"), CanonicalType::Unknown);
    }

    #[test]
    fn category_predicates() {
        assert!(CanonicalType::Numeric.is_numeric());
        assert!(CanonicalType::Numeric.has_precision_and_scale());
        assert!(!CanonicalType::Float.has_precision_and_scale());
        assert!(CanonicalType::Date.is_datetime());
        assert!(!CanonicalType::Str.is_numeric());
    }
}
