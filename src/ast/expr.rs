use serde::{Deserialize, Serialize};

use super::operators::AggregateFunc;
use super::values::Value;

/// Verbatim SQL text spliced into the output without quoting or binding.
///
/// The caller vouches for the content; nothing inside a `Raw` is escaped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Raw(pub String);

impl Raw {
    pub fn new(sql: impl Into<String>) -> Self {
        Raw(sql.into())
    }
}

impl std::fmt::Display for Raw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A column reference, optionally qualified as `table.column`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column(pub String);

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Column(name.into())
    }

    /// Splits a qualified name into its table and column parts.
    pub fn split(&self) -> (Option<&str>, &str) {
        match self.0.split_once('.') {
            Some((table, column)) => (Some(table), column),
            None => (None, self.0.as_str()),
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Column {
    fn from(name: &str) -> Self {
        Column::new(name)
    }
}

impl From<String> for Column {
    fn from(name: String) -> Self {
        Column(name)
    }
}

/// An aggregate function applied to an expression, e.g. `SUM(amount)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub func: AggregateFunc,
    pub expr: Box<Expr>,
}

impl Aggregate {
    pub fn new(func: AggregateFunc, expr: impl Into<Expr>) -> Self {
        Aggregate {
            func,
            expr: Box::new(expr.into()),
        }
    }
}

/// A node in the expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// SQL NULL literal
    Null,
    /// A bound value, rendered as a placeholder
    Value(Value),
    /// Verbatim SQL text
    Raw(Raw),
    /// A column reference
    Column(Column),
    /// An aggregate function call
    Aggregate(Aggregate),
}

impl Expr {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Null => NodeKind::Null,
            Expr::Value(_) => NodeKind::Value,
            Expr::Raw(_) => NodeKind::Raw,
            Expr::Column(_) => NodeKind::Column,
            Expr::Aggregate(_) => NodeKind::Aggregate,
        }
    }
}

impl From<Value> for Expr {
    fn from(v: Value) -> Self {
        // NULL renders as a literal, never as a placeholder.
        match v {
            Value::Null => Expr::Null,
            other => Expr::Value(other),
        }
    }
}

impl From<Raw> for Expr {
    fn from(r: Raw) -> Self {
        Expr::Raw(r)
    }
}

impl From<Column> for Expr {
    fn from(c: Column) -> Self {
        Expr::Column(c)
    }
}

impl From<Aggregate> for Expr {
    fn from(a: Aggregate) -> Self {
        Expr::Aggregate(a)
    }
}

macro_rules! expr_from_value {
    ($($t:ty),* $(,)?) => {$(
        impl From<$t> for Expr {
            fn from(v: $t) -> Self {
                Expr::from(Value::from(v))
            }
        }
    )*};
}

expr_from_value!(
    bool,
    i32,
    i64,
    u32,
    u64,
    f32,
    f64,
    &str,
    String,
    Vec<u8>,
    Vec<Value>,
    Vec<i32>,
    Vec<i64>,
    Vec<u64>,
    Vec<f64>,
    Vec<&str>,
    Vec<String>,
);

/// Discriminant names for every node the tree can hold, used in error and
/// panic messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Query,
    Insert,
    Update,
    Delete,
    Text,
    Procedure,
    Null,
    Value,
    Raw,
    Column,
    Aggregate,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeKind::Query => "Query",
            NodeKind::Insert => "Insert",
            NodeKind::Update => "Update",
            NodeKind::Delete => "Delete",
            NodeKind::Text => "Text",
            NodeKind::Procedure => "Procedure",
            NodeKind::Null => "Null",
            NodeKind::Value => "Value",
            NodeKind::Raw => "Raw",
            NodeKind::Column => "Column",
            NodeKind::Aggregate => "Aggregate",
        };
        f.write_str(name)
    }
}
