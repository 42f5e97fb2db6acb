use serde::{Deserialize, Serialize};

/// Comparison and predicate operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Equal (=)
    Equals,
    /// Not equal (<>)
    NotEquals,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessOrEquals,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterOrEquals,
    /// LIKE pattern match
    Like,
    /// NOT LIKE pattern match
    NotLike,
    /// IN sequence or subquery
    In,
    /// NOT IN sequence or subquery
    NotIn,
    /// IS NULL
    IsNull,
    /// IS NOT NULL
    IsNotNull,
    /// EXISTS (subquery)
    Exists,
    /// NOT EXISTS (subquery)
    NotExists,
}

impl Operator {
    /// The SQL spelling of this operator.
    pub fn sql_symbol(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::NotEquals => "<>",
            Operator::LessThan => "<",
            Operator::LessOrEquals => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterOrEquals => ">=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
            Operator::Exists => "EXISTS",
            Operator::NotExists => "NOT EXISTS",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.sql_symbol())
    }
}

/// Sort direction in ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDir {
    Asc,
    Desc,
}

impl std::fmt::Display for SortDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDir::Asc => f.write_str("ASC"),
            SortDir::Desc => f.write_str("DESC"),
        }
    }
}

/// Table join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinKind {
    Cross,
    Inner,
    Left,
    Right,
}

impl std::fmt::Display for JoinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinKind::Cross => f.write_str("CROSS JOIN"),
            JoinKind::Inner => f.write_str("INNER JOIN"),
            JoinKind::Left => f.write_str("LEFT JOIN"),
            JoinKind::Right => f.write_str("RIGHT JOIN"),
        }
    }
}

/// Aggregate functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateFunc {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl std::fmt::Display for AggregateFunc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateFunc::Count => f.write_str("COUNT"),
            AggregateFunc::Sum => f.write_str("SUM"),
            AggregateFunc::Avg => f.write_str("AVG"),
            AggregateFunc::Min => f.write_str("MIN"),
            AggregateFunc::Max => f.write_str("MAX"),
        }
    }
}
