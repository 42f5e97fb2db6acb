pub mod command;
pub mod conditions;
pub mod expr;
pub mod operators;
pub mod stmt;
pub mod values;

pub use self::command::{ParamDirection, Parameter, Procedure, Text};
pub use self::conditions::{Condition, Conditions, Having, Token, Where};
pub use self::expr::{Aggregate, Column, Expr, NodeKind, Raw};
pub use self::operators::{AggregateFunc, JoinKind, Operator, SortDir};
pub use self::stmt::{
    Delete, Field, FromClause, GroupBy, Insert, Join, OrderBy, OrderByField, Query, Select, Set,
    Statement, Table, Update,
};
pub use self::values::Value;
