//! Predicate accumulator shared by WHERE, HAVING and JOIN ... ON clauses.
//!
//! Conditions are collected as a flat token stream. A small amount of state
//! keeps the stream well-formed: whenever a new operand follows a finished
//! one without an explicit connective, `AND` is inserted automatically, and
//! explicit `and()`/`or()` calls in a position where no connective belongs
//! are dropped.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::expr::{Aggregate, Column, Expr, Raw};
use super::operators::{AggregateFunc, Operator};
use super::values::Value;

/// A single comparison. Either side may be absent: `IS NULL` has no right
/// operand, `EXISTS` has no left one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub left: Option<Expr>,
    pub op: Operator,
    pub right: Option<Expr>,
}

impl Condition {
    pub fn new(op: Operator, left: Option<Expr>, right: Option<Expr>) -> Self {
        Condition { left, op, right }
    }
}

/// One element of a condition stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    Predicate(Condition),
    Raw(Raw),
    And,
    Or,
    Open,
    Close,
}

/// An ordered list of predicates, connectives and grouping parentheses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conditions {
    tokens: Vec<Token>,
    #[serde(skip)]
    pending: bool,
}

// The pending flag is builder bookkeeping, not part of the tree identity.
impl PartialEq for Conditions {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Conditions {
    pub fn new() -> Self {
        Conditions::default()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    fn push_operand(&mut self, token: Token) -> &mut Self {
        if self.pending {
            self.tokens.push(Token::And);
        }
        self.tokens.push(token);
        self.pending = true;
        self
    }

    /// Appends a comparison, inserting `AND` first when one is due.
    pub fn condition(
        &mut self,
        op: Operator,
        left: Option<Expr>,
        right: Option<Expr>,
    ) -> &mut Self {
        self.push_operand(Token::Predicate(Condition::new(op, left, right)))
    }

    fn compare(&mut self, op: Operator, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.condition(op, Some(Expr::Column(Column::new(column))), Some(value.into()))
    }

    pub fn equals(&mut self, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.compare(Operator::Equals, column, value)
    }

    pub fn not_equals(&mut self, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.compare(Operator::NotEquals, column, value)
    }

    pub fn less_than(&mut self, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.compare(Operator::LessThan, column, value)
    }

    pub fn less_or_equals(&mut self, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.compare(Operator::LessOrEquals, column, value)
    }

    pub fn greater_than(&mut self, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.compare(Operator::GreaterThan, column, value)
    }

    pub fn greater_or_equals(&mut self, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.compare(Operator::GreaterOrEquals, column, value)
    }

    pub fn like(&mut self, column: &str, pattern: impl Into<String>) -> &mut Self {
        self.compare(Operator::Like, column, Value::Str(pattern.into()))
    }

    pub fn not_like(&mut self, column: &str, pattern: impl Into<String>) -> &mut Self {
        self.compare(Operator::NotLike, column, Value::Str(pattern.into()))
    }

    /// `column IN (...)`. Accepts an array value, a single value, or a raw
    /// subquery expression.
    pub fn is_in(&mut self, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.compare(Operator::In, column, value)
    }

    pub fn not_in(&mut self, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.compare(Operator::NotIn, column, value)
    }

    pub fn is_null(&mut self, column: &str) -> &mut Self {
        self.condition(
            Operator::IsNull,
            Some(Expr::Column(Column::new(column))),
            None,
        )
    }

    pub fn is_not_null(&mut self, column: &str) -> &mut Self {
        self.condition(
            Operator::IsNotNull,
            Some(Expr::Column(Column::new(column))),
            None,
        )
    }

    pub fn exists(&mut self, subquery: impl Into<Expr>) -> &mut Self {
        self.condition(Operator::Exists, None, Some(subquery.into()))
    }

    pub fn not_exists(&mut self, subquery: impl Into<Expr>) -> &mut Self {
        self.condition(Operator::NotExists, None, Some(subquery.into()))
    }

    /// Splices verbatim SQL into the stream as one operand.
    pub fn raw(&mut self, sql: impl Into<String>) -> &mut Self {
        self.push_operand(Token::Raw(Raw::new(sql)))
    }

    /// Connects the previous and next operand with `AND`. Ignored when no
    /// operand precedes it. The connective is pushed immediately, so a
    /// stream must end with an operand: a trailing `and()` with nothing
    /// after it renders as a bare `AND`.
    pub fn and(&mut self) -> &mut Self {
        if self.pending {
            self.tokens.push(Token::And);
            self.pending = false;
        }
        self
    }

    /// Connects the previous and next operand with `OR`. Ignored when no
    /// operand precedes it. Like [`Conditions::and`], the stream must end
    /// with an operand.
    pub fn or(&mut self) -> &mut Self {
        if self.pending {
            self.tokens.push(Token::Or);
            self.pending = false;
        }
        self
    }

    /// Opens a parenthesized group. Counts as the start of an operand, so a
    /// due `AND` is inserted before it.
    pub fn open(&mut self) -> &mut Self {
        if self.pending {
            self.tokens.push(Token::And);
            self.pending = false;
        }
        self.tokens.push(Token::Open);
        self
    }

    /// Closes a parenthesized group. The group counts as a finished operand.
    pub fn close(&mut self) -> &mut Self {
        self.tokens.push(Token::Close);
        self.pending = true;
        self
    }
}

/// WHERE clause of a query, update or delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Where(pub Conditions);

impl Deref for Where {
    type Target = Conditions;

    fn deref(&self) -> &Conditions {
        &self.0
    }
}

impl DerefMut for Where {
    fn deref_mut(&mut self) -> &mut Conditions {
        &mut self.0
    }
}

/// HAVING clause. Adds aggregate comparisons on top of the plain condition
/// builders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Having(pub Conditions);

impl Having {
    fn aggregate(
        &mut self,
        op: Operator,
        func: AggregateFunc,
        column: &str,
        value: impl Into<Expr>,
    ) -> &mut Self {
        self.0.condition(
            op,
            Some(Expr::Aggregate(Aggregate::new(func, Column::new(column)))),
            Some(value.into()),
        );
        self
    }

    pub fn count(&mut self, op: Operator, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.aggregate(op, AggregateFunc::Count, column, value)
    }

    pub fn sum(&mut self, op: Operator, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.aggregate(op, AggregateFunc::Sum, column, value)
    }

    pub fn avg(&mut self, op: Operator, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.aggregate(op, AggregateFunc::Avg, column, value)
    }

    pub fn min(&mut self, op: Operator, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.aggregate(op, AggregateFunc::Min, column, value)
    }

    pub fn max(&mut self, op: Operator, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.aggregate(op, AggregateFunc::Max, column, value)
    }
}

impl Deref for Having {
    type Target = Conditions;

    fn deref(&self) -> &Conditions {
        &self.0
    }
}

impl DerefMut for Having {
    fn deref_mut(&mut self) -> &mut Conditions {
        &mut self.0
    }
}
