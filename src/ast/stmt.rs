//! Statement nodes and their fluent builders.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use super::command::{Procedure, Text};
use super::conditions::{Conditions, Having, Where};
use super::expr::{Aggregate, Column, Expr, NodeKind, Raw};
use super::operators::{AggregateFunc, JoinKind, Operator, SortDir};

/// A table reference with an optional alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub alias: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>, alias: Option<&str>) -> Self {
        Table {
            name: name.into(),
            alias: alias.map(str::to_string),
        }
    }
}

/// One entry of the select list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub expr: Expr,
    pub alias: Option<String>,
}

/// The select list. Empty means `*`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub fields: Vec<Field>,
}

impl Select {
    fn push(&mut self, expr: Expr, alias: Option<&str>) -> &mut Self {
        self.fields.push(Field {
            expr,
            alias: alias.map(str::to_string),
        });
        self
    }

    /// Back to selecting every column.
    pub fn all(&mut self) -> &mut Self {
        self.fields.clear();
        self
    }

    pub fn column(&mut self, name: &str) -> &mut Self {
        self.push(Expr::Column(Column::new(name)), None)
    }

    pub fn columns(&mut self, names: &[&str]) -> &mut Self {
        for name in names {
            self.column(name);
        }
        self
    }

    pub fn column_as(&mut self, name: &str, alias: &str) -> &mut Self {
        self.push(Expr::Column(Column::new(name)), Some(alias))
    }

    /// Adds verbatim SQL to the select list.
    pub fn raw(&mut self, sql: &str) -> &mut Self {
        self.push(Expr::Raw(Raw::new(sql)), None)
    }

    /// Adds an arbitrary expression, optionally aliased.
    pub fn expr(&mut self, expr: impl Into<Expr>, alias: Option<&str>) -> &mut Self {
        self.push(expr.into(), alias)
    }

    fn aggregate(&mut self, func: AggregateFunc, column: &str, alias: Option<&str>) -> &mut Self {
        self.push(
            Expr::Aggregate(Aggregate::new(func, Column::new(column))),
            alias,
        )
    }

    pub fn count(&mut self, column: &str, alias: Option<&str>) -> &mut Self {
        self.aggregate(AggregateFunc::Count, column, alias)
    }

    pub fn sum(&mut self, column: &str, alias: Option<&str>) -> &mut Self {
        self.aggregate(AggregateFunc::Sum, column, alias)
    }

    pub fn avg(&mut self, column: &str, alias: Option<&str>) -> &mut Self {
        self.aggregate(AggregateFunc::Avg, column, alias)
    }

    pub fn min(&mut self, column: &str, alias: Option<&str>) -> &mut Self {
        self.aggregate(AggregateFunc::Min, column, alias)
    }

    pub fn max(&mut self, column: &str, alias: Option<&str>) -> &mut Self {
        self.aggregate(AggregateFunc::Max, column, alias)
    }
}

/// A joined table with its ON conditions. Dereferences to [`Conditions`],
/// so the full condition builder is available after `on()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub kind: JoinKind,
    pub table: Table,
    pub on: Conditions,
}

impl Join {
    /// Adds a `left = right` column equality to the ON clause.
    pub fn on(&mut self, left: &str, right: &str) -> &mut Self {
        self.on.condition(
            Operator::Equals,
            Some(Expr::Column(Column::new(left))),
            Some(Expr::Column(Column::new(right))),
        );
        self
    }

    /// Adds two column equalities at once.
    pub fn on2(&mut self, left1: &str, right1: &str, left2: &str, right2: &str) -> &mut Self {
        self.on(left1, right1).on(left2, right2)
    }
}

impl Deref for Join {
    type Target = Conditions;

    fn deref(&self) -> &Conditions {
        &self.on
    }
}

impl DerefMut for Join {
    fn deref_mut(&mut self) -> &mut Conditions {
        &mut self.on
    }
}

/// The FROM clause: a primary table, optional comma-listed tables and joins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FromClause {
    pub table: Table,
    pub tables: Vec<Table>,
    pub joins: Vec<Join>,
}

impl FromClause {
    fn new(table: Table) -> Self {
        FromClause {
            table,
            tables: Vec::new(),
            joins: Vec::new(),
        }
    }

    /// Adds another table to the comma list.
    pub fn then_from(&mut self, name: &str, alias: Option<&str>) -> &mut Self {
        self.tables.push(Table::new(name, alias));
        self
    }

    fn join(&mut self, kind: JoinKind, name: &str, alias: Option<&str>) -> &mut Join {
        self.joins.push(Join {
            kind,
            table: Table::new(name, alias),
            on: Conditions::new(),
        });
        self.joins.last_mut().unwrap()
    }

    pub fn cross_join(&mut self, name: &str, alias: Option<&str>) -> &mut Join {
        self.join(JoinKind::Cross, name, alias)
    }

    pub fn inner_join(&mut self, name: &str, alias: Option<&str>) -> &mut Join {
        self.join(JoinKind::Inner, name, alias)
    }

    pub fn left_join(&mut self, name: &str, alias: Option<&str>) -> &mut Join {
        self.join(JoinKind::Left, name, alias)
    }

    pub fn right_join(&mut self, name: &str, alias: Option<&str>) -> &mut Join {
        self.join(JoinKind::Right, name, alias)
    }
}

/// GROUP BY expression list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupBy {
    pub fields: Vec<Expr>,
}

impl GroupBy {
    pub fn column(&mut self, name: &str) -> &mut Self {
        self.fields.push(Expr::Column(Column::new(name)));
        self
    }

    pub fn columns(&mut self, names: &[&str]) -> &mut Self {
        for name in names {
            self.column(name);
        }
        self
    }

    pub fn by(&mut self, expr: impl Into<Expr>) -> &mut Self {
        self.fields.push(expr.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderByField {
    pub expr: Expr,
    pub dir: SortDir,
}

/// ORDER BY expression list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderBy {
    pub fields: Vec<OrderByField>,
}

impl OrderBy {
    pub fn by(&mut self, expr: impl Into<Expr>, dir: SortDir) -> &mut Self {
        self.fields.push(OrderByField {
            expr: expr.into(),
            dir,
        });
        self
    }

    pub fn asc(&mut self, column: &str) -> &mut Self {
        self.by(Expr::Column(Column::new(column)), SortDir::Asc)
    }

    pub fn desc(&mut self, column: &str) -> &mut Self {
        self.by(Expr::Column(Column::new(column)), SortDir::Desc)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A column assignment in INSERT or UPDATE.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    pub column: Column,
    pub value: Expr,
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub select: Select,
    pub from: FromClause,
    pub where_clause: Where,
    pub group_by: Option<GroupBy>,
    pub having: Option<Having>,
    pub order_by: Option<OrderBy>,
    pub distinct: bool,
    pub offset: u64,
    pub count: u64,
}

impl Query {
    pub fn new(table: &str, alias: Option<&str>) -> Self {
        Query {
            select: Select::default(),
            from: FromClause::new(Table::new(table, alias)),
            where_clause: Where::default(),
            group_by: None,
            having: None,
            order_by: None,
            distinct: false,
            offset: 0,
            count: 0,
        }
    }

    pub fn distinct(&mut self) -> &mut Self {
        self.distinct = true;
        self
    }

    /// Sets the row window. Zero for both means no LIMIT clause.
    pub fn limit(&mut self, offset: u64, count: u64) -> &mut Self {
        self.offset = offset;
        self.count = count;
        self
    }

    pub fn where_(&mut self) -> &mut Where {
        &mut self.where_clause
    }

    pub fn use_group_by(&mut self) -> &mut GroupBy {
        self.group_by.get_or_insert_with(GroupBy::default)
    }

    /// HAVING renders only when a non-empty GROUP BY is present.
    pub fn use_having(&mut self) -> &mut Having {
        self.having.get_or_insert_with(Having::default)
    }

    pub fn use_order_by(&mut self) -> &mut OrderBy {
        self.order_by.get_or_insert_with(OrderBy::default)
    }
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insert {
    pub table: Table,
    pub sets: Vec<Set>,
}

impl Insert {
    pub fn new(table: &str) -> Self {
        Insert {
            table: Table::new(table, None),
            sets: Vec::new(),
        }
    }

    pub fn set(&mut self, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.sets.push(Set {
            column: Column::new(column),
            value: value.into(),
        });
        self
    }
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub table: Table,
    pub sets: Vec<Set>,
    pub where_clause: Where,
    pub order_by: Option<OrderBy>,
    pub count: u64,
}

impl Update {
    pub fn new(table: &str) -> Self {
        Update {
            table: Table::new(table, None),
            sets: Vec::new(),
            where_clause: Where::default(),
            order_by: None,
            count: 0,
        }
    }

    pub fn set(&mut self, column: &str, value: impl Into<Expr>) -> &mut Self {
        self.sets.push(Set {
            column: Column::new(column),
            value: value.into(),
        });
        self
    }

    pub fn where_(&mut self) -> &mut Where {
        &mut self.where_clause
    }

    pub fn use_order_by(&mut self) -> &mut OrderBy {
        self.order_by.get_or_insert_with(OrderBy::default)
    }

    pub fn limit(&mut self, count: u64) -> &mut Self {
        self.count = count;
        self
    }
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delete {
    pub table: Table,
    pub where_clause: Where,
    pub order_by: Option<OrderBy>,
    pub count: u64,
}

impl Delete {
    pub fn new(table: &str) -> Self {
        Delete {
            table: Table::new(table, None),
            where_clause: Where::default(),
            order_by: None,
            count: 0,
        }
    }

    pub fn where_(&mut self) -> &mut Where {
        &mut self.where_clause
    }

    pub fn use_order_by(&mut self) -> &mut OrderBy {
        self.order_by.get_or_insert_with(OrderBy::default)
    }

    pub fn limit(&mut self, count: u64) -> &mut Self {
        self.count = count;
        self
    }
}

/// Any statement the compilers accept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Query(Query),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Text(Text),
    Procedure(Procedure),
}

impl Statement {
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Query(_) => NodeKind::Query,
            Statement::Insert(_) => NodeKind::Insert,
            Statement::Update(_) => NodeKind::Update,
            Statement::Delete(_) => NodeKind::Delete,
            Statement::Text(_) => NodeKind::Text,
            Statement::Procedure(_) => NodeKind::Procedure,
        }
    }
}

impl From<Query> for Statement {
    fn from(q: Query) -> Self {
        Statement::Query(q)
    }
}

impl From<Insert> for Statement {
    fn from(i: Insert) -> Self {
        Statement::Insert(i)
    }
}

impl From<Update> for Statement {
    fn from(u: Update) -> Self {
        Statement::Update(u)
    }
}

impl From<Delete> for Statement {
    fn from(d: Delete) -> Self {
        Statement::Delete(d)
    }
}

impl From<Text> for Statement {
    fn from(t: Text) -> Self {
        Statement::Text(t)
    }
}

impl From<Procedure> for Statement {
    fn from(p: Procedure) -> Self {
        Statement::Procedure(p)
    }
}
