//! Visitor that renders query, insert, update and delete trees.

use crate::ast::{
    Aggregate, Condition, Conditions, Delete, Expr, Field, FromClause, GroupBy, Insert, Join,
    Operator, OrderBy, Query, Select, Statement, Table, Update, Value, Where,
};
use crate::dialect::Dialect;
use crate::error::CompileError;

use super::writer::SqlWriter;

#[derive(Clone, Copy, PartialEq)]
enum PlaceholderMode {
    /// Bare `?`, argument order is positional.
    Positional,
    /// Placeholder plus a 1-based ordinal, `@1` or `$1`.
    Numbered,
}

/// Renders one DML statement to SQL text plus ordered arguments.
pub(crate) struct StatementCompiler<'a> {
    dialect: &'a dyn Dialect,
    mode: PlaceholderMode,
    w: SqlWriter,
    args: Vec<Value>,
    param_index: usize,
}

impl<'a> StatementCompiler<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        let mode = if dialect.supports_named_parameter() || dialect.supports_indexed_parameter() {
            PlaceholderMode::Numbered
        } else {
            PlaceholderMode::Positional
        };
        StatementCompiler {
            dialect,
            mode,
            w: SqlWriter::new(),
            args: Vec::new(),
            param_index: 0,
        }
    }

    pub fn compile(mut self, stmt: &Statement) -> Result<(String, Vec<Value>), CompileError> {
        match stmt {
            Statement::Query(q) => self.visit_query(q),
            Statement::Insert(i) => self.visit_insert(i),
            Statement::Update(u) => self.visit_update(u),
            Statement::Delete(d) => self.visit_delete(d),
            // The driver routes these to their own compilers; reaching one
            // here is a dispatch bug, not bad input.
            Statement::Text(_) | Statement::Procedure(_) => {
                panic!("statement compiler cannot render node {}", stmt.kind())
            }
        }
        Ok((self.w.into_string(), self.args))
    }

    fn write_value(&mut self, v: &Value) {
        if v.is_null() {
            self.w.push("NULL");
            return;
        }
        match self.mode {
            PlaceholderMode::Positional => self.w.push(self.dialect.parameter_placeholder()),
            PlaceholderMode::Numbered => {
                self.param_index += 1;
                self.w.push(&format!(
                    "{}{}",
                    self.dialect.parameter_placeholder(),
                    self.param_index
                ));
            }
        }
        self.args.push(v.clone());
    }

    fn visit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Null => self.w.push("NULL"),
            Expr::Value(v) => self.write_value(v),
            Expr::Raw(raw) => self.w.push(&raw.0),
            Expr::Column(c) => self.w.push(&c.0),
            Expr::Aggregate(a) => self.visit_aggregate(a),
        }
    }

    fn visit_aggregate(&mut self, a: &Aggregate) {
        self.w.push(&a.func.to_string());
        self.w.open_paren();
        self.visit_expr(&a.expr);
        self.w.close_paren();
    }

    fn visit_condition(&mut self, c: &Condition) {
        match (&c.left, &c.right) {
            (None, None) => self.w.push(c.op.sql_symbol()),
            (None, Some(right)) => {
                self.w.push(c.op.sql_symbol());
                self.w.open_paren();
                self.visit_expr(right);
                self.w.close_paren();
            }
            (Some(left), None) => {
                self.visit_expr(left);
                self.w.blank();
                self.w.push(c.op.sql_symbol());
            }
            (Some(_), Some(_)) if matches!(c.op, Operator::In | Operator::NotIn) => {
                self.visit_in(c)
            }
            (Some(left), Some(right)) => {
                self.visit_expr(left);
                self.w.blank();
                self.w.push(c.op.sql_symbol());
                self.w.blank();
                self.visit_expr(right);
            }
        }
    }

    fn visit_in(&mut self, c: &Condition) {
        if let Some(left) = &c.left {
            self.visit_expr(left);
        }
        self.w.blank();
        self.w.push(c.op.sql_symbol());
        self.w.blank();
        self.w.open_paren();
        match &c.right {
            Some(Expr::Value(Value::Array(items))) => self.visit_array(items),
            Some(Expr::Value(v)) => self.write_value(v),
            Some(other) => self.visit_expr(other),
            None => {}
        }
        self.w.close_paren();
    }

    /// Homogeneous arrays of numbers or strings are inlined as literals and
    /// bind no arguments. Anything else binds a placeholder per element.
    fn visit_array(&mut self, items: &[Value]) {
        let inline = items.iter().all(|v| matches!(v, Value::Int(_)))
            || items.iter().all(|v| matches!(v, Value::UInt(_)))
            || items.iter().all(|v| matches!(v, Value::Float(_)))
            || items.iter().all(|v| matches!(v, Value::Str(_)));

        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.w.comma();
            }
            if inline {
                match item {
                    Value::Str(s) => {
                        let quoted = self.dialect.quote_string(s);
                        self.w.push(&quoted);
                    }
                    other => self.w.push(&other.to_string()),
                }
            } else {
                self.write_value(item);
            }
        }
    }

    fn visit_conditions(&mut self, c: &Conditions) {
        use crate::ast::Token;

        let mut depth: usize = 0;
        for (i, token) in c.tokens().iter().enumerate() {
            if i > 0 {
                self.w.line_break();
            }
            if matches!(token, Token::Close) {
                depth = depth.saturating_sub(1);
            }
            self.w.indent(depth);
            match token {
                Token::Predicate(p) => self.visit_condition(p),
                Token::Raw(r) => self.w.push(&r.0),
                Token::And => self.w.push("AND"),
                Token::Or => self.w.push("OR"),
                Token::Open => self.w.push("("),
                Token::Close => self.w.push(")"),
            }
            if matches!(token, Token::Open) {
                depth += 1;
            }
        }
    }

    fn visit_table(&mut self, t: &Table) {
        self.w.push(&t.name);
        if let Some(alias) = &t.alias {
            self.w.push(" AS ");
            self.w.push(alias);
        }
    }

    fn visit_field(&mut self, f: &Field) {
        self.visit_expr(&f.expr);
        if let Some(alias) = &f.alias {
            self.w.push(" AS ");
            let quoted = self.dialect.quote_identifier(alias);
            self.w.push(&quoted);
        }
    }

    fn visit_select(&mut self, s: &Select) {
        if s.fields.is_empty() {
            self.w.push("*");
            return;
        }
        for (i, field) in s.fields.iter().enumerate() {
            if i > 0 {
                self.w.comma();
            }
            self.visit_field(field);
        }
    }

    fn visit_join(&mut self, j: &Join) {
        self.w.push(&j.kind.to_string());
        self.w.blank();
        self.visit_table(&j.table);
        if !j.on.is_empty() {
            self.w.push(" ON ");
            self.visit_join_conditions(&j.on);
        }
    }

    // ON clauses stay on one line, tokens separated by single blanks.
    fn visit_join_conditions(&mut self, c: &Conditions) {
        use crate::ast::Token;

        for (i, token) in c.tokens().iter().enumerate() {
            if i > 0 {
                self.w.blank();
            }
            match token {
                Token::Predicate(p) => self.visit_condition(p),
                Token::Raw(r) => self.w.push(&r.0),
                Token::And => self.w.push("AND"),
                Token::Or => self.w.push("OR"),
                Token::Open => self.w.push("("),
                Token::Close => self.w.push(")"),
            }
        }
    }

    fn visit_from(&mut self, f: &FromClause) {
        self.w.push("\nFROM ");
        self.visit_table(&f.table);
        for table in &f.tables {
            self.w.comma();
            self.visit_table(table);
        }
        for join in &f.joins {
            self.w.line_break();
            self.visit_join(join);
        }
    }

    fn visit_where(&mut self, where_clause: &Where) {
        if where_clause.is_empty() {
            return;
        }
        self.w.push("\nWHERE\n");
        self.visit_conditions(where_clause);
    }

    fn visit_group_by(&mut self, group_by: &GroupBy) {
        if group_by.is_empty() {
            return;
        }
        self.w.push("\nGROUP BY ");
        for (i, expr) in group_by.fields.iter().enumerate() {
            if i > 0 {
                self.w.comma();
            }
            self.visit_expr(expr);
        }
    }

    fn visit_order_by(&mut self, order_by: &OrderBy) {
        if order_by.is_empty() {
            return;
        }
        self.w.push("\nORDER BY ");
        for (i, field) in order_by.fields.iter().enumerate() {
            if i > 0 {
                self.w.comma();
            }
            self.visit_expr(&field.expr);
            self.w.blank();
            self.w.push(&field.dir.to_string());
        }
    }

    fn visit_query(&mut self, q: &Query) {
        self.w.push("SELECT ");
        if q.distinct {
            self.w.push("DISTINCT ");
        }
        self.visit_select(&q.select);
        self.visit_from(&q.from);
        self.visit_where(&q.where_clause);
        if let Some(group_by) = &q.group_by {
            self.visit_group_by(group_by);
            // HAVING without GROUP BY is not rendered.
            if !group_by.is_empty() {
                if let Some(having) = &q.having {
                    if !having.is_empty() {
                        self.w.push("\nHAVING\n");
                        self.visit_conditions(having);
                    }
                }
            }
        }
        if let Some(order_by) = &q.order_by {
            self.visit_order_by(order_by);
        }
        if q.offset > 0 || q.count > 0 {
            self.w.push(&format!("\nLIMIT {},{}", q.offset, q.count));
        }
        self.w.push(";");
    }

    fn visit_insert(&mut self, insert: &Insert) {
        self.w.push("INSERT INTO ");
        self.w.push(&insert.table.name);
        self.w.open_paren();
        for (i, set) in insert.sets.iter().enumerate() {
            if i > 0 {
                self.w.comma();
            }
            self.w.push(&set.column.0);
        }
        self.w.close_paren();
        self.w.push("\nVALUES");
        self.w.open_paren();
        for (i, set) in insert.sets.iter().enumerate() {
            if i > 0 {
                self.w.comma();
            }
            self.visit_expr(&set.value);
        }
        self.w.close_paren();
        self.w.push(";");
    }

    fn visit_update(&mut self, update: &Update) {
        self.w.push("UPDATE ");
        self.w.push(&update.table.name);
        self.w.push(" SET\n");
        for (i, set) in update.sets.iter().enumerate() {
            if i > 0 {
                self.w.comma();
            }
            self.w.push(&set.column.0);
            self.w.push(" = ");
            self.visit_expr(&set.value);
        }
        self.visit_where(&update.where_clause);
        if let Some(order_by) = &update.order_by {
            self.visit_order_by(order_by);
        }
        if update.count > 0 {
            self.w.push(&format!("\nLIMIT {}", update.count));
        }
        self.w.push(";");
    }

    fn visit_delete(&mut self, delete: &Delete) {
        self.w.push("DELETE FROM ");
        self.w.push(&delete.table.name);
        self.visit_where(&delete.where_clause);
        if let Some(order_by) = &delete.order_by {
            self.visit_order_by(order_by);
        }
        if delete.count > 0 {
            self.w.push(&format!("\nLIMIT {}", delete.count));
        }
        self.w.push(";");
    }
}
