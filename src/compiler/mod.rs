//! Compilation of statement trees to native SQL text and ordered arguments.

mod procedure;
mod stmt;
mod template;
mod writer;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use crate::ast::{Statement, Value};
use crate::dialect::{AnsiDialect, Dialect, MssqlDialect, MysqlDialect, PostgresDialect};
use crate::error::CompileError;

pub use self::template::parse_template;

use self::stmt::StatementCompiler;

/// Compiles a statement tree to SQL text plus the bound arguments in
/// placeholder order.
pub trait Compiler: Send + Sync {
    /// `source` identifies the connection the result is meant for. The
    /// built-in compilers render the same SQL for every source.
    fn compile(
        &self,
        source: &str,
        stmt: &Statement,
    ) -> Result<(String, Vec<Value>), CompileError>;
}

/// The standard compiler: one dialect, all statement kinds.
pub struct SqlDriver {
    dialect: Arc<dyn Dialect>,
}

impl SqlDriver {
    pub fn new(dialect: Arc<dyn Dialect>) -> Self {
        SqlDriver { dialect }
    }

    pub fn ansi() -> Self {
        SqlDriver::new(Arc::new(AnsiDialect))
    }

    pub fn mysql() -> Self {
        SqlDriver::new(Arc::new(MysqlDialect))
    }

    pub fn postgres() -> Self {
        SqlDriver::new(Arc::new(PostgresDialect))
    }

    pub fn mssql() -> Self {
        SqlDriver::new(Arc::new(MssqlDialect))
    }

    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }
}

impl Compiler for SqlDriver {
    fn compile(
        &self,
        _source: &str,
        stmt: &Statement,
    ) -> Result<(String, Vec<Value>), CompileError> {
        match stmt {
            Statement::Text(text) => template::bind(text, self.dialect.as_ref()),
            Statement::Procedure(sp) => procedure::compile(self.dialect.as_ref(), sp),
            Statement::Query(_) | Statement::Insert(_) | Statement::Update(_)
            | Statement::Delete(_) => StatementCompiler::new(self.dialect.as_ref()).compile(stmt),
        }
    }
}
