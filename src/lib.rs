pub mod ast;
pub mod compiler;
pub mod dialect;
pub mod error;
pub mod registry;

pub use compiler::{parse_template, Compiler, SqlDriver};
pub use error::CompileError;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::compiler::{parse_template, Compiler, SqlDriver};
    pub use crate::dialect::{
        AnsiDialect, CanonicalType, Dialect, MssqlDialect, MysqlDialect, PostgresDialect,
    };
    pub use crate::error::CompileError;
    pub use crate::registry::{self, Registry};
}
