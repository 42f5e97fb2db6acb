//! Driver name to dialect/compiler lookup.
//!
//! A [`Registry`] is a plain value, so embedders can build their own. The
//! module-level [`dialect`] and [`compiler`] functions consult a global
//! registry preloaded with the built-in profiles; it is immutable once
//! initialized.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::compiler::{Compiler, SqlDriver};
use crate::dialect::{AnsiDialect, Dialect, MssqlDialect, MysqlDialect, PostgresDialect};
use crate::error::CompileError;

/// Maps driver names to dialects and compilers.
#[derive(Clone, Default)]
pub struct Registry {
    dialects: HashMap<String, Arc<dyn Dialect>>,
    compilers: HashMap<String, Arc<dyn Compiler>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// A registry preloaded with the built-in profiles. `adodb` and `lodbc`
    /// are aliases for the SQL Server profile.
    pub fn with_defaults() -> Self {
        let mut r = Registry::new();
        r.register_dialect("ansi", Arc::new(AnsiDialect));
        r.register_dialect("mysql", Arc::new(MysqlDialect));
        r.register_dialect("postgres", Arc::new(PostgresDialect));
        r.register_dialect("mssql", Arc::new(MssqlDialect));
        r.register_dialect("adodb", Arc::new(MssqlDialect));
        r.register_dialect("lodbc", Arc::new(MssqlDialect));
        r
    }

    /// Registers a dialect and its standard compiler under a driver name.
    /// Registering the same name again replaces the previous entry.
    pub fn register_dialect(&mut self, driver: impl Into<String>, dialect: Arc<dyn Dialect>) {
        let driver = driver.into();
        self.compilers
            .insert(driver.clone(), Arc::new(SqlDriver::new(dialect.clone())));
        self.dialects.insert(driver, dialect);
    }

    /// Registers a custom compiler under a driver name, replacing any
    /// previous one.
    pub fn register_compiler(&mut self, driver: impl Into<String>, compiler: Arc<dyn Compiler>) {
        self.compilers.insert(driver.into(), compiler);
    }

    pub fn dialect(&self, driver: &str) -> Result<Arc<dyn Dialect>, CompileError> {
        self.dialects
            .get(driver)
            .cloned()
            .ok_or_else(|| CompileError::UnregisteredDriver(driver.to_string()))
    }

    pub fn compiler(&self, driver: &str) -> Result<Arc<dyn Compiler>, CompileError> {
        self.compilers
            .get(driver)
            .cloned()
            .ok_or_else(|| CompileError::UnregisteredDriver(driver.to_string()))
    }
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::with_defaults);

/// Looks up a built-in dialect by driver name.
pub fn dialect(driver: &str) -> Result<Arc<dyn Dialect>, CompileError> {
    GLOBAL.dialect(driver)
}

/// Looks up a built-in compiler by driver name.
pub fn compiler(driver: &str) -> Result<Arc<dyn Compiler>, CompileError> {
    GLOBAL.compiler(driver)
}
