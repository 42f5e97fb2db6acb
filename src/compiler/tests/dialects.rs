use pretty_assertions::assert_eq;

use crate::ast::{Insert, Query, Statement, Value};
use crate::compiler::{Compiler, SqlDriver};

fn compile(driver: SqlDriver, stmt: impl Into<Statement>) -> (String, Vec<Value>) {
    driver.compile("", &stmt.into()).unwrap()
}

#[test]
fn postgres_numbers_placeholders() {
    let mut q = Query::new("ttable", None);
    q.where_().equals("cint", 1).less_than("cfloat", 2.5);

    let (sql, args) = compile(SqlDriver::postgres(), q);
    assert_eq!(
        sql,
        "SELECT *\nFROM ttable\nWHERE\ncint = $1\nAND\ncfloat < $2;"
    );
    assert_eq!(args, vec![Value::Int(1), Value::Float(2.5)]);
}

#[test]
fn postgres_insert() {
    let mut ins = Insert::new("ttable");
    ins.set("cint", 42).set("cstr", "x");

    let (sql, args) = compile(SqlDriver::postgres(), ins);
    assert_eq!(sql, "INSERT INTO ttable(cint, cstr)\nVALUES($1, $2);");
    assert_eq!(args, vec![Value::Int(42), Value::Str("x".to_string())]);
}

#[test]
fn postgres_numbering_spans_in_lists() {
    let mut q = Query::new("ttable", None);
    q.where_()
        .equals("cstr", "a")
        .is_in("cint", vec![Value::Int(1), Value::Bool(true)])
        .equals("cbool", false);

    let (sql, args) = compile(SqlDriver::postgres(), q);
    assert_eq!(
        sql,
        "SELECT *\nFROM ttable\nWHERE\ncstr = $1\nAND\ncint IN ($2, $3)\nAND\ncbool = $4;"
    );
    assert_eq!(
        args,
        vec![
            Value::Str("a".to_string()),
            Value::Int(1),
            Value::Bool(true),
            Value::Bool(false)
        ]
    );
}

#[test]
fn mysql_quotes_aliases_with_backticks() {
    let mut q = Query::new("ttable", None);
    q.select.column_as("cstr", "s");

    let (sql, _) = compile(SqlDriver::mysql(), q);
    assert_eq!(sql, "SELECT cstr AS `s`\nFROM ttable;");
}

#[test]
fn mssql_quotes_aliases_with_brackets() {
    let mut q = Query::new("ttable", None);
    q.select.column_as("cstr", "s");

    let (sql, _) = compile(SqlDriver::mssql(), q);
    assert_eq!(sql, "SELECT cstr AS [s]\nFROM ttable;");
}

#[test]
fn ansi_quotes_aliases_with_double_quotes() {
    let mut q = Query::new("ttable", None);
    q.select.column_as("cstr", "s");

    let (sql, _) = compile(SqlDriver::ansi(), q);
    assert_eq!(sql, "SELECT cstr AS \"s\"\nFROM ttable;");
}
