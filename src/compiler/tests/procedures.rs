use pretty_assertions::assert_eq;

use crate::ast::{ParamDirection, Procedure, Statement, Value};
use crate::compiler::{Compiler, SqlDriver};
use crate::error::CompileError;

fn compile(driver: SqlDriver, sp: Procedure) -> (String, Vec<Value>) {
    driver.compile("", &Statement::Procedure(sp)).unwrap()
}

#[test]
fn postgres_renders_a_function_call() {
    let mut sp = Procedure::new("usp_query");
    sp.set("cint", 42).set("cstr", "a");

    let (sql, args) = compile(SqlDriver::postgres(), sp);
    assert_eq!(sql, "SELECT * FROM usp_query($1, $2);");
    assert_eq!(args, vec![Value::Int(42), Value::Str("a".to_string())]);
}

#[test]
fn postgres_skips_pure_output_parameters() {
    let mut sp = Procedure::new("usp_query");
    sp.set("cint", 42);
    sp.set_dir("result", 0, ParamDirection::Out);
    sp.set_dir("state", 7, ParamDirection::InOut);

    let (sql, args) = compile(SqlDriver::postgres(), sp);
    assert_eq!(sql, "SELECT * FROM usp_query($1, $2);");
    assert_eq!(args, vec![Value::Int(42), Value::Int(7)]);
}

#[test]
fn mysql_call_without_outputs() {
    let mut sp = Procedure::new("usp_query");
    sp.set("cint", 42).set("cstr", "a");

    let (sql, args) = compile(SqlDriver::mysql(), sp);
    assert_eq!(sql, "CALL usp_query(?, ?);");
    assert_eq!(args, vec![Value::Int(42), Value::Str("a".to_string())]);
}

#[test]
fn mysql_routes_outputs_through_session_variables() {
    let mut sp = Procedure::new("usp_query");
    sp.set("a", 1);
    sp.set_dir("b", 2, ParamDirection::InOut);
    sp.set_dir("ret", 0, ParamDirection::Return);

    let (sql, args) = compile(SqlDriver::mysql(), sp);
    assert_eq!(
        sql,
        "SET @b = ?;\n\
         SET @ret = usp_query(?, @b);\n\
         SELECT @b, @ret;"
    );
    assert_eq!(args, vec![Value::Int(2), Value::Int(1)]);
}

#[test]
fn mysql_out_parameter_is_not_seeded() {
    let mut sp = Procedure::new("usp_query");
    sp.set("a", 1);
    sp.set_dir("b", 0, ParamDirection::Out);

    let (sql, args) = compile(SqlDriver::mysql(), sp);
    assert_eq!(sql, "CALL usp_query(?, @b);\nSELECT @b;");
    assert_eq!(args, vec![Value::Int(1)]);
}

#[test]
fn mssql_exec_without_outputs() {
    let mut sp = Procedure::new("usp_query");
    sp.set("a", 1).set("b", "x");
    sp.set_dir("ret", 0, ParamDirection::Return);

    let (sql, args) = compile(SqlDriver::mssql(), sp);
    assert_eq!(sql, "exec usp_query ?, ?");
    assert_eq!(args, vec![Value::Int(1), Value::Str("x".to_string())]);
}

#[test]
fn mssql_declares_locals_for_outputs() {
    let mut sp = Procedure::new("usp_query");
    sp.set("x", 1);
    sp.set_dir("y", 2, ParamDirection::Out);

    let (sql, args) = compile(SqlDriver::mssql(), sp);
    assert_eq!(
        sql,
        "declare @local1 int\n\
         set @local1 = ?\n\
         exec usp_query @x = ?, @y = @local1 output\n\
         select @local1"
    );
    assert_eq!(args, vec![Value::Int(2), Value::Int(1)]);
}

#[test]
fn ansi_does_not_support_procedures() {
    let mut sp = Procedure::new("usp_query");
    sp.set("a", 1);

    let err = SqlDriver::ansi()
        .compile("", &Statement::Procedure(sp))
        .unwrap_err();
    assert_eq!(
        err,
        CompileError::UnsupportedDialectOperation {
            dialect: "ansi".to_string(),
            operation: "stored procedure calls".to_string(),
        }
    );
}

#[test]
fn empty_procedure_name_is_rejected() {
    let err = SqlDriver::mysql()
        .compile("", &Statement::Procedure(Procedure::new("")))
        .unwrap_err();
    assert!(matches!(err, CompileError::UnsupportedNode(_)));
}
