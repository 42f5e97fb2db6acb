use pretty_assertions::assert_eq;

use crate::ast::{Delete, Insert, Operator, Query, Raw, Statement, Update, Value};
use crate::compiler::{Compiler, SqlDriver};

fn compile(stmt: impl Into<Statement>) -> (String, Vec<Value>) {
    SqlDriver::ansi().compile("", &stmt.into()).unwrap()
}

#[test]
fn select_star_with_where() {
    let mut q = Query::new("ttable", None);
    q.where_().equals("cint", 42);

    let (sql, args) = compile(q);
    assert_eq!(sql, "SELECT *\nFROM ttable\nWHERE\ncint = ?;");
    assert_eq!(args, vec![Value::Int(42)]);
}

#[test]
fn full_query() {
    let mut q = Query::new("ttable", Some("t"));
    q.select
        .column("cint")
        .column_as("cstr", "s")
        .sum("cfloat", Some("total"));
    q.distinct();
    q.where_().greater_than("cint", 1);
    q.use_group_by().columns(&["cint", "cstr"]);
    q.use_having().sum(Operator::GreaterThan, "cfloat", 10.01);
    q.use_order_by().asc("cint").desc("cstr");
    q.limit(0, 10);

    let (sql, args) = compile(q);
    assert_eq!(
        sql,
        "SELECT DISTINCT cint, cstr AS \"s\", SUM(cfloat) AS \"total\"\n\
         FROM ttable AS t\n\
         WHERE\n\
         cint > ?\n\
         GROUP BY cint, cstr\n\
         HAVING\n\
         SUM(cfloat) > ?\n\
         ORDER BY cint ASC, cstr DESC\n\
         LIMIT 0,10;"
    );
    assert_eq!(args, vec![Value::Int(1), Value::Float(10.01)]);
}

#[test]
fn having_without_group_by_is_dropped() {
    let mut q = Query::new("ttable", None);
    q.use_having().count(Operator::GreaterThan, "cint", 1);

    let (sql, args) = compile(q);
    assert_eq!(sql, "SELECT *\nFROM ttable;");
    assert_eq!(args, vec![]);
}

#[test]
fn comma_tables_and_joins() {
    let mut q = Query::new("ttable", Some("t1"));
    q.from.then_from("tother", None);
    q.from
        .left_join("tjoin", Some("tj"))
        .on2("t1.cint", "tj.cint", "t1.cstr", "tj.cstr");

    let (sql, args) = compile(q);
    assert_eq!(
        sql,
        "SELECT *\n\
         FROM ttable AS t1, tother\n\
         LEFT JOIN tjoin AS tj ON t1.cint = tj.cint AND t1.cstr = tj.cstr;"
    );
    assert_eq!(args, vec![]);
}

#[test]
fn nested_condition_groups_indent_by_depth() {
    let mut q = Query::new("ttable", None);
    q.where_()
        .open()
        .is_null("cbytes")
        .or()
        .is_not_null("cbytes")
        .close()
        .or()
        .open()
        .not_equals("cint", 2)
        .exists(Raw::new("select 1"))
        .close();

    let (sql, args) = compile(q);
    assert_eq!(
        sql,
        "SELECT *\n\
         FROM ttable\n\
         WHERE\n\
         (\n\
         \tcbytes IS NULL\n\
         \tOR\n\
         \tcbytes IS NOT NULL\n\
         )\n\
         OR\n\
         (\n\
         \tcint <> ?\n\
         \tAND\n\
         \tEXISTS(select 1)\n\
         );"
    );
    assert_eq!(args, vec![Value::Int(2)]);
}

#[test]
fn in_with_integer_array_is_inlined() {
    let mut q = Query::new("ttable", None);
    q.where_().is_in("cint", vec![1, 2, 3]);

    let (sql, args) = compile(q);
    assert_eq!(sql, "SELECT *\nFROM ttable\nWHERE\ncint IN (1, 2, 3);");
    assert_eq!(args, vec![]);
}

#[test]
fn in_with_string_array_is_inlined_and_quoted() {
    let mut q = Query::new("ttable", None);
    q.where_().not_in("cstr", vec!["a", "b'c"]);

    let (sql, args) = compile(q);
    assert_eq!(
        sql,
        "SELECT *\nFROM ttable\nWHERE\ncstr NOT IN ('a', 'b''c');"
    );
    assert_eq!(args, vec![]);
}

#[test]
fn in_with_mixed_array_binds_placeholders() {
    let mut q = Query::new("ttable", None);
    q.where_()
        .is_in("cint", vec![Value::Int(1), Value::Bool(true)]);

    let (sql, args) = compile(q);
    assert_eq!(sql, "SELECT *\nFROM ttable\nWHERE\ncint IN (?, ?);");
    assert_eq!(args, vec![Value::Int(1), Value::Bool(true)]);
}

#[test]
fn in_with_subquery() {
    let mut q = Query::new("ttable", None);
    q.where_()
        .is_in("cint", Raw::new("select cint from tother"));

    let (sql, args) = compile(q);
    assert_eq!(
        sql,
        "SELECT *\nFROM ttable\nWHERE\ncint IN (select cint from tother);"
    );
    assert_eq!(args, vec![]);
}

#[test]
fn in_with_single_value_binds_one_placeholder() {
    let mut q = Query::new("ttable", None);
    q.where_().is_in("cint", 5);

    let (sql, args) = compile(q);
    assert_eq!(sql, "SELECT *\nFROM ttable\nWHERE\ncint IN (?);");
    assert_eq!(args, vec![Value::Int(5)]);
}

#[test]
fn raw_condition_renders_verbatim() {
    let mut q = Query::new("ttable", None);
    q.where_().equals("cint", 1).raw("cint % 2 = 0");

    let (sql, args) = compile(q);
    assert_eq!(
        sql,
        "SELECT *\nFROM ttable\nWHERE\ncint = ?\nAND\ncint % 2 = 0;"
    );
    assert_eq!(args, vec![Value::Int(1)]);
}

#[test]
fn insert_with_null_literal() {
    let mut ins = Insert::new("ttable");
    ins.set("cint", 42).set("cstr", "x").set("cnull", Value::Null);

    let (sql, args) = compile(ins);
    assert_eq!(
        sql,
        "INSERT INTO ttable(cint, cstr, cnull)\nVALUES(?, ?, NULL);"
    );
    assert_eq!(args, vec![Value::Int(42), Value::Str("x".to_string())]);
}

#[test]
fn update_with_where_order_and_limit() {
    let mut u = Update::new("ttable");
    u.set("cstr", "y").set("cfloat", 2.5);
    u.where_().equals("cint", 101);
    u.use_order_by().asc("cint");
    u.limit(3);

    let (sql, args) = compile(u);
    assert_eq!(
        sql,
        "UPDATE ttable SET\n\
         cstr = ?, cfloat = ?\n\
         WHERE\n\
         cint = ?\n\
         ORDER BY cint ASC\n\
         LIMIT 3;"
    );
    assert_eq!(
        args,
        vec![
            Value::Str("y".to_string()),
            Value::Float(2.5),
            Value::Int(101)
        ]
    );
}

#[test]
fn delete_with_where_order_and_limit() {
    let mut d = Delete::new("ttable");
    d.where_().equals("cint", 101);
    d.use_order_by().desc("cint");
    d.limit(3);

    let (sql, args) = compile(d);
    assert_eq!(
        sql,
        "DELETE FROM ttable\n\
         WHERE\n\
         cint = ?\n\
         ORDER BY cint DESC\n\
         LIMIT 3;"
    );
    assert_eq!(args, vec![Value::Int(101)]);
}

#[test]
fn null_comparison_renders_a_literal() {
    let mut q = Query::new("ttable", None);
    q.where_().equals("cstr", Value::Null);

    let (sql, args) = compile(q);
    assert_eq!(sql, "SELECT *\nFROM ttable\nWHERE\ncstr = NULL;");
    assert_eq!(args, vec![]);
}
