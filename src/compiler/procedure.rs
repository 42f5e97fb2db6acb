//! Stored procedure call strategies.
//!
//! What a call can express differs per engine:
//!
//! * `postgres` renders a function call, `SELECT * FROM f($1, ...)`. Output
//!   values come back as the result set; a RETURN parameter cannot be bound.
//! * `mysql` routes OUT/INOUT parameters through session variables and
//!   appends a SELECT to read them back.
//! * `mssql` declares a local variable per output parameter and selects the
//!   locals afterwards. Locals are declared `int`, so only integer outputs
//!   round-trip.
//! * every other dialect reports the call as unsupported.

use crate::ast::{ParamDirection, Procedure, Value};
use crate::dialect::Dialect;
use crate::error::CompileError;

use super::writer::SqlWriter;

pub(crate) fn compile(
    dialect: &dyn Dialect,
    sp: &Procedure,
) -> Result<(String, Vec<Value>), CompileError> {
    if sp.name.is_empty() {
        return Err(CompileError::UnsupportedNode(
            "procedure with empty name".to_string(),
        ));
    }

    match dialect.name() {
        "postgres" => Ok(function_call(dialect, sp)),
        "mysql" => Ok(session_variables(sp)),
        "mssql" => Ok(local_declarations(sp)),
        other => Err(CompileError::UnsupportedDialectOperation {
            dialect: other.to_string(),
            operation: "stored procedure calls".to_string(),
        }),
    }
}

/// `SELECT * FROM name($1, $2);` binding the input parameters in order.
fn function_call(dialect: &dyn Dialect, sp: &Procedure) -> (String, Vec<Value>) {
    let mut w = SqlWriter::new();
    let mut args = Vec::new();
    let mut index = 0usize;

    w.push("SELECT * FROM ");
    w.push(&sp.name);
    w.open_paren();
    for p in &sp.parameters {
        if !p.dir.is_in() {
            continue;
        }
        if index > 0 {
            w.comma();
        }
        index += 1;
        w.push(&format!("{}{}", dialect.parameter_placeholder(), index));
        args.push(p.value.clone());
    }
    w.close_paren();
    w.push(";");

    (w.into_string(), args)
}

/// `CALL name(?, ...);` when every parameter is an input. Otherwise INOUT
/// parameters are seeded into session variables first, the call reads and
/// writes those variables, and a final SELECT returns them.
fn session_variables(sp: &Procedure) -> (String, Vec<Value>) {
    let mut w = SqlWriter::new();
    let mut args = Vec::new();
    let returns = sp.return_parameter_name().map(str::to_string);

    if returns.is_none() && !sp.has_out_parameter() {
        w.push("CALL ");
        w.push(&sp.name);
        w.open_paren();
        for (i, p) in sp.parameters.iter().enumerate() {
            if i > 0 {
                w.comma();
            }
            w.push("?");
            args.push(p.value.clone());
        }
        w.close_paren();
        w.push(";");
        return (w.into_string(), args);
    }

    for p in &sp.parameters {
        if p.dir == ParamDirection::InOut {
            w.push(&format!("SET @{} = ?;\n", p.name));
            args.push(p.value.clone());
        }
    }

    match &returns {
        Some(ret) => w.push(&format!("SET @{} = {}", ret, sp.name)),
        None => {
            w.push("CALL ");
            w.push(&sp.name);
        }
    }
    w.open_paren();
    let mut split = false;
    for p in &sp.parameters {
        match p.dir {
            ParamDirection::Return => continue,
            ParamDirection::In => {
                if split {
                    w.comma();
                }
                split = true;
                w.push("?");
                args.push(p.value.clone());
            }
            ParamDirection::Out | ParamDirection::InOut => {
                if split {
                    w.comma();
                }
                split = true;
                w.push(&format!("@{}", p.name));
            }
        }
    }
    w.close_paren();
    w.push(";");

    w.push("\nSELECT ");
    let mut split = false;
    for p in &sp.parameters {
        if p.dir.is_out() || p.dir == ParamDirection::Return {
            if split {
                w.comma();
            }
            split = true;
            w.push(&format!("@{}", p.name));
        }
    }
    w.push(";");

    (w.into_string(), args)
}

/// `exec name ?, ?` when no output parameters are declared. Otherwise each
/// output parameter becomes a declared local, seeded from the bound value,
/// passed with `output` and selected back afterwards.
fn local_declarations(sp: &Procedure) -> (String, Vec<Value>) {
    let mut w = SqlWriter::new();
    let mut args = Vec::new();

    if !sp.has_out_parameter() {
        w.push("exec ");
        w.push(&sp.name);
        w.blank();
        let mut split = false;
        for p in &sp.parameters {
            if p.dir == ParamDirection::Return {
                continue;
            }
            if split {
                w.comma();
            }
            split = true;
            w.push("?");
            args.push(p.value.clone());
        }
        return (w.into_string(), args);
    }

    for (i, p) in sp.parameters.iter().enumerate() {
        if p.dir.is_out() {
            w.push(&format!("declare @local{i} int\nset @local{i} = ?\n"));
            args.push(p.value.clone());
        }
    }

    w.push("exec ");
    w.push(&sp.name);
    w.blank();
    let mut split = false;
    for (i, p) in sp.parameters.iter().enumerate() {
        if p.dir == ParamDirection::Return {
            continue;
        }
        if split {
            w.comma();
        }
        split = true;
        if p.dir == ParamDirection::In {
            w.push(&format!("@{} = ?", p.name));
            args.push(p.value.clone());
        } else {
            w.push(&format!("@{} = @local{i} output", p.name));
        }
    }

    w.push("\nselect ");
    let mut split = false;
    for (i, p) in sp.parameters.iter().enumerate() {
        if p.dir.is_out() {
            if split {
                w.comma();
            }
            split = true;
            w.push(&format!("@local{i}"));
        }
    }

    (w.into_string(), args)
}
