//! Raw SQL templates and stored procedure calls.

use serde::{Deserialize, Serialize};

use super::values::Value;

/// Direction of a procedure parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParamDirection {
    In,
    Out,
    InOut,
    Return,
}

impl ParamDirection {
    /// True for directions whose value is sent to the server.
    pub fn is_in(&self) -> bool {
        matches!(self, ParamDirection::In | ParamDirection::InOut)
    }

    /// True for directions whose value comes back from the server.
    pub fn is_out(&self) -> bool {
        matches!(self, ParamDirection::Out | ParamDirection::InOut)
    }
}

impl std::fmt::Display for ParamDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamDirection::In => f.write_str("IN"),
            ParamDirection::Out => f.write_str("OUT"),
            ParamDirection::InOut => f.write_str("INOUT"),
            ParamDirection::Return => f.write_str("RETURN"),
        }
    }
}

/// A named parameter with a value and direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: Value,
    pub dir: ParamDirection,
}

impl Parameter {
    pub fn new(name: impl Into<String>, value: impl Into<Value>, dir: ParamDirection) -> Self {
        Parameter {
            name: name.into(),
            value: value.into(),
            dir,
        }
    }
}

/// A raw SQL template with `{name}` placeholders bound by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub sql: String,
    pub parameters: Vec<Parameter>,
}

impl Text {
    pub fn new(sql: impl Into<String>) -> Self {
        Text {
            sql: sql.into(),
            parameters: Vec::new(),
        }
    }

    /// Binds a value to a placeholder name. Template parameters are always
    /// inputs.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.parameters
            .push(Parameter::new(name, value, ParamDirection::In));
        self
    }

    pub fn find_parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

/// A stored procedure or function call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Procedure {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl Procedure {
    pub fn new(name: impl Into<String>) -> Self {
        Procedure {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Adds an input parameter.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.set_dir(name, value, ParamDirection::In)
    }

    /// Adds a parameter with an explicit direction.
    pub fn set_dir(
        &mut self,
        name: &str,
        value: impl Into<Value>,
        dir: ParamDirection,
    ) -> &mut Self {
        self.parameters.push(Parameter::new(name, value, dir));
        self
    }

    pub fn find_parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// The name of the RETURN parameter, when one is declared.
    pub fn return_parameter_name(&self) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.dir == ParamDirection::Return)
            .map(|p| p.name.as_str())
    }

    /// True when any parameter carries a value back from the server.
    pub fn has_out_parameter(&self) -> bool {
        self.parameters.iter().any(|p| p.dir.is_out())
    }
}
