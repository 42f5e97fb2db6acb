use thiserror::Error;

/// Errors returned by the top-level compile entry points.
///
/// Every variant describes bad *input data* (a malformed template, a missing
/// parameter binding, an unknown driver name). Malformed *trees* — shapes the
/// builders cannot produce, like a `Text` node nested inside a `Query` — are
/// programmer bugs and panic instead.
#[derive(Debug, Error, PartialEq)]
pub enum CompileError {
    /// A `{name}` template with unbalanced or empty braces.
    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    /// A template placeholder with no bound parameter value.
    #[error("no value bound for template parameter `{0}`")]
    UnboundParameter(String),

    /// A statement kind the active compiler cannot render.
    #[error("unsupported statement node: {0}")]
    UnsupportedNode(String),

    /// The dialect lacks support for the requested operation.
    #[error("dialect `{dialect}` does not support {operation}")]
    UnsupportedDialectOperation { dialect: String, operation: String },

    /// No dialect or compiler registered under the given driver name.
    #[error("no driver registered under `{0}`")]
    UnregisteredDriver(String),
}
