//! `{name}` template scanning and binding.

use crate::ast::{Text, Value};
use crate::dialect::Dialect;
use crate::error::CompileError;

/// Scans a template and returns it with placeholder whitespace normalized,
/// plus the placeholder names in order of appearance. Duplicates are kept.
///
/// An unclosed `{`, an empty `{}` or a nested `{` make the template
/// malformed.
pub fn parse_template(text: &str) -> Result<(String, Vec<String>), CompileError> {
    let mut out = String::with_capacity(text.len());
    let mut names = Vec::new();
    let mut rest = text;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        rest = &rest[start + 1..];
        let end = rest
            .find('}')
            .ok_or_else(|| CompileError::MalformedTemplate("unclosed '{'".to_string()))?;
        let body = &rest[..end];
        if body.contains('{') {
            return Err(CompileError::MalformedTemplate(
                "nested '{' in placeholder".to_string(),
            ));
        }
        let name = body.trim();
        if name.is_empty() {
            return Err(CompileError::MalformedTemplate(
                "empty placeholder".to_string(),
            ));
        }
        out.push('{');
        out.push_str(name);
        out.push('}');
        names.push(name.to_string());
        rest = &rest[end + 1..];
    }
    out.push_str(rest);

    Ok((out, names))
}

/// Replaces every `{name}` with the dialect's placeholder and collects the
/// bound values in placeholder order. A value is appended once per
/// occurrence, so a name may repeat.
///
/// A template with no parameters at all is passed through verbatim.
pub(crate) fn bind(text: &Text, dialect: &dyn Dialect) -> Result<(String, Vec<Value>), CompileError> {
    if text.sql.is_empty() {
        return Err(CompileError::MalformedTemplate(
            "sql text is empty".to_string(),
        ));
    }
    if text.parameters.is_empty() {
        return Ok((text.sql.clone(), Vec::new()));
    }

    let placeholder = dialect.parameter_placeholder();
    let named = dialect.supports_named_parameter();
    let indexed = dialect.supports_indexed_parameter();

    let mut out = String::with_capacity(text.sql.len());
    let mut args = Vec::with_capacity(text.parameters.len());
    let mut index = 0usize;
    let mut rest = text.sql.as_str();

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        rest = &rest[start + 1..];
        let end = rest
            .find('}')
            .ok_or_else(|| CompileError::MalformedTemplate("unclosed '{'".to_string()))?;
        let body = &rest[..end];
        if body.contains('{') {
            return Err(CompileError::MalformedTemplate(
                "nested '{' in placeholder".to_string(),
            ));
        }
        let name = body.trim();
        if name.is_empty() {
            return Err(CompileError::MalformedTemplate(
                "empty placeholder".to_string(),
            ));
        }
        let param = text
            .find_parameter(name)
            .ok_or_else(|| CompileError::UnboundParameter(name.to_string()))?;

        out.push_str(placeholder);
        if named {
            out.push_str(name);
        } else if indexed {
            index += 1;
            out.push_str(&index.to_string());
        }
        args.push(param.value.clone());
        rest = &rest[end + 1..];
    }
    out.push_str(rest);

    Ok((out, args))
}
