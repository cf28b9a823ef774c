use crate::constants::output::INDENT;
use crate::errors::MergeError;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    Original,
    Patch,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Original => write!(f, "original"),
            DocumentRole::Patch => write!(f, "patch"),
        }
    }
}

pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn read_json_object(path: &Path, role: DocumentRole) -> Result<Map<String, Value>, MergeError> {
    let raw = fs::read(path).map_err(|err| {
        MergeError::io(format!(
            "failed to read {} file {}: {}",
            role,
            path.display(),
            err
        ))
        .with_path(path)
    })?;
    parse_json_object(&raw, path, role)
}

pub fn parse_json_object(
    raw: &[u8],
    path: &Path,
    role: DocumentRole,
) -> Result<Map<String, Value>, MergeError> {
    let value: Value = serde_json::from_slice(raw).map_err(|err| {
        MergeError::parse(format!(
            "failed to parse {} JSON {}: {}",
            role,
            path.display(),
            err
        ))
        .with_path(path)
    })?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(MergeError::parse(format!(
            "{} JSON {} must be an object, got {}",
            role,
            path.display(),
            value_type_name(&other)
        ))
        .with_path(path)
        .with_hint("Wrap the document in a top-level {...} object.")),
    }
}

/// Two-space indented JSON, no trailing newline.
pub fn render_pretty(value: &Value) -> Result<String, MergeError> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer).map_err(|err| {
        MergeError::serialization(format!("failed to serialize merged JSON: {}", err))
    })?;
    String::from_utf8(buf)
        .map_err(|err| MergeError::serialization(format!("merged JSON is not UTF-8: {}", err)))
}
