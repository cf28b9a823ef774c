use serde_json::Value;

/// Primitive JSON value usable as an index key when matching array elements.
///
/// Numbers compare by their JSON rendering, so `1` and `1.0` are different keys,
/// and `1` never matches `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MergeKeyValue {
    Null,
    Bool(bool),
    Number(String),
    String(String),
}

impl MergeKeyValue {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(MergeKeyValue::Null),
            Value::Bool(flag) => Some(MergeKeyValue::Bool(*flag)),
            Value::Number(number) => Some(MergeKeyValue::Number(number.to_string())),
            Value::String(text) => Some(MergeKeyValue::String(text.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Reads `key` from an object element. `None` when the element is not an object,
    /// lacks the key, or holds a non-primitive value there.
    pub fn of_element(element: &Value, key: &str) -> Option<Self> {
        element
            .as_object()
            .and_then(|map| map.get(key))
            .and_then(Self::from_value)
    }
}
