use crate::constants::merge::{DEFAULT_KEYS, NAME_KEY};
use crate::utils::merge_key::MergeKeyValue;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Candidate fields used to match elements of two arrays of objects, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub keys: Vec<String>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self::new(DEFAULT_KEYS.iter().copied())
    }
}

impl MergeOptions {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name_only() -> Self {
        Self::new([NAME_KEY])
    }
}

pub fn merge_values(original: &Value, patch: &Value, options: &MergeOptions) -> Value {
    match (original, patch) {
        (Value::Object(original), Value::Object(patch)) => {
            Value::Object(merge_objects(original, patch, options))
        }
        (Value::Array(original), Value::Array(patch)) => {
            Value::Array(merge_arrays(original, patch, options))
        }
        (_, patch) => patch.clone(),
    }
}

/// Key-wise union of two objects. Original keys keep their order, new patch keys follow
/// in patch order, and patch values win wherever the two sides cannot be merged further.
pub fn merge_objects(
    original: &Map<String, Value>,
    patch: &Map<String, Value>,
    options: &MergeOptions,
) -> Map<String, Value> {
    let mut result = original.clone();
    for (key, patch_value) in patch.iter() {
        let merged = match result.get(key) {
            Some(existing) => merge_values(existing, patch_value, options),
            None => patch_value.clone(),
        };
        result.insert(key.clone(), merged);
    }
    result
}

pub fn merge_arrays(original: &[Value], patch: &[Value], options: &MergeOptions) -> Vec<Value> {
    match select_merge_key(original, patch, options) {
        Some(key) => merge_by_key(original, patch, key, options),
        None => original.iter().chain(patch.iter()).cloned().collect(),
    }
}

/// First candidate key that both arrays can be indexed by.
pub fn select_merge_key<'a>(
    original: &[Value],
    patch: &[Value],
    options: &'a MergeOptions,
) -> Option<&'a str> {
    options
        .keys
        .iter()
        .map(String::as_str)
        .find(|key| can_merge_by_key(original, key) && can_merge_by_key(patch, key))
}

/// True when every element is an object carrying `key` with a primitive value.
/// An empty array qualifies for any key.
pub fn can_merge_by_key(items: &[Value], key: &str) -> bool {
    items
        .iter()
        .all(|item| MergeKeyValue::of_element(item, key).is_some())
}

fn merge_by_key(
    original: &[Value],
    patch: &[Value],
    key: &str,
    options: &MergeOptions,
) -> Vec<Value> {
    // Duplicate key values: the last original element owns the slot, earlier ones stay as-is.
    let index: HashMap<MergeKeyValue, usize> = original
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| MergeKeyValue::of_element(item, key).map(|value| (value, idx)))
        .collect();

    let mut result = original.to_vec();
    for patch_item in patch {
        let slot = MergeKeyValue::of_element(patch_item, key).and_then(|value| index.get(&value));
        match slot {
            Some(&idx) => {
                let merged = merge_values(&result[idx], patch_item, options);
                result[idx] = merged;
            }
            None => result.push(patch_item.clone()),
        }
    }
    result
}
