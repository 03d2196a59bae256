//! JSON filter
//!
//! Resource keys are the paths of string leaves: nested objects join with
//! `.` and array items use `[index]`, so `{"menu": {"items": ["Open"]}}`
//! holds the key `menu.items[0]`. Any other leaf type is rejected.

use serde_json::{Map, Value};

use crate::domain::{LanguageBundle, ResourceString};
use crate::filter::{FilterError, FilterOptions, ResourceFilter, utf8};

pub struct JsonFilter;

impl ResourceFilter for JsonFilter {
    fn parse(&self, content: &[u8], _options: &FilterOptions) -> Result<LanguageBundle, FilterError> {
        let root = parse_document(content)?;

        let mut leaves = Vec::new();
        collect_leaves(&root, String::new(), &mut leaves)?;

        let mut bundle = LanguageBundle::new();
        for (idx, (key, value)) in leaves.into_iter().enumerate() {
            let sequence_number = u32::try_from(idx + 1)
                .map_err(|_| FilterError::Invalid("too many entries".to_string()))?;
            if bundle.get(&key).is_some() {
                return Err(FilterError::Invalid(format!("duplicate key '{key}'")));
            }
            bundle.add(ResourceString::new(key, value).with_sequence_number(sequence_number));
        }
        Ok(bundle)
    }

    fn merge(
        &self,
        original: &[u8],
        bundle: &LanguageBundle,
        _options: &FilterOptions,
    ) -> Result<Vec<u8>, FilterError> {
        let mut root = parse_document(original)?;
        replace_leaves(&mut root, String::new(), bundle);
        render(&root)
    }

    fn write(&self, bundle: &LanguageBundle, _options: &FilterOptions) -> Result<Vec<u8>, FilterError> {
        let object: Map<String, Value> = bundle
            .ordered_strings()
            .into_iter()
            .map(|s| (s.key.clone(), Value::String(s.value.clone())))
            .collect();
        render(&Value::Object(object))
    }
}

fn parse_document(content: &[u8]) -> Result<Value, FilterError> {
    let text = utf8(content)?;
    let root: Value = serde_json::from_str(text).map_err(|e| FilterError::Syntax {
        line: e.line(),
        message: e.to_string(),
    })?;
    if root.is_object() {
        Ok(root)
    } else {
        Err(FilterError::Invalid(
            "top level value must be a JSON object".to_string(),
        ))
    }
}

fn render(root: &Value) -> Result<Vec<u8>, FilterError> {
    let mut out =
        serde_json::to_vec_pretty(root).map_err(|e| FilterError::Invalid(e.to_string()))?;
    out.push(b'\n');
    Ok(out)
}

fn child_key(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

fn collect_leaves(
    value: &Value,
    key: String,
    leaves: &mut Vec<(String, String)>,
) -> Result<(), FilterError> {
    match value {
        Value::String(s) => leaves.push((key, s.clone())),
        Value::Object(map) => {
            for (name, child) in map {
                collect_leaves(child, child_key(&key, name), leaves)?;
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter().enumerate() {
                collect_leaves(child, format!("{key}[{idx}]"), leaves)?;
            }
        }
        other => {
            return Err(FilterError::Invalid(format!(
                "value of '{key}' is not a string: {other}"
            )));
        }
    }
    Ok(())
}

fn replace_leaves(value: &mut Value, key: String, bundle: &LanguageBundle) {
    match value {
        Value::String(s) => {
            if let Some(string) = bundle.get(&key) {
                s.clone_from(&string.value);
            }
        }
        Value::Object(map) => {
            for (name, child) in map.iter_mut() {
                replace_leaves(child, child_key(&key, name), bundle);
            }
        }
        Value::Array(items) => {
            for (idx, child) in items.iter_mut().enumerate() {
                replace_leaves(child, format!("{key}[{idx}]"), bundle);
            }
        }
        _ => {}
    }
}
