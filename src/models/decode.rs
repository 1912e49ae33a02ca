//! Conversion of provider JSON into typed records.
//!
//! Every model is decoded through [`decode`] or [`decode_list`], so a body
//! that does not match the expected shape always surfaces as
//! [`Error::MalformedResponse`] naming the offending field.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// Decode a single JSON value into `T`.
///
/// `context` names the value being decoded (for example `"project"`) and
/// prefixes the path of the offending field, as in `project.hashedId`.
pub fn decode<T: DeserializeOwned>(value: Value, context: &str) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(|e| malformed(e, context))
}

/// Decode a JSON array into a vector of `T`, element by element.
///
/// Fails if `value` is not an array, or if any element fails to decode.
pub fn decode_list<T: DeserializeOwned>(value: Value, context: &str) -> Result<Vec<T>> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_path_to_error::deserialize(item)
                    .map_err(|e| malformed(e, &format!("{}[{}]", context, index)))
            })
            .collect(),
        other => Err(Error::malformed(
            context,
            format!("expected an array, got {}", json_kind(&other)),
        )),
    }
}

/// Take the array under `key` out of a JSON object.
pub(crate) fn take_array(value: &mut Value, key: &str) -> Result<Value> {
    match value {
        Value::Object(map) => match map.remove(key) {
            Some(Value::Null) => Ok(Value::Array(Vec::new())),
            Some(array @ Value::Array(_)) => Ok(array),
            Some(other) => Err(Error::malformed(
                key,
                format!("expected an array, got {}", json_kind(&other)),
            )),
            None => Err(Error::malformed(key, "missing field")),
        },
        other => Err(Error::malformed(
            key,
            format!("expected an object containing `{}`, got {}", key, json_kind(other)),
        )),
    }
}

fn malformed(err: serde_path_to_error::Error<serde_json::Error>, context: &str) -> Error {
    let mut field = context.to_string();
    let path = err.path().to_string();
    // An empty path renders as "."
    if path != "." {
        if !path.starts_with('[') {
            field.push('.');
        }
        field.push_str(&path);
    }

    let message = err.into_inner().to_string();
    if let Some(name) = missing_field(&message) {
        field.push('.');
        field.push_str(name);
    }
    Error::malformed(field, message)
}

/// Extract `name` from serde's "missing field `name`" message.
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Deserialize an optional flag that Wistia may send as `true`/`false` or as
/// the strings `"true"`/`"false"`.
pub(crate) fn flexible_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
        Number(i64),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(b)) => Ok(Some(b)),
        Some(Flag::Number(n)) => Ok(Some(n != 0)),
        Some(Flag::Text(s)) => match s.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            "" => Ok(None),
            _ => Err(de::Error::invalid_value(de::Unexpected::Str(&s), &"a boolean flag")),
        },
    }
}
