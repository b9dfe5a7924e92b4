//! Field deserializers shared by the JSON and XML decode paths.
//!
//! Both formats are normalized into a `serde_json::Value` before they reach
//! the schema, so a field can arrive as a JSON number in one format and as
//! attribute text in the other. These helpers accept either spelling.

use std::fmt::Display;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde_json::Value;

/// Keep a scalar exactly as the API wrote it: `true` becomes `"true"`,
/// `12` becomes `"12"`, null becomes the empty string.
pub fn literal<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        nested => nested.to_string(),
    })
}

/// Parse a number from either a JSON number or its text form.
pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let text = match Value::deserialize(deserializer)? {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text,
        other => {
            return Err(D::Error::custom(format!(
                "expected a number, found {other}"
            )));
        }
    };
    text.trim()
        .parse()
        .map_err(|err| D::Error::custom(format!("invalid number {text:?}: {err}")))
}

/// Parse a boolean from a JSON bool or `"true"`/`"false"` text.
pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Bool(flag) => Ok(flag),
        Value::Null => Ok(false),
        Value::String(text) => match text.trim() {
            "true" => Ok(true),
            "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!("invalid boolean {other:?}"))),
        },
        other => Err(D::Error::custom(format!("expected a boolean, found {other}"))),
    }
}

/// Accept a list, a single element, or nothing.
///
/// XML has no way to mark a lone child as a list, and the JSON API collapses
/// one-element lists on some fields.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::String(text) if text.trim().is_empty() => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .map(|item| T::deserialize(item).map_err(D::Error::custom))
            .collect(),
        single => T::deserialize(single)
            .map(|item| vec![item])
            .map_err(D::Error::custom),
    }
}

/// Decode a nested group, treating an empty element as the default value.
pub fn group<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(T::default()),
        Value::String(text) if text.trim().is_empty() => Ok(T::default()),
        value => T::deserialize(value).map_err(D::Error::custom),
    }
}

/// Items of a counted group such as `assumptions` or `sources`.
///
/// XML and some JSON responses wrap the items as
/// `{"count": N, "<item_key>": [...]}`. The JSON API also sends the items
/// directly, either as one bare object or as an array. Without a `count`,
/// the number of items is used.
pub fn counted<T>(value: Value, item_key: &str) -> Result<(u32, Vec<T>), serde_json::Error>
where
    T: DeserializeOwned,
{
    match value {
        Value::Null => Ok((0, Vec::new())),
        Value::String(text) if text.trim().is_empty() => Ok((0, Vec::new())),
        Value::Array(items) => {
            let items = items
                .into_iter()
                .map(T::deserialize)
                .collect::<Result<Vec<T>, _>>()?;
            Ok((len_u32(items.len()), items))
        }
        Value::Object(mut map) if is_wrapper(&map, item_key) => {
            let items: Vec<T> = one_or_many(map.remove(item_key).unwrap_or(Value::Null))?;
            let count = match map.remove("count") {
                Some(count) => number(count)?,
                None => len_u32(items.len()),
            };
            Ok((count, items))
        }
        single => Ok((1, vec![T::deserialize(single)?])),
    }
}

fn is_wrapper(map: &serde_json::Map<String, Value>, item_key: &str) -> bool {
    map.contains_key(item_key) || map.keys().all(|key| key == "count")
}

fn len_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
