//! Response formats and the decode step that maps a body onto [`QueryResult`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DecodeError;
use crate::model::QueryResult;
use crate::xml;

/// Envelope key the JSON API wraps its result in.
const ENVELOPE: &str = "queryresult";

/// Wire format requested with `output=` and used to decode the body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    /// Value of the `output` query parameter.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    /// Decode a full-results body in this format.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the body is malformed for this format or a
    /// field does not fit the schema.
    pub fn decode(self, body: &[u8]) -> Result<QueryResult, DecodeError> {
        let mut value = match self {
            Self::Json => json_value(body)?,
            Self::Xml => xml::parse_document(body)?.1,
        };
        split_error_details(&mut value);
        QueryResult::deserialize(value).map_err(DecodeError::Schema)
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            other => Err(format!("unknown response format '{other}' (expected json or xml)")),
        }
    }
}

/// Decode a full-results body. Shorthand for [`ResponseFormat::decode`].
///
/// # Errors
///
/// Returns [`DecodeError`] if the body does not match `format` or the schema.
pub fn decode(body: &[u8], format: ResponseFormat) -> Result<QueryResult, DecodeError> {
    format.decode(body)
}

/// Parse JSON and strip the `{"queryresult": ...}` envelope when present.
fn json_value(body: &[u8]) -> Result<Value, DecodeError> {
    let value: Value = serde_json::from_slice(body).map_err(DecodeError::Json)?;
    Ok(match value {
        Value::Object(mut map) if map.len() == 1 && map.contains_key(ENVELOPE) => {
            map.remove(ENVELOPE).unwrap_or_default()
        }
        other => other,
    })
}

/// Apply [`split_error_detail`] to the result and to each of its pods.
fn split_error_details(value: &mut Value) {
    split_error_detail(value);
    let Some(map) = value.as_object_mut() else {
        return;
    };
    for key in ["pod", "pods"] {
        match map.get_mut(key) {
            Some(Value::Array(pods)) => pods.iter_mut().for_each(split_error_detail),
            Some(pod @ Value::Object(_)) => split_error_detail(pod),
            _ => {}
        }
    }
}

/// Separate the `error` flag from the error element that can share its name.
///
/// JSON sends `"error": {"code": .., "msg": ..}` in place of `"error": true`;
/// XML sends an `error` attribute plus an `<error>` child, which the XML
/// normalizer collects into one array.
fn split_error_detail(value: &mut Value) {
    let Some(map) = value.as_object_mut() else {
        return;
    };
    let Some(error) = map.remove("error") else {
        return;
    };
    let (flag, detail) = match error {
        detail @ Value::Object(_) => (Value::String("true".into()), Some(detail)),
        Value::Array(items) => {
            let mut flag = Value::String("true".into());
            let mut detail = None;
            for item in items {
                if item.is_object() {
                    detail.get_or_insert(item);
                } else {
                    flag = item;
                }
            }
            (flag, detail)
        }
        flag => (flag, None),
    };
    map.insert("error".into(), flag);
    if let Some(detail) = detail {
        map.insert("errordetail".into(), detail);
    }
}
