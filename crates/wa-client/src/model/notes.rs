//! Auxiliary result metadata: warnings, assumptions, sources, generalizations.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::de;

/// Notices about how the input was interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Warnings {
    #[serde(deserialize_with = "de::number")]
    pub count: u32,

    /// Spelling corrections.
    #[serde(rename = "spellcheck", deserialize_with = "de::one_or_many")]
    pub spellchecks: Vec<Spellcheck>,

    /// Mismatched delimiters the API repaired, e.g. `sin(x`.
    #[serde(deserialize_with = "de::one_or_many")]
    pub delimiters: Vec<Delimiters>,

    /// Inputs translated into English before evaluation.
    #[serde(rename = "translation", deserialize_with = "de::one_or_many")]
    pub translations: Vec<Translation>,

    /// Inputs rewritten into a nearby query the API understands.
    #[serde(rename = "reinterpret", deserialize_with = "de::one_or_many")]
    pub reinterpretations: Vec<ReInterpretation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spellcheck {
    #[serde(deserialize_with = "de::literal")]
    pub word: String,
    #[serde(deserialize_with = "de::literal")]
    pub suggestion: String,
    #[serde(deserialize_with = "de::literal")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delimiters {
    #[serde(deserialize_with = "de::literal")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    #[serde(deserialize_with = "de::literal")]
    pub phrase: String,
    #[serde(rename = "trans", deserialize_with = "de::literal")]
    pub translation: String,
    #[serde(rename = "lang", deserialize_with = "de::literal")]
    pub language: String,
    #[serde(deserialize_with = "de::literal")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReInterpretation {
    #[serde(deserialize_with = "de::literal")]
    pub text: String,
    #[serde(deserialize_with = "de::literal")]
    pub new: String,
    #[serde(rename = "alternative", deserialize_with = "de::one_or_many")]
    pub alternatives: Vec<Alternative>,
}

/// One suggested alternative input. The XML form carries the input as
/// element text; the JSON form may send a bare string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AlternativeRepr")]
pub struct Alternative {
    pub level: String,
    pub value: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AlternativeRepr {
    Plain(String),
    Tagged {
        #[serde(default, deserialize_with = "de::literal")]
        level: String,
        #[serde(
            default,
            rename = "$text",
            alias = "val",
            alias = "value",
            deserialize_with = "de::literal"
        )]
        value: String,
    },
}

impl From<AlternativeRepr> for Alternative {
    fn from(repr: AlternativeRepr) -> Self {
        match repr {
            AlternativeRepr::Plain(value) => Self {
                level: String::new(),
                value,
            },
            AlternativeRepr::Tagged { level, value } => Self { level, value },
        }
    }
}

/// Disambiguation choices made while parsing the input.
///
/// Accepts the counted `{"count", "assumption"}` wrapper, a single bare
/// assumption, or an array of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Assumptions {
    pub count: u32,
    #[serde(rename = "assumption")]
    pub assumptions: Vec<Assumption>,
}

impl TryFrom<Value> for Assumptions {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let (count, assumptions) = de::counted(value, "assumption")?;
        Ok(Self { count, assumptions })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumption {
    #[serde(rename = "type", deserialize_with = "de::literal")]
    pub kind: String,
    #[serde(deserialize_with = "de::literal")]
    pub word: String,
    #[serde(deserialize_with = "de::literal")]
    pub template: String,
    #[serde(deserialize_with = "de::number")]
    pub count: u32,
    #[serde(rename = "value", alias = "values", deserialize_with = "de::one_or_many")]
    pub values: Vec<AssumptionValue>,
}

/// One candidate interpretation within an [`Assumption`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssumptionValue {
    #[serde(deserialize_with = "de::literal")]
    pub name: String,
    #[serde(deserialize_with = "de::literal")]
    pub word: String,
    #[serde(rename = "desc", deserialize_with = "de::literal")]
    pub description: String,
    /// Parameter to pass back as `assumption=` to select this value.
    #[serde(deserialize_with = "de::literal")]
    pub input: String,
}

/// Links to the web pages the data came from. Same shapes as [`Assumptions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Sources {
    pub count: u32,
    #[serde(rename = "source")]
    pub sources: Vec<Source>,
}

impl TryFrom<Value> for Sources {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let (count, sources) = de::counted(value, "source")?;
        Ok(Self { count, sources })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    #[serde(deserialize_with = "de::literal")]
    pub url: String,
    #[serde(deserialize_with = "de::literal")]
    pub text: String,
}

/// A broader query offered alongside the answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Generalization {
    #[serde(deserialize_with = "de::literal")]
    pub topic: String,
    #[serde(rename = "desc", deserialize_with = "de::literal")]
    pub description: String,
    #[serde(deserialize_with = "de::literal")]
    pub url: String,
}
