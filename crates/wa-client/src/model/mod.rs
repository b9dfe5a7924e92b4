//! The full-results schema.
//!
//! One set of types serves both output formats. Field names follow the API's
//! wire names, so the serialized form of a [`QueryResult`] reads like the
//! JSON the API itself returns.

mod notes;
mod pod;

pub use notes::{
    Alternative, Assumption, AssumptionValue, Assumptions, Delimiters, Generalization,
    ReInterpretation, Source, Sources, Spellcheck, Translation, Warnings,
};
pub use pod::{Img, Info, Infos, Link, Pod, Sound, Sounds, State, States, SubPod};

use serde::{Deserialize, Serialize};

use crate::de;

/// Outcome of one full-results query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryResult {
    /// The input text as the caller supplied it. Filled in by the client,
    /// never read from the response.
    #[serde(skip_deserializing)]
    pub query: String,

    #[serde(rename = "pod", alias = "pods", deserialize_with = "de::one_or_many")]
    pub pods: Vec<Pod>,

    #[serde(deserialize_with = "de::group")]
    pub warnings: Warnings,

    #[serde(deserialize_with = "de::group")]
    pub assumptions: Assumptions,

    #[serde(deserialize_with = "de::group")]
    pub sources: Sources,

    #[serde(rename = "generalization", deserialize_with = "de::one_or_many")]
    pub generalizations: Vec<Generalization>,

    /// `"true"` when the input was understood. Kept as sent.
    #[serde(deserialize_with = "de::literal")]
    pub success: String,

    /// `"true"` when a serious processing error occurred. Kept as sent.
    #[serde(deserialize_with = "de::literal")]
    pub error: String,

    /// Code and message that accompany `error == "true"`.
    #[serde(rename = "errordetail", skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<ErrorDetail>,

    #[serde(rename = "numpods", deserialize_with = "de::number")]
    pub num_pods: u32,

    #[serde(rename = "datatypes", deserialize_with = "de::literal")]
    pub data_types: String,

    /// Pods that were dropped because they timed out.
    #[serde(rename = "timedout", deserialize_with = "de::literal")]
    pub timed_out: String,

    /// Wall-clock seconds spent producing the output.
    #[serde(deserialize_with = "de::number")]
    pub timing: f64,

    /// Seconds spent in the parsing phase.
    #[serde(rename = "parsetiming", deserialize_with = "de::number")]
    pub parse_timing: f64,

    #[serde(rename = "parsetimedout", deserialize_with = "de::literal")]
    pub parse_timed_out: String,

    /// URL that recomputes the query to fetch more pods.
    #[serde(deserialize_with = "de::literal")]
    pub recalculate: String,

    // Undocumented upstream; carried through untouched.
    #[serde(deserialize_with = "de::literal")]
    pub id: String,
    #[serde(deserialize_with = "de::literal")]
    pub host: String,
    #[serde(deserialize_with = "de::literal")]
    pub server: String,
    #[serde(deserialize_with = "de::literal")]
    pub related: String,

    #[serde(deserialize_with = "de::literal")]
    pub version: String,
}

/// The `<error>` element reported alongside `error="true"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorDetail {
    #[serde(deserialize_with = "de::literal")]
    pub code: String,
    #[serde(rename = "msg", deserialize_with = "de::literal")]
    pub message: String,
}

impl QueryResult {
    /// Whether the API understood the input.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success == "true"
    }

    /// Whether the API reported a processing error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error == "true"
    }

    /// The first pod with the given title.
    #[must_use]
    pub fn pod(&self, title: &str) -> Option<&Pod> {
        self.pods.iter().find(|pod| pod.title == title)
    }

    /// The pod flagged as primary, if any.
    #[must_use]
    pub fn primary_pod(&self) -> Option<&Pod> {
        self.pods.iter().find(|pod| pod.primary)
    }
}
