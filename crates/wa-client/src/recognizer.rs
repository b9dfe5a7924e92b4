//! Fast query recognizer: classifies an input without computing it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{WolframClient, de, error::DecodeError, error::WolframError};

const PATH: &str = "/queryrecognizer/query.jsp";

/// Recognizer tuning: `Voice` expects spoken-style input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecognizerMode {
    #[default]
    Default,
    Voice,
}

impl RecognizerMode {
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Voice => "Voice",
        }
    }
}

impl fmt::Display for RecognizerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for RecognizerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "voice" => Ok(Self::Voice),
            other => Err(format!("unknown recognizer mode '{other}' (expected default or voice)")),
        }
    }
}

/// Recognizer response. All leaves are kept as the literal text sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerResult {
    #[serde(deserialize_with = "de::literal")]
    pub version: String,

    // The live API has shipped this key misspelled.
    #[serde(
        rename = "spellingCorrection",
        alias = "spellingCorretion",
        deserialize_with = "de::literal"
    )]
    pub spelling_correction: String,

    #[serde(rename = "buildnumber", deserialize_with = "de::literal")]
    pub build_number: String,

    #[serde(rename = "query", deserialize_with = "de::one_or_many")]
    pub queries: Vec<RecognizedQuery>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizedQuery {
    /// The input as echoed by the recognizer.
    #[serde(rename = "i", deserialize_with = "de::literal")]
    pub input: String,

    /// `"true"` when Wolfram|Alpha expects to answer this input.
    #[serde(deserialize_with = "de::literal")]
    pub accepted: String,

    #[serde(deserialize_with = "de::literal")]
    pub timing: String,

    #[serde(deserialize_with = "de::literal")]
    pub domain: String,

    #[serde(rename = "resultsignificancescore", deserialize_with = "de::literal")]
    pub result_significance_score: String,

    #[serde(rename = "summarybox", skip_serializing_if = "Option::is_none")]
    pub summary_box: Option<SummaryBox>,
}

impl RecognizedQuery {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.accepted == "true"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryBox {
    pub path: String,
}

impl RecognizerResult {
    /// Decode a recognizer JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] for malformed JSON and
    /// [`DecodeError::Schema`] when a field has the wrong shape.
    pub fn from_json(body: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(body).map_err(|err| {
            if err.is_syntax() || err.is_eof() {
                DecodeError::Json(err)
            } else {
                DecodeError::Schema(err)
            }
        })
    }
}

impl WolframClient {
    /// Ask the fast query recognizer whether `input` is answerable.
    ///
    /// # Errors
    ///
    /// Returns [`WolframError`] if the request fails, the API returns a
    /// non-success status, or the body cannot be decoded.
    pub async fn recognize(
        &self,
        input: &str,
        mode: RecognizerMode,
    ) -> Result<RecognizerResult, WolframError> {
        let url = self.recognizer_url(
            PATH,
            &[
                ("appid", self.app_id.as_str()),
                ("mode", mode.as_param()),
                ("i", input),
                ("output", "json"),
            ],
        );
        tracing::debug!(endpoint = PATH, input, %mode, "recognizing input");

        let body = self.get(&url).await?.bytes().await?;
        Ok(RecognizerResult::from_json(&body)?)
    }
}
