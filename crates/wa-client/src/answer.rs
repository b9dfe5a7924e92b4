//! Short answer (`/v1/result`) and spoken answer (`/v1/spoken`) APIs.
//!
//! Both return a single line of plain text. When the API has no short
//! answer it responds with 501 and an explanation in the body, which
//! surfaces as [`WolframError::Api`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Params, WolframClient, error::WolframError};

const SHORT_PATH: &str = "/v1/result";
const SPOKEN_PATH: &str = "/v1/spoken";

/// Measurement system for answers containing quantities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

impl FromStr for Units {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            other => Err(format!("unknown units '{other}' (expected metric or imperial)")),
        }
    }
}

impl WolframClient {
    /// Ask for a short textual answer, e.g. `"1.99 × 10^30 kilograms"`.
    ///
    /// `timeout` is forwarded to the API in seconds; `None` or zero leaves
    /// the server default in place.
    ///
    /// # Errors
    ///
    /// Returns [`WolframError`] if the request fails or the API has no
    /// short answer for the input.
    pub async fn short_answer(
        &self,
        input: &str,
        units: Units,
        timeout: Option<u32>,
    ) -> Result<String, WolframError> {
        self.answer(SHORT_PATH, input, units, timeout).await
    }

    /// Ask for an answer phrased as a full sentence, suitable for speech.
    ///
    /// # Errors
    ///
    /// Returns [`WolframError`] if the request fails or the API has no
    /// spoken answer for the input.
    pub async fn spoken_answer(
        &self,
        input: &str,
        units: Units,
        timeout: Option<u32>,
    ) -> Result<String, WolframError> {
        self.answer(SPOKEN_PATH, input, units, timeout).await
    }

    async fn answer(
        &self,
        path: &str,
        input: &str,
        units: Units,
        timeout: Option<u32>,
    ) -> Result<String, WolframError> {
        let timeout = timeout.filter(|secs| *secs > 0).map(|secs| secs.to_string());
        let mut fixed = vec![
            ("appid", self.app_id.as_str()),
            ("i", input),
            ("units", units.as_param()),
        ];
        if let Some(secs) = &timeout {
            fixed.push(("timeout", secs.as_str()));
        }
        let url = self.api_url(path, &fixed, &Params::new());

        tracing::debug!(endpoint = path, input, %units, ?timeout, "requesting answer");
        Ok(self.get(&url).await?.text().await?)
    }
}
