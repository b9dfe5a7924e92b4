//! Per-query defaults.
//!
//! Kept as plain strings; the CLI parses them into client types and reports
//! bad values as [`crate::ConfigError::InvalidValue`].

use serde::{Deserialize, Serialize};

fn default_format() -> String {
    String::from("json")
}

fn default_units() -> String {
    String::from("metric")
}

fn default_mode() -> String {
    String::from("default")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Full-results output format: `json` or `xml`.
    #[serde(default = "default_format")]
    pub format: String,

    /// Units for short/spoken answers: `metric` or `imperial`.
    #[serde(default = "default_units")]
    pub units: String,

    /// Server-side timeout in seconds for short/spoken answers. 0 leaves it unset.
    #[serde(default)]
    pub timeout: u32,

    /// Query recognizer mode: `default` or `voice`.
    #[serde(default = "default_mode")]
    pub mode: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            units: default_units(),
            timeout: 0,
            mode: default_mode(),
        }
    }
}

impl QueryConfig {
    /// The timeout to forward, if any.
    #[must_use]
    pub const fn timeout_secs(&self) -> Option<u32> {
        if self.timeout == 0 {
            None
        } else {
            Some(self.timeout)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = QueryConfig::default();
        assert_eq!(config.format, "json");
        assert_eq!(config.units, "metric");
        assert_eq!(config.mode, "default");
        assert_eq!(config.timeout_secs(), None);
    }

    #[test]
    fn nonzero_timeout_is_forwarded() {
        let config = QueryConfig {
            timeout: 8,
            ..Default::default()
        };
        assert_eq!(config.timeout_secs(), Some(8));
    }
}
