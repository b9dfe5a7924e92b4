//! Client error types.

use thiserror::Error;

/// Errors returned by [`crate::WolframClient`] operations.
#[derive(Debug, Error)]
pub enum WolframError {
    /// HTTP transport error (connection, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Response body, usually a short plain-text explanation.
        message: String,
    },

    /// The response body could not be mapped onto the result schema.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The client was built with unusable settings.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl WolframError {
    /// Whether the request itself failed, as opposed to its body.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. })
    }
}

// Request URLs carry the app id, so they are dropped from transport errors.
impl From<reqwest::Error> for WolframError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.without_url())
    }
}

/// A response body that does not conform to the declared format or schema.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The body is not well-formed XML.
    #[error("malformed XML at byte {position}: {message}")]
    Xml {
        /// Reader offset where the problem was detected.
        position: u64,
        /// Parser message.
        message: String,
    },

    /// The markup parsed but a field has the wrong shape or type.
    #[error("unexpected response shape: {0}")]
    Schema(#[source] serde_json::Error),
}

impl DecodeError {
    pub(crate) fn xml<P, M>(position: P, message: M) -> Self
    where
        u64: TryFrom<P>,
        M: std::fmt::Display,
    {
        Self::Xml {
            position: u64::try_from(position).unwrap_or(u64::MAX),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_count_as_transport() {
        let err = WolframError::Api {
            status: 501,
            message: "No short answer available".into(),
        };
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "API error (501): No short answer available");
    }

    #[test]
    fn decode_errors_are_not_transport() {
        let err = WolframError::from(DecodeError::xml(12_usize, "unexpected end"));
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "decode error: malformed XML at byte 12: unexpected end"
        );
    }
}
