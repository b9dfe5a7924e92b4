//! Shared HTTP response helpers.
//!
//! Every endpoint funnels its response through [`check_response`] so a
//! non-success status is surfaced as [`WolframError::Api`] with the body the
//! API sent (e.g. `Wolfram|Alpha did not understand your input`).

use crate::error::WolframError;

/// Return the response unchanged on a 2xx status, otherwise an API error
/// carrying the status code and trimmed response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, WolframError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = resp.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), %message, "api returned a non-success status");
    Err(WolframError::Api {
        status: status.as_u16(),
        message: message.trim().to_owned(),
    })
}

/// The `Content-Type` header, if present and readable.
pub fn content_type(resp: &reqwest::Response) -> Option<String> {
    resp.headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}
