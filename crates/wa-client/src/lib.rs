//! # wa-client
//!
//! Typed client for the Wolfram|Alpha web APIs:
//! - full results (`/v2/query`), decoded from JSON or XML into [`QueryResult`]
//! - simple (`/v1/simple`), a rendered image of the result pods
//! - short answer (`/v1/result`) and spoken answer (`/v1/spoken`)
//! - fast query recognizer (`/queryrecognizer/query.jsp`)
//!
//! Every call is a single GET. Nothing is retried or cached; failures come
//! back as [`WolframError`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), wa_client::WolframError> {
//! use wa_client::{Params, WolframClient};
//!
//! let client = WolframClient::new("DEMO-APPID")?;
//! let result = client.query("population of France", &Params::new()).await?;
//! for pod in &result.pods {
//!     println!("{}: {:?}", pod.title, pod.plaintexts().collect::<Vec<_>>());
//! }
//! # Ok(())
//! # }
//! ```

pub mod answer;
mod de;
pub mod format;
pub mod model;
pub mod query;
pub mod recognizer;
pub mod simple;

mod error;
mod http;
mod url;
mod xml;

pub use answer::Units;
pub use error::{DecodeError, WolframError};
pub use format::{ResponseFormat, decode};
pub use model::{ErrorDetail, Pod, QueryResult, SubPod};
pub use recognizer::{RecognizerMode, RecognizerResult};
pub use simple::SimpleImage;
pub use url::Params;

use crate::http::check_response;

/// Host serving the v1/v2 APIs.
pub const DEFAULT_API_BASE: &str = "https://api.wolframalpha.com";

/// Host serving the fast query recognizer.
pub const DEFAULT_RECOGNIZER_BASE: &str = "https://www.wolframalpha.com";

const DEFAULT_USER_AGENT: &str = concat!("wa-client/", env!("CARGO_PKG_VERSION"));

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client bound to one app id.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct WolframClient {
    http: reqwest::Client,
    app_id: String,
    api_base: String,
    recognizer_base: String,
}

impl WolframClient {
    /// Create a client for the public endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`WolframError::InvalidConfig`] if `app_id` is blank, or
    /// [`WolframError::Http`] if the HTTP client cannot be built.
    pub fn new(app_id: impl Into<String>) -> Result<Self, WolframError> {
        Self::builder(app_id).build()
    }

    /// Start configuring a client.
    #[must_use]
    pub fn builder(app_id: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(app_id)
    }

    /// Base URL used for the v1/v2 endpoints.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn api_url(&self, path: &str, fixed: &[(&str, &str)], extra: &Params) -> String {
        url::build(&self.api_base, path, fixed, extra)
    }

    fn recognizer_url(&self, path: &str, fixed: &[(&str, &str)]) -> String {
        url::build(&self.recognizer_base, path, fixed, &Params::new())
    }

    /// Send one GET and reject non-success statuses.
    async fn get(&self, url: &str) -> Result<reqwest::Response, WolframError> {
        check_response(self.http.get(url).send().await?).await
    }
}

/// Builder for [`WolframClient`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    app_id: String,
    api_base: String,
    recognizer_base: String,
    user_agent: String,
}

impl ClientBuilder {
    #[must_use]
    pub fn new(app_id: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            api_base: DEFAULT_API_BASE.to_owned(),
            recognizer_base: DEFAULT_RECOGNIZER_BASE.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the v1/v2 host, e.g. to point at a local test server.
    #[must_use]
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Override the query recognizer host.
    #[must_use]
    pub fn recognizer_base(mut self, base: impl Into<String>) -> Self {
        self.recognizer_base = base.into();
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`WolframError::InvalidConfig`] if the app id or a base URL
    /// is blank, or [`WolframError::Http`] if the HTTP client cannot be built.
    pub fn build(self) -> Result<WolframClient, WolframError> {
        if self.app_id.trim().is_empty() {
            return Err(WolframError::InvalidConfig("app id is empty".into()));
        }
        if self.api_base.trim().is_empty() || self.recognizer_base.trim().is_empty() {
            return Err(WolframError::InvalidConfig("base URL is empty".into()));
        }
        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .build()?;
        Ok(WolframClient {
            http,
            app_id: self.app_id,
            api_base: self.api_base,
            recognizer_base: self.recognizer_base,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_app_id_is_rejected() {
        let err = WolframClient::new("  ").err().expect("blank app id");
        assert!(matches!(err, WolframError::InvalidConfig(_)));
    }

    #[test]
    fn builder_overrides_bases() {
        let client = WolframClient::builder("APPID")
            .api_base("http://127.0.0.1:9000")
            .recognizer_base("http://127.0.0.1:9001")
            .user_agent("test/1.0")
            .build()
            .unwrap();
        assert_eq!(client.api_base(), "http://127.0.0.1:9000");
        assert_eq!(
            client.recognizer_url("/queryrecognizer/query.jsp", &[("i", "pi")]),
            "http://127.0.0.1:9001/queryrecognizer/query.jsp?i=pi"
        );
    }

    #[test]
    fn defaults_target_public_hosts() {
        let client = WolframClient::new("APPID").unwrap();
        assert_eq!(client.api_base(), DEFAULT_API_BASE);
        assert_eq!(
            client.api_url("/v1/result", &[("i", "1+1")], &Params::new()),
            "https://api.wolframalpha.com/v1/result?i=1%2B1"
        );
    }

    #[test]
    fn client_is_shareable_across_tasks() {
        fn assert_shareable<T: Clone + Send + Sync + 'static>() {}
        assert_shareable::<WolframClient>();
    }
}
