//! API credentials and endpoints.

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    String::from("https://api.wolframalpha.com")
}

fn default_recognizer_url() -> String {
    String::from("https://www.wolframalpha.com")
}

fn default_user_agent() -> String {
    format!("wa/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Wolfram|Alpha app id, from <https://developer.wolframalpha.com/>.
    #[serde(default)]
    pub app_id: String,

    /// Host for the v1/v2 endpoints.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Host for the fast query recognizer.
    #[serde(default = "default_recognizer_url")]
    pub recognizer_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            base_url: default_base_url(),
            recognizer_url: default_recognizer_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// An app id is the only required field.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.app_id.trim().is_empty()
    }

    /// The app id with all but the last four characters masked.
    #[must_use]
    pub fn redacted_app_id(&self) -> String {
        let chars: Vec<char> = self.app_id.chars().collect();
        let visible = chars.len().saturating_sub(4);
        chars
            .iter()
            .enumerate()
            .map(|(i, c)| if i < visible { '*' } else { *c })
            .collect()
    }
}
