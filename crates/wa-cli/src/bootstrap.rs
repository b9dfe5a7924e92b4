use std::str::FromStr;

use anyhow::Context;
use wa_client::WolframClient;
use wa_config::{ConfigError, WaConfig};

/// Load `.env` plus the layered config.
pub fn load_config() -> anyhow::Result<WaConfig> {
    WaConfig::load_with_dotenv().context("failed to load configuration")
}

/// Build a client from the `[api]` section.
pub fn build_client(config: &WaConfig) -> anyhow::Result<WolframClient> {
    let api = config
        .require_api()
        .context("no Wolfram|Alpha app id (api.app_id in .wolfram/config.toml)")?;

    WolframClient::builder(api.app_id.clone())
        .api_base(api.base_url.clone())
        .recognizer_base(api.recognizer_url.clone())
        .user_agent(api.user_agent.clone())
        .build()
        .context("failed to build Wolfram|Alpha client")
}

/// Parse a string-typed config value, naming the field on failure.
pub fn parse_setting<T>(field: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = String>,
{
    value.parse().map_err(|reason| ConfigError::InvalidValue {
        field: field.to_string(),
        reason,
    })
}
