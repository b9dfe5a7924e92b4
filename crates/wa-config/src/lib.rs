//! # wa-config
//!
//! Layered configuration loading for the `wa` client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WOLFRAM_*` prefix, `__` as separator)
//! 2. Project-level `.wolfram/config.toml`
//! 3. User-level `~/.config/wolfram/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WOLFRAM_API__APP_ID` -> `api.app_id`,
//! `WOLFRAM_QUERY__UNITS` -> `query.units`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use wa_config::WaConfig;
//!
//! let config = WaConfig::load_with_dotenv().expect("config");
//! let api = config.require_api().expect("app id configured");
//! println!("querying {}", api.base_url);
//! ```

mod api;
mod error;
mod query;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use query::QueryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "WOLFRAM_";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG: &str = ".wolfram/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl WaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be read or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (or the nearest parent that
    /// has one) before building the figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wolfram").join("config.toml"))
    }

    /// The API section, or [`ConfigError::NotConfigured`] without an app id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `api.app_id` is empty.
    pub fn require_api(&self) -> Result<&ApiConfig, ConfigError> {
        if self.api.is_configured() {
            Ok(&self.api)
        } else {
            Err(ConfigError::NotConfigured {
                section: "api".into(),
            })
        }
    }
}
