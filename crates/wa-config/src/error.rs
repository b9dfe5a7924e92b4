//! Errors raised while loading or interpreting `wa` settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `WOLFRAM_*` variable could not be read or has the
    /// wrong type.
    #[error("failed to load wa settings: {0}")]
    Figment(#[from] figment::Error),

    /// A section needed for the requested command is missing its required
    /// keys, e.g. `[api]` without `app_id`.
    #[error("[{section}] is not configured; set {section}.app_id or WOLFRAM_{upper}__APP_ID", upper = section.to_uppercase())]
    NotConfigured { section: String },

    /// A setting holds text the client cannot interpret, e.g.
    /// `query.units = "furlongs"`.
    #[error("bad value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
