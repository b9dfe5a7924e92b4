use serde::Serialize;
use wa_config::WaConfig;

use crate::cli::GlobalFlags;
use crate::output::{TextView, output};

/// Effective configuration with the app id masked.
#[derive(Debug, Serialize)]
struct ConfigView {
    #[serde(flatten)]
    config: WaConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    global_path: Option<String>,
}

impl ConfigView {
    fn new(config: &WaConfig) -> Self {
        let mut config = config.clone();
        config.api.app_id = config.api.redacted_app_id();
        Self {
            config,
            global_path: WaConfig::global_config_path().map(|path| path.display().to_string()),
        }
    }
}

impl TextView for ConfigView {
    fn to_text(&self) -> String {
        toml::to_string_pretty(&self.config)
            .unwrap_or_else(|error| format!("<unprintable config: {error}>"))
            .trim_end()
            .to_string()
    }
}

/// Handle `wa config`.
pub fn handle(config: &WaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ConfigView::new(config), flags.format)
}
