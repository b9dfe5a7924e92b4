use wa_client::RecognizerMode;
use wa_config::WaConfig;

use crate::bootstrap::{build_client, parse_setting};
use crate::cli::GlobalFlags;
use crate::cli::root_commands::RecognizeArgs;
use crate::output::output;

/// Handle `wa recognize`.
pub async fn handle(
    args: &RecognizeArgs,
    config: &WaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let mode: RecognizerMode = match args.mode.as_deref() {
        Some(raw) => parse_setting("--mode", raw)?,
        None => parse_setting("query.mode", &config.query.mode)?,
    };

    let result = client.recognize(&args.input, mode).await?;
    output(&result, flags.format)
}
