use wa_client::{Params, ResponseFormat};
use wa_config::WaConfig;

use crate::bootstrap::{build_client, parse_setting};
use crate::cli::GlobalFlags;
use crate::cli::root_commands::QueryArgs;
use crate::output::output;

/// Handle `wa query`.
pub async fn handle(args: &QueryArgs, config: &WaConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let format = response_format(args.xml, config)?;
    let params: Params = args.params.iter().cloned().collect();

    let result = client.query_as(&args.input, format, &params).await?;
    if !result.is_success() {
        tracing::warn!(input = %args.input, "query was not understood");
    }
    output(&result, flags.format)
}

fn response_format(xml: bool, config: &WaConfig) -> anyhow::Result<ResponseFormat> {
    if xml {
        return Ok(ResponseFormat::Xml);
    }
    Ok(parse_setting("query.format", &config.query.format)?)
}
