use serde::Serialize;
use wa_client::Units;
use wa_config::WaConfig;

use crate::bootstrap::{build_client, parse_setting};
use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnswerArgs;
use crate::output::{TextView, output};

#[derive(Clone, Copy, Debug)]
pub enum Kind {
    Short,
    Spoken,
}

#[derive(Debug, Serialize)]
struct Answer {
    input: String,
    units: Units,
    answer: String,
}

impl TextView for Answer {
    fn to_text(&self) -> String {
        self.answer.clone()
    }
}

/// Handle `wa short` and `wa spoken`.
pub async fn handle(
    kind: Kind,
    args: &AnswerArgs,
    config: &WaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client = build_client(config)?;
    let units = resolve_units(args.units.as_deref(), config)?;
    let timeout = args.timeout.or_else(|| config.query.timeout_secs());

    let answer = match kind {
        Kind::Short => client.short_answer(&args.input, units, timeout).await?,
        Kind::Spoken => client.spoken_answer(&args.input, units, timeout).await?,
    };

    output(
        &Answer {
            input: args.input.clone(),
            units,
            answer,
        },
        flags.format,
    )
}

fn resolve_units(flag: Option<&str>, config: &WaConfig) -> anyhow::Result<Units> {
    match flag {
        Some(raw) => Ok(parse_setting("--units", raw)?),
        None => Ok(parse_setting("query.units", &config.query.units)?),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wa_client::Units;
    use wa_config::WaConfig;

    use super::{Answer, resolve_units};
    use crate::cli::OutputFormat;
    use crate::output::render;

    #[test]
    fn units_flag_wins_over_config() {
        let mut config = WaConfig::default();
        config.query.units = "imperial".into();

        assert_eq!(resolve_units(None, &config).unwrap(), Units::Imperial);
        assert_eq!(resolve_units(Some("metric"), &config).unwrap(), Units::Metric);
        assert!(resolve_units(Some("furlongs"), &config).is_err());
    }

    #[test]
    fn answer_renders_plain_in_text_mode() {
        let answer = Answer {
            input: "mass of the sun".into(),
            units: Units::Metric,
            answer: "1.988 × 10^30 kilograms".into(),
        };

        let text = render(&answer, OutputFormat::Text).unwrap();
        assert_eq!(text, "1.988 × 10^30 kilograms");

        let raw = render(&answer, OutputFormat::Raw).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["units"], "metric");
        assert_eq!(value["input"], "mass of the sun");
    }
}
