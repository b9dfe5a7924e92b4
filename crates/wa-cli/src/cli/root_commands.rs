use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Full results query: every pod the API computes for the input.
    Query(QueryArgs),
    /// Save the rendered result image from the simple API.
    Simple(SimpleArgs),
    /// One-line textual answer.
    Short(AnswerArgs),
    /// Answer phrased as a sentence for speech.
    Spoken(AnswerArgs),
    /// Check whether an input is answerable without computing it.
    Recognize(RecognizeArgs),
    /// Show the effective configuration.
    Config,
}

#[derive(Clone, Debug, Args)]
pub struct QueryArgs {
    /// Free-text input, e.g. "population of France".
    pub input: String,

    /// Request XML instead of JSON from the API (overrides query.format).
    #[arg(long)]
    pub xml: bool,

    /// Extra API parameter as key=value (repeatable).
    #[arg(short = 'P', long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

#[derive(Clone, Debug, Args)]
pub struct SimpleArgs {
    pub input: String,

    /// File to write the image to.
    #[arg(short, long)]
    pub out: PathBuf,

    /// Extra API parameter as key=value (repeatable).
    #[arg(short = 'P', long = "param", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,
}

#[derive(Clone, Debug, Args)]
pub struct AnswerArgs {
    pub input: String,

    /// metric or imperial (overrides query.units).
    #[arg(long)]
    pub units: Option<String>,

    /// Server-side timeout in seconds (overrides query.timeout).
    #[arg(long)]
    pub timeout: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct RecognizeArgs {
    pub input: String,

    /// default or voice (overrides query.mode).
    #[arg(long)]
    pub mode: Option<String>,
}

/// Parse `key=value`. The value may itself contain `=`.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty parameter name in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
