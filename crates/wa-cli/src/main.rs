use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("wa error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(&flags)?;

    let config = bootstrap::load_config()?;

    commands::dispatch(cli.command, &config, &flags).await
}

/// Default log level when `WOLFRAM_LOG` is unset. `--quiet` wins over `--verbose`.
const fn log_level(flags: &cli::GlobalFlags) -> &'static str {
    if flags.quiet {
        "error"
    } else if flags.verbose {
        "debug"
    } else {
        "warn"
    }
}

fn init_tracing(flags: &cli::GlobalFlags) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("WOLFRAM_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(flags)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::log_level;
    use crate::cli::{GlobalFlags, OutputFormat};

    fn flags(quiet: bool, verbose: bool) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet,
            verbose,
        }
    }

    #[test]
    fn log_level_follows_flags() {
        assert_eq!(log_level(&flags(false, false)), "warn");
        assert_eq!(log_level(&flags(false, true)), "debug");
        assert_eq!(log_level(&flags(true, false)), "error");
        assert_eq!(log_level(&flags(true, true)), "error");
    }
}
