use wa_config::WaConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &WaConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Query(args) => commands::query::handle(&args, config, flags).await,
        Commands::Simple(args) => commands::simple::handle(&args, config, flags).await,
        Commands::Short(args) => {
            commands::answer::handle(commands::answer::Kind::Short, &args, config, flags).await
        }
        Commands::Spoken(args) => {
            commands::answer::handle(commands::answer::Kind::Spoken, &args, config, flags).await
        }
        Commands::Recognize(args) => commands::recognize::handle(&args, config, flags).await,
        Commands::Config => commands::config::handle(config, flags),
    }
}
