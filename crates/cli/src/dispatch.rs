//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).

use anyhow::Result;
use pushover_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Alert { execute } => {
            commands::alert::run(config, execute).await?;
        }
        Commands::Send {
            account,
            message,
            title,
            url,
            url_title,
            priority,
            sound,
        } => {
            commands::send::run(
                config,
                account,
                message,
                title,
                url,
                url_title,
                priority,
                sound,
                &cli.output,
            )
            .await?;
        }
        Commands::Limits { account } => {
            commands::limits::run(config, &account, &cli.output).await?;
        }
    }

    Ok(())
}
