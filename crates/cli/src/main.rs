use anyhow::Result;
use clap::Parser;

use next_plugin::cli::{CacheCommands, Cli, Commands};
use next_plugin::commands;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Scan {
            workspace_root,
            options,
            cache_dir,
            pretty,
        } => commands::scan::scan_command(workspace_root, options.as_deref(), cache_dir, pretty)
            .await,
        Commands::Targets {
            config_path,
            workspace_root,
            options,
            pretty,
        } => {
            commands::targets::targets_command(
                config_path,
                workspace_root,
                options.as_deref(),
                pretty,
            )
            .await
        }
        Commands::Cache { command } => match command {
            CacheCommands::Clear {
                workspace_root,
                cache_dir,
            } => commands::cache::clear_command(workspace_root, cache_dir),
        },
    }
}
