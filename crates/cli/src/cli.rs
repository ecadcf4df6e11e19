use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Infer Next.js project targets for a monorepo build graph
#[derive(Parser)]
#[command(name = "next-plugin")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a workspace and print the inferred project-graph fragment
    Scan {
        /// Workspace root (defaults to the current directory)
        #[arg(long = "workspace-root")]
        workspace_root: Option<PathBuf>,

        /// Plugin options as JSON, e.g. '{"buildTargetName": "compile"}'
        #[arg(short = 'o', long = "options")]
        options: Option<String>,

        /// Cache directory (defaults to .next-plugin under the workspace root)
        #[arg(long = "cache-dir")]
        cache_dir: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(short = 'p', long = "pretty")]
        pretty: bool,
    },
    /// Print the inferred targets for a single configuration file
    Targets {
        /// Path to a next.config file, relative to the workspace root
        config_path: PathBuf,

        /// Workspace root (defaults to the current directory)
        #[arg(long = "workspace-root")]
        workspace_root: Option<PathBuf>,

        /// Plugin options as JSON
        #[arg(short = 'o', long = "options")]
        options: Option<String>,

        /// Pretty-print the JSON output
        #[arg(short = 'p', long = "pretty")]
        pretty: bool,
    },
    /// Manage the persisted targets cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Remove the cache snapshot file
    Clear {
        /// Workspace root (defaults to the current directory)
        #[arg(long = "workspace-root")]
        workspace_root: Option<PathBuf>,

        /// Cache directory (defaults to .next-plugin under the workspace root)
        #[arg(long = "cache-dir")]
        cache_dir: Option<PathBuf>,
    },
}
