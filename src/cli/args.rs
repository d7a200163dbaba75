use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "casetally", version, about = "Case ledger aggregation engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Config file (defaults to ./casetally.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate an input bundle and print the result
    Tally {
        /// JSON input bundle
        #[arg(long, short, value_name = "FILE")]
        input: PathBuf,
        /// Override the bundle's last-updated stamp
        #[arg(long)]
        updated: Option<String>,
        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<String>,
        /// Pretty-print the JSON result
        #[arg(long)]
        pretty: bool,
        /// Print a console summary instead of JSON
        #[arg(long)]
        summary: bool,
    },
    /// Aggregate an input bundle and report verification findings only
    Verify {
        #[arg(long, short, value_name = "FILE")]
        input: PathBuf,
        #[arg(long)]
        today: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration
    Config,
}

/// Arguments for the tally command (used by handlers)
#[derive(Debug, Clone, Default)]
pub struct TallyArgs {
    pub input: PathBuf,
    pub updated: Option<String>,
    pub today: Option<String>,
    pub pretty: bool,
    pub summary: bool,
}
