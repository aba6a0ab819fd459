use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "p2g",
    about = "P2G Sync - Peloton to Garmin sync daemon",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, env = "P2G_CONFIG", default_value = "p2g.json", global = true)]
    pub config: PathBuf,

    #[arg(short, long, env = "P2G_PORT", global = true, help = "Override server.port")]
    pub port: Option<u16>,

    #[arg(short, long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Start the sync daemon (default if no command specified)")]
    Serve,

    #[command(subcommand, about = "View configuration")]
    Config(ConfigCommands),

    #[command(about = "Trigger a sync on a running daemon")]
    Sync {
        #[arg(long, conflicts_with = "ids", help = "Sync the N most recent workouts")]
        count: Option<i32>,

        #[arg(long, value_delimiter = ',', help = "Comma-separated workout ids to sync")]
        ids: Vec<String>,
    },

    #[command(about = "Show automatic sync status of a running daemon")]
    Status,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    #[command(about = "Show effective configuration")]
    Show {
        #[arg(short, long, help = "Output as JSON")]
        json: bool,
    },
}
