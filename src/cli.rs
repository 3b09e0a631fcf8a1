//! Command-line interface for the tic-tac-toe window.

use std::path::PathBuf;

use clap::Parser;

/// Two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name shown for the first player (overrides config)
    #[arg(long)]
    pub player_one: Option<String>,

    /// Name shown for the second player (overrides config)
    #[arg(long)]
    pub player_two: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
