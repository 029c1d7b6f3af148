//! Command-line interface for the tic-tac-toe GUI.

use clap::Parser;
use tictactoe::config::{GameConfig, DEFAULT_RESTART_DELAY_MS};

/// Tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Milliseconds the result stays on screen before a new game starts
    #[arg(long, default_value_t = DEFAULT_RESTART_DELAY_MS)]
    pub restart_delay_ms: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log: String,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig::with_restart_delay_ms(self.restart_delay_ms)
    }
}
