//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Minimax - tic-tac-toe against an alpha-beta search
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Play tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(long, global = true, default_value = "strictly_minimax.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine in the terminal
    Play {
        /// Plies the engine looks ahead
        #[arg(short, long)]
        depth: Option<u8>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the engine's move for a position
    BestMove {
        /// Nine cells of X, O and . (or space), row by row; '/' between rows is allowed
        board: String,

        /// Plies the engine looks ahead
        #[arg(short, long)]
        depth: Option<u8>,

        /// Side to move (X or O); inferred from the mark counts if omitted
        #[arg(long)]
        side: Option<char>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play itself, alternating the first mover
    SelfPlay {
        /// Number of games
        #[arg(short, long, default_value = "2")]
        games: usize,

        /// Plies each side looks ahead
        #[arg(short, long)]
        depth: Option<u8>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
