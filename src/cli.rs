//! Command-line interface for unbeatable_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unbeatable_tictactoe::SearchStrategy;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Unbeatable Tic-Tac-Toe - play against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "unbeatable_tictactoe")]
#[command(about = "Tic-tac-toe against an opponent that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML play config (defaults apply if tictactoe.toml is absent)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Search used by the opponent (exhaustive or alpha-beta)
        #[arg(long)]
        strategy: Option<SearchStrategy>,

        /// Print one JSON snapshot per line instead of the grid
        #[arg(long)]
        json: bool,
    },

    /// Show the opponent's score for every empty cell of a board
    Analyze {
        /// Board as nine cells of X, O or '.', rows optionally split by '/'
        board: String,

        /// Search used to pick the move (exhaustive or alpha-beta)
        #[arg(long)]
        strategy: Option<SearchStrategy>,
    },
}
