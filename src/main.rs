//! Unbeatable Tic-Tac-Toe - terminal client
//!
//! Play against the minimax opponent, or inspect how it scores a position.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, DEFAULT_CONFIG_PATH};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::{
    Board, GameEngine, OutputFormat, PlayConfig, SearchStrategy, rules, score_moves, terminal,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config)?;

    match cli.command {
        Command::Play { strategy, json } => run_play(config, strategy, json),
        Command::Analyze { board, strategy } => {
            run_analyze(&board, strategy.unwrap_or(*config.strategy()))
        }
    }
}

/// Loads the config named on the command line, or the default file if present.
#[instrument]
fn load_config(path: Option<PathBuf>) -> Result<PlayConfig> {
    let config = match path {
        Some(path) => PlayConfig::from_file(&path)?,
        None => PlayConfig::from_file_or_default(DEFAULT_CONFIG_PATH)?,
    };
    Ok(config)
}

/// Runs an interactive game on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: PlayConfig, strategy: Option<SearchStrategy>, json: bool) -> Result<()> {
    let config = match strategy {
        Some(strategy) => config.with_strategy(strategy),
        None => config,
    };
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    info!(strategy = %config.strategy(), ?format, "Starting game");

    let mut engine = GameEngine::with_strategy(*config.strategy());
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    terminal::run(&mut engine, &config, format, stdin.lock(), &mut stdout)?;
    writeln!(stdout)?;
    Ok(())
}

/// Prints the scores of every opponent move on `board`.
#[instrument]
fn run_analyze(board: &str, strategy: SearchStrategy) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    let outcome = rules::evaluate(&board);

    println!("{}\n", board.render('X', 'O'));
    if let Some(verdict) = outcome.verdict() {
        println!("Game over: {verdict}");
        return Ok(());
    }

    for (index, score) in score_moves(&board) {
        println!("{index}: {score:+}");
    }
    if let Some(choice) = strategy.select(&board) {
        println!("{strategy} search plays {choice}");
    }
    Ok(())
}
