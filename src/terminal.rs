//! Line-oriented terminal client.
//!
//! Reads one command per line, feeds moves to the [`GameEngine`] and writes
//! the board after every change. Generic over reader and writer so the whole
//! loop runs against in-memory buffers in tests.

use crate::games::tictactoe::{Cell, GameEngine, Position, Snapshot, score_moves};
use crate::play_config::PlayConfig;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// How snapshots are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Grid and messages for a person.
    #[default]
    Text,
    /// One JSON snapshot per line; rejected moves repeat the unchanged state.
    Json,
}

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play at a position.
    Move(Position),
    /// Start a new game.
    Restart,
    /// Leave the session.
    Quit,
    /// Anything else.
    Unknown(String),
}

impl Command {
    /// Parses one input line.
    #[instrument]
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "q" | "quit" | "exit" => Command::Quit,
            "r" | "restart" | "reset" => Command::Restart,
            _ => Position::from_label_or_number(trimmed)
                .map(Command::Move)
                .unwrap_or_else(|| Command::Unknown(trimmed.to_string())),
        }
    }
}

/// Runs a play session until `quit` or end of input.
#[instrument(skip_all, fields(format = ?format, strategy = %engine.strategy()))]
pub fn run<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    config: &PlayConfig,
    format: OutputFormat,
    input: R,
    output: &mut W,
) -> Result<()> {
    info!("Starting play session");
    show(engine.snapshot(), config, format, output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = Command::parse(&line);
        debug!(?command, "Read command");

        match command {
            Command::Quit => break,
            Command::Restart => {
                engine.reset();
                if format == OutputFormat::Text {
                    writeln!(output, "New game.")?;
                }
            }
            Command::Move(position) => match format {
                OutputFormat::Json => {
                    engine.apply_human_move(position.to_index());
                }
                OutputFormat::Text => play_move(engine, config, position, output)?,
            },
            Command::Unknown(text) => {
                if format == OutputFormat::Text && !text.is_empty() {
                    writeln!(output, "Unrecognized input: {text}")?;
                }
            }
        }
        show(engine.snapshot(), config, format, output)?;
    }

    info!("Play session ended");
    Ok(())
}

fn play_move<W: Write>(
    engine: &mut GameEngine,
    config: &PlayConfig,
    position: Position,
    output: &mut W,
) -> Result<()> {
    let turn = match engine.try_human_move(position.to_index()) {
        Ok(turn) => turn,
        Err(e) => {
            writeln!(output, "{e}")?;
            return Ok(());
        }
    };
    writeln!(output, "{turn}")?;

    if !*config.show_scores() {
        return Ok(());
    }
    if let Some(reply) = turn.opponent_move() {
        let mut before = *turn.snapshot().board();
        before.set(reply.to_index(), Cell::Empty)?;
        let scores = score_moves(&before)
            .into_iter()
            .map(|(index, score)| format!("{index}:{score}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(output, "Scores: {scores}")?;
    }
    Ok(())
}

fn show<W: Write>(
    snapshot: Snapshot,
    config: &PlayConfig,
    format: OutputFormat,
    output: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let line = serde_json::to_string(&snapshot).context("Failed to encode snapshot")?;
            writeln!(output, "{line}")?;
        }
        OutputFormat::Text => {
            let grid = snapshot
                .board()
                .render(*config.human_mark(), *config.opponent_mark());
            writeln!(output, "\n{grid}\n")?;
            match snapshot.outcome().verdict() {
                Some(verdict) => {
                    writeln!(output, "{verdict} Press 'r' to restart or 'q' to quit.")?
                }
                None => write!(output, "Your move (0-8 or a name like 'center'): ")?,
            }
        }
    }
    output.flush()?;
    Ok(())
}
