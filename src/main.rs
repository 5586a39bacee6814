//! Rewind - line-oriented tic-tac-toe driver
//!
//! Reads move and jump events as JSON lines and prints the board, status
//! and move list after each one.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use rewind_tictactoe::{GameEvent, GameState, event_schema, transcript};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    if cli.schema {
        println!("{}", serde_json::to_string_pretty(&event_schema())?);
        return Ok(());
    }

    info!("Starting rewind session");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let game = run_session(stdin.lock(), stdout.lock(), cli.quiet)?;
    info!(steps = game.history().len(), "Session finished");
    Ok(())
}

/// Feeds every event line from `input` into a new game, writing state to `output`.
///
/// Blank lines are skipped. Lines that fail to decode, and events the game
/// rejects, are reported on `output` and the session continues.
#[instrument(skip(input, output))]
fn run_session<R: BufRead, W: Write>(input: R, mut output: W, quiet: bool) -> Result<GameState> {
    let mut game = GameState::new();

    for (line_no, line) in input.lines().enumerate() {
        let line = line.context("Failed to read event line")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event = match serde_json::from_str::<GameEvent>(line) {
            Ok(event) => event,
            Err(err) => {
                warn!(line_no, %err, "Undecodable event");
                writeln!(output, "error: invalid event on line {}: {err}", line_no + 1)?;
                continue;
            }
        };

        debug!(?event, "Applying event");
        if let Err(err) = event.apply(&mut game) {
            writeln!(output, "error: {err}")?;
            continue;
        }

        if !quiet {
            writeln!(output, "{}", transcript::render(&game))?;
        }
    }

    if quiet {
        writeln!(output, "{}", transcript::render(&game))?;
    }
    output.flush()?;
    Ok(game)
}
