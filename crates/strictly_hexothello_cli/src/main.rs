//! Strictly Hexothello - console front end.
//!
//! Thin adapter over the `strictly_hexothello` engine.

#![warn(missing_docs)]

mod cli;
mod config;
mod console;
mod input;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use console::SessionEnd;
use std::io::{self, Write};
use strictly_hexothello::new_game;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { radius, no_history } => play(config.with_overrides(radius, no_history)),
        Command::Opening { radius } => opening(config.with_overrides(radius, false)),
    }
}

/// Play a game at the console
#[instrument]
fn play(config: GameConfig) -> Result<()> {
    let mut game = new_game(*config.radius(), *config.history())?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let end = console::run_session(&mut game, io::stdin().lock(), &mut out)?;
    if end != SessionEnd::Finished {
        writeln!(out)?;
        writeln!(out, "Game abandoned. Scores: {}", game.scores())?;
    }
    info!(?end, "Session ended");
    Ok(())
}

/// Show the opening position
#[instrument]
fn opening(config: GameConfig) -> Result<()> {
    let game = new_game(*config.radius(), false)?;
    console::describe_opening(&game, &mut io::stdout().lock())?;
    Ok(())
}
