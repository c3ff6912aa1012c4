//! Command-line interface for the hexothello console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Hexothello - three-player Othello on a hex board
#[derive(Parser, Debug)]
#[command(name = "hexothello")]
#[command(about = "Three-player hexagonal Othello in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (radius, history)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a hot-seat game at the console
    Play {
        /// Board radius (overrides the config file)
        #[arg(short, long)]
        radius: Option<u16>,

        /// Disable move history (undo becomes unavailable)
        #[arg(long)]
        no_history: bool,
    },

    /// Print the opening position and every player's legal moves
    Opening {
        /// Board radius (overrides the config file)
        #[arg(short, long)]
        radius: Option<u16>,
    },
}
