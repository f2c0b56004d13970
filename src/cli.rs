//! Command-line interface for the oxo binary.

use clap::{Parser, Subcommand};

/// Unbeatable tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "oxo")]
#[command(about = "Tic-tac-toe with an unbeatable minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin
    Play {
        /// Start with the computer opponent enabled (it plays O)
        #[arg(long)]
        ai: bool,

        /// Pause before the computer's move, in milliseconds
        #[arg(long, default_value = "500")]
        delay_ms: u64,
    },

    /// Print the optimal move for a board position
    Solve {
        /// Board as nine characters in row-major order: X, O, or . per
        /// cell, e.g. "XOX.O...."
        board: String,

        /// Player to move
        #[arg(long, default_value = "O")]
        player: String,

        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}
