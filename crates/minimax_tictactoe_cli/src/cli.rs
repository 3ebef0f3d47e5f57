//! Command-line interface for minimax_tictactoe.

use crate::board_arg::BoardArg;
use clap::{Parser, Subcommand, ValueEnum};

/// Minimax Tic-Tac-Toe - inspect positions with an exhaustive game-tree search
#[derive(Parser, Debug)]
#[command(name = "minimax_tictactoe")]
#[command(about = "Find the optimal tic-tac-toe move for a position", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    pub format: Format,

    /// Accept boards that legal play could not have produced
    #[arg(long, global = true)]
    pub allow_unreachable: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// How results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human-readable text
    Text,
    /// One JSON document on stdout
    Json,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show whose turn it is and whether the game is over
    Status {
        /// Board as nine cells in row-major order, e.g. "XX./OO./..."
        board: BoardArg,
    },

    /// Compute the optimal move for the player to move
    Best {
        /// Board as nine cells in row-major order, e.g. "XX./OO./..."
        board: BoardArg,
    },

    /// List every legal move with its minimax value
    Analyze {
        /// Board as nine cells in row-major order, e.g. "XX./OO./..."
        board: BoardArg,
    },
}

impl Command {
    /// Returns the board the command operates on.
    pub fn board(&self) -> &BoardArg {
        match self {
            Command::Status { board } | Command::Best { board } | Command::Analyze { board } => {
                board
            }
        }
    }
}
