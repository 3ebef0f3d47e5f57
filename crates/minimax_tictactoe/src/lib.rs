//! Tic-tac-toe rules and an exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board rules**: value types ([`Board`], [`Cell`], [`Action`],
//!   [`Player`]) and pure functions for turn derivation, legal moves, move
//!   application, win and terminal detection and utility scoring.
//! - **Minimax search**: [`optimal_action`] walks the whole game tree below a
//!   board and returns the best move for the player to move.
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Player, apply_action, current_player, initial_board, optimal_action};
//!
//! let board = initial_board();
//! let action = optimal_action(&board).expect("empty board has moves");
//! let board = apply_action(&board, action)?;
//! assert_eq!(current_player(&board), Player::O);
//! # Ok::<(), minimax_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod invariants;
mod minimax;
mod outcome;
pub mod rules;
mod types;

#[cfg(kani)]
mod verification;

// Crate-level exports - Domain types
pub use action::{Action, MoveError};
pub use outcome::Outcome;
pub use types::{Board, Cell, Player};

// Crate-level exports - Board rules
pub use rules::{
    apply_action, current_player, initial_board, is_full, is_terminal, legal_actions, outcome,
    utility, winner,
};

// Crate-level exports - Invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, ReachableBoard,
    WinnerConsistentInvariant,
};

// Crate-level exports - Search
pub use minimax::{Decision, action_values, decide, evaluate, max_value, min_value, optimal_action};
