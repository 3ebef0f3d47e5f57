//! End-of-game detection.

use super::win::winner;
use crate::outcome::Outcome;
use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

/// Checks if the game is over: someone has a line or no cell is empty.
#[instrument(level = "trace", ret)]
pub fn is_terminal(board: &Board) -> bool {
    is_full(board) || winner(board).is_some()
}

/// Returns how the game ended, or `None` while it is still in progress.
pub fn outcome(board: &Board) -> Option<Outcome> {
    match winner(board) {
        Some(player) => Some(Outcome::Winner(player)),
        None if is_full(board) => Some(Outcome::Draw),
        None => None,
    }
}
