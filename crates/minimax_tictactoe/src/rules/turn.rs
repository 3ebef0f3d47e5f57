//! Turn derivation.
//!
//! Whose turn it is is a function of the marks on the board, never a
//! stored field.

use crate::types::{Board, Player};
use tracing::instrument;

/// Returns the empty starting board.
pub fn initial_board() -> Board {
    Board::new()
}

/// Returns the player to move on the board.
///
/// X moves when both players have placed the same number of marks
/// (including on the empty board), O when X is one mark ahead. Boards
/// where O is ahead cannot arise from legal play and resolve to X.
#[instrument(level = "trace", ret)]
pub fn current_player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}
