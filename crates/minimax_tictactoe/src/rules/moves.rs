//! Legal move enumeration and move application.

use super::turn::current_player;
use super::win::winner;
use crate::action::{Action, MoveError};
use crate::types::{Board, Cell};
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// Returns every action playable on the board.
///
/// One action per empty cell, or none at all once a player has completed a
/// line. The set iterates by row, then column.
#[instrument(level = "trace", skip(board))]
pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    if winner(board).is_some() {
        return BTreeSet::new();
    }
    Action::ALL
        .into_iter()
        .filter(|action| board.is_empty(*action))
        .collect()
}

/// Plays the action for the player to move and returns the resulting board.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`MoveError::InvalidMove`] if the targeted cell is occupied.
#[instrument(level = "trace", skip_all, fields(action = %action))]
pub fn apply_action(board: &Board, action: Action) -> Result<Board, MoveError> {
    if !board.is_empty(action) {
        trace!(cell = ?board.get(action), "Rejected move onto occupied cell");
        return Err(MoveError::InvalidMove(action));
    }

    let player = current_player(board);
    let next = board.with_cell(action, Cell::Occupied(player));

    debug_assert!(
        single_placement(board, &next, action),
        "apply_action must change exactly the targeted cell"
    );

    Ok(next)
}

/// Postcondition: `after` differs from `before` only at `action`, which went
/// from empty to the mark of the player who was to move.
pub(crate) fn single_placement(before: &Board, after: &Board, action: Action) -> bool {
    let mover = Cell::Occupied(current_player(before));
    before
        .cells()
        .iter()
        .zip(after.cells())
        .enumerate()
        .all(|(index, (was, now))| {
            if index == action.index() {
                *was == Cell::Empty && *now == mover
            } else {
                was == now
            }
        })
}
