//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. The search walks the full game
//! tree below the given board with no pruning, caching or depth limit; at
//! most nine plies deep, the tree is small enough to visit every leaf.
//!
//! Ties between equally good actions go to the first one in legal-action
//! order (lowest row, then lowest column): a later action only replaces the
//! current choice when it is strictly better.

use crate::action::Action;
use crate::rules::{apply_action, current_player, is_terminal, legal_actions, utility};
use crate::types::{Board, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};

/// The search's choice for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new, Serialize, Deserialize)]
pub struct Decision {
    /// Action chosen for the player to move.
    action: Action,
    /// Minimax value of the position after the action, from X's point of view.
    value: i8,
    /// Number of positions visited below the root.
    nodes: u64,
}

/// Returns the optimal action for the player to move, or `None` on a
/// terminal board.
#[instrument(level = "debug", skip(board), ret)]
pub fn optimal_action(board: &Board) -> Option<Action> {
    decide(board).map(|decision| *decision.action())
}

/// Searches the board and reports the chosen action with its value and the
/// size of the search.
#[instrument(level = "debug", skip(board))]
pub fn decide(board: &Board) -> Option<Decision> {
    if is_terminal(board) {
        debug!("Terminal board, no move to make");
        return None;
    }

    let player = current_player(board);
    let mut nodes = 0;
    let mut best: Option<(Action, i8)> = None;

    for action in legal_actions(board) {
        let Some(next) = child(board, action) else {
            continue;
        };
        nodes += 1;
        let value = value_for(player.opponent(), &next, &mut nodes);
        let improves = match (best, player) {
            (None, _) => true,
            (Some((_, v)), Player::X) => value > v,
            (Some((_, v)), Player::O) => value < v,
        };
        if improves {
            best = Some((action, value));
        }
    }

    let (action, value) = best?;
    debug!(%player, %action, value, nodes, "Search complete");
    Some(Decision::new(action, value, nodes))
}

/// Minimax value of the board, assuming X maximizes from here on.
pub fn max_value(board: &Board) -> i8 {
    max_value_counted(board, &mut 0)
}

/// Minimax value of the board, assuming O minimizes from here on.
pub fn min_value(board: &Board) -> i8 {
    min_value_counted(board, &mut 0)
}

/// Minimax value of the board for whichever player is to move.
#[instrument(level = "debug", skip(board), ret)]
pub fn evaluate(board: &Board) -> i8 {
    value_for(current_player(board), board, &mut 0)
}

/// Every legal action with the minimax value of the position it leads to,
/// in legal-action order.
#[instrument(level = "debug", skip(board))]
pub fn action_values(board: &Board) -> Vec<(Action, i8)> {
    legal_actions(board)
        .into_iter()
        .filter_map(|action| Some((action, evaluate(&child(board, action)?))))
        .collect()
}

/// Minimax value of the board with `to_move` choosing next.
fn value_for(to_move: Player, board: &Board, nodes: &mut u64) -> i8 {
    match to_move {
        Player::X => max_value_counted(board, nodes),
        Player::O => min_value_counted(board, nodes),
    }
}

fn max_value_counted(board: &Board, nodes: &mut u64) -> i8 {
    if is_terminal(board) {
        return utility(board);
    }
    let mut v = i8::MIN;
    for action in legal_actions(board) {
        if let Some(next) = child(board, action) {
            *nodes += 1;
            v = v.max(min_value_counted(&next, nodes));
        }
    }
    v
}

fn min_value_counted(board: &Board, nodes: &mut u64) -> i8 {
    if is_terminal(board) {
        return utility(board);
    }
    let mut v = i8::MAX;
    for action in legal_actions(board) {
        if let Some(next) = child(board, action) {
            *nodes += 1;
            v = v.min(max_value_counted(&next, nodes));
        }
    }
    v
}

/// Applies an action drawn from `legal_actions` of the same board.
fn child(board: &Board, action: Action) -> Option<Board> {
    match apply_action(board, action) {
        Ok(next) => Some(next),
        Err(e) => {
            error!(error = %e, "Legal action was rejected");
            None
        }
    }
}
