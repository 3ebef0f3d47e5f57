//! Win detection and utility scoring.

use super::terminal::outcome;
use crate::types::{Board, Player};
use tracing::instrument;

/// The eight lines as row-major indices, in the order they are checked:
/// rows top to bottom, columns left to right, then both diagonals.
pub(crate) const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the owner of a completed line, if the line is complete.
pub(crate) fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Player> {
    let cells = board.cells();
    let owner = cells[a].player()?;
    (cells[b].player() == Some(owner) && cells[c].player() == Some(owner)).then_some(owner)
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line (rows, columns, diagonals), so a
/// board showing several lines (impossible under legal play) still has a
/// single deterministic answer.
#[instrument(level = "trace", ret)]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Scores the board from X's point of view.
///
/// Returns 1 if X has a line, -1 if O has one, and 0 otherwise. Non-terminal
/// boards score 0.
pub fn utility(board: &Board) -> i8 {
    outcome(board).map_or(0, |outcome| outcome.utility())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    const X: Cell = Cell::Occupied(Player::X);
    const O: Cell = Cell::Occupied(Player::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
        assert_eq!(utility(&Board::new()), 0);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(winner(&board), Some(Player::X));
        assert_eq!(utility(&board), 1);
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_rows([[X, O, X], [E, O, E], [X, O, E]]);
        assert_eq!(winner(&board), Some(Player::O));
        assert_eq!(utility(&board), -1);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_rows([[O, E, X], [O, X, E], [X, E, E]]);
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_first_complete_line_wins() {
        // Two owners at once is unreachable, but the answer must be stable.
        let rows = Board::from_rows([[O, O, O], [X, X, X], [E, E, E]]);
        assert_eq!(winner(&rows), Some(Player::O));

        let columns = Board::from_rows([[X, O, E], [X, O, E], [X, O, E]]);
        assert_eq!(winner(&columns), Some(Player::X));
    }
}
