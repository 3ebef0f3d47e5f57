//! Tests for the minimax search.

use minimax_tictactoe::{
    Action, Board, Cell, Player, apply_action, current_player, evaluate, initial_board,
    is_terminal, legal_actions, optimal_action, utility, winner,
};
use strum::IntoEnumIterator;

const X: Cell = Cell::Occupied(Player::X);
const O: Cell = Cell::Occupied(Player::O);
const E: Cell = Cell::Empty;

fn at(row: usize, column: usize) -> Action {
    Action::new(row, column).unwrap()
}

/// Plays the game out with the engine choosing for `engine` and every
/// possible reply tried for the other side. Returns the worst utility the
/// engine's side reached, from that side's point of view.
fn worst_result(board: Board, engine: Player) -> i8 {
    let sign = match engine {
        Player::X => 1,
        Player::O => -1,
    };
    if is_terminal(&board) {
        return sign * utility(&board);
    }
    if current_player(&board) == engine {
        let action = optimal_action(&board).expect("non-terminal board has a move");
        worst_result(apply_action(&board, action).unwrap(), engine)
    } else {
        legal_actions(&board)
            .into_iter()
            .map(|action| worst_result(apply_action(&board, action).unwrap(), engine))
            .min()
            .unwrap_or(0)
    }
}

#[test]
fn test_x_takes_the_win() {
    let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
    assert_eq!(current_player(&board), Player::X);
    assert_eq!(optimal_action(&board), Some(at(0, 2)));
}

#[test]
fn test_o_blocks_a_threat() {
    // X threatens the top row; O has no win of its own.
    let board = Board::from_rows([[X, X, E], [E, O, E], [E, E, E]]);
    assert_eq!(current_player(&board), Player::O);
    assert_eq!(optimal_action(&board), Some(at(0, 2)));
}

#[test]
fn test_opening_move() {
    let board = initial_board();
    let action = optimal_action(&board).unwrap();
    assert!(action.is_corner() || action.is_center());
    // Every opening draws, so the first cell in row-major order is chosen.
    assert_eq!(action, at(0, 0));

    let next = apply_action(&board, action).unwrap();
    assert_eq!(current_player(&next), Player::O);
}

#[test]
fn test_empty_board_is_a_draw() {
    assert_eq!(evaluate(&initial_board()), 0);
}

#[test]
fn test_one_cell_left() {
    let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, E]]);
    assert!(!is_terminal(&board));
    assert_eq!(legal_actions(&board).len(), 1);
    assert_eq!(optimal_action(&board), Some(at(2, 2)));
}

#[test]
fn test_no_move_on_finished_board() {
    let won = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
    assert_eq!(optimal_action(&won), None);

    let drawn = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
    assert_eq!(optimal_action(&drawn), None);
}

#[test]
fn test_self_play_ends_in_draw() {
    let mut board = initial_board();
    while let Some(action) = optimal_action(&board) {
        board = apply_action(&board, action).unwrap();
        assert_ne!(winner(&board), Some(Player::O));
    }
    assert!(is_terminal(&board));
    assert_eq!(winner(&board), None);
    assert_eq!(utility(&board), 0);
}

#[test]
fn test_search_does_not_modify_board() {
    let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
    let before = board;
    let _ = optimal_action(&board);
    assert_eq!(board, before);
}

#[test]
fn test_engine_never_loses_from_either_side() {
    for engine in Player::iter() {
        assert!(
            worst_result(initial_board(), engine) >= 0,
            "engine lost playing {engine}"
        );
    }
}

#[test]
fn test_punishes_a_mistake() {
    // O answered a corner opening with an edge; X can force a win.
    let board = Board::from_rows([[X, O, E], [E, E, E], [E, E, E]]);
    assert_eq!(evaluate(&board), 1);
    let action = optimal_action(&board).unwrap();
    let next = apply_action(&board, action).unwrap();
    assert_eq!(evaluate(&next), 1);
}
