//! Kani proof harnesses for the board rules.
//!
//! These check move application for every board Kani can build, including
//! boards that legal play never reaches.

use crate::{Action, Board, Cell, Player, apply_action, current_player};

impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}

impl kani::Arbitrary for Cell {
    fn any() -> Self {
        if kani::any() {
            Cell::Empty
        } else {
            Cell::Occupied(kani::any())
        }
    }
}

impl kani::Arbitrary for Action {
    fn any() -> Self {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Action::ALL[index]
    }
}

impl kani::Arbitrary for Board {
    fn any() -> Self {
        let rows: [[Cell; 3]; 3] = kani::any();
        Board::from_rows(rows)
    }
}

/// Playing a move never alters the board it was played on.
#[kani::proof]
#[kani::unwind(10)]
fn verify_apply_action_leaves_input_untouched() {
    let board: Board = kani::any();
    let action: Action = kani::any();
    let before = board;

    let _ = apply_action(&board, action);

    assert_eq!(board, before);
}

/// A successful move fills exactly the targeted cell with the mover's mark.
#[kani::proof]
#[kani::unwind(10)]
fn verify_apply_action_changes_one_cell() {
    let board: Board = kani::any();
    let action: Action = kani::any();

    match apply_action(&board, action) {
        Ok(next) => {
            assert_eq!(board.get(action), Cell::Empty);
            assert_eq!(next.get(action), Cell::Occupied(current_player(&board)));
            for other in Action::ALL {
                if other != action {
                    assert_eq!(board.get(other), next.get(other));
                }
            }
        }
        Err(_) => assert_ne!(board.get(action), Cell::Empty),
    }
}
