//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Nothing here searches or recurses;
//! the minimax search is layered on top.

pub mod moves;
pub mod terminal;
pub mod turn;
pub mod win;

pub use moves::{apply_action, legal_actions};
pub use terminal::{is_full, is_terminal, outcome};
pub use turn::{current_player, initial_board};
pub use win::{utility, winner};
