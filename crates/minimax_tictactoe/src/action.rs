//! First-class action types for tic-tac-toe.
//!
//! An action names a cell. Whether it is playable depends on the board it is
//! applied to, so validation happens in [`crate::apply_action`].

use serde::{Deserialize, Serialize};

/// A cell on the board addressed by row and column, both in `0..3`.
///
/// Actions order by row, then column. Legal action sets iterate in that
/// order, which is also the search's tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Coordinates", into = "Coordinates")]
pub struct Action {
    row: u8,
    column: u8,
}

/// Wire form of an action; deserialized values are range checked.
#[derive(Serialize, Deserialize)]
struct Coordinates {
    row: usize,
    column: usize,
}

impl TryFrom<Coordinates> for Action {
    type Error = String;

    fn try_from(raw: Coordinates) -> Result<Self, Self::Error> {
        Action::new(raw.row, raw.column)
            .ok_or_else(|| format!("cell ({}, {}) is off the board", raw.row, raw.column))
    }
}

impl From<Action> for Coordinates {
    fn from(action: Action) -> Self {
        Self {
            row: action.row(),
            column: action.column(),
        }
    }
}

impl Action {
    /// All nine cells in row-major order.
    pub const ALL: [Action; 9] = [
        Action::at(0, 0),
        Action::at(0, 1),
        Action::at(0, 2),
        Action::at(1, 0),
        Action::at(1, 1),
        Action::at(1, 2),
        Action::at(2, 0),
        Action::at(2, 1),
        Action::at(2, 2),
    ];

    const fn at(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Creates an action, or `None` if either coordinate is outside `0..3`.
    pub fn new(row: usize, column: usize) -> Option<Self> {
        if row < 3 && column < 3 {
            Some(Self::at(row as u8, column as u8))
        } else {
            None
        }
    }

    /// Returns the row (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the column (0-2).
    pub fn column(self) -> usize {
        self.column as usize
    }

    /// Converts the action to its row-major index (0-8).
    pub fn index(self) -> usize {
        self.row() * 3 + self.column()
    }

    /// Returns true for the four corner cells.
    pub fn is_corner(self) -> bool {
        self.row != 1 && self.column != 1
    }

    /// Returns true for the center cell.
    pub fn is_center(self) -> bool {
        self.row == 1 && self.column == 1
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Error that can occur when applying an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell targeted by the action is already occupied.
    #[display("Cell {} is already occupied", _0)]
    InvalidMove(Action),
}

impl std::error::Error for MoveError {}
