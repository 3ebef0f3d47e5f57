//! First-class invariants for tic-tac-toe boards.
//!
//! Invariants are logical properties of every board reachable from the empty
//! board by legal play. The rules and the search do not depend on them; they
//! let callers reject hand-built positions that could never occur.

use crate::rules::win::{LINES, line_owner};
use crate::types::{Board, Player};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with every violation
    /// otherwise.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: X has placed as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    #[instrument(level = "trace", skip(board))]
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has placed as many marks as O, or one more"
    }
}

/// Invariant: completed lines agree with who moved last.
///
/// Only one player can own lines. An X line means X moved last, so X is one
/// mark ahead. An O line means O moved last, so the counts are equal.
pub struct WinnerConsistentInvariant;

impl Invariant<Board> for WinnerConsistentInvariant {
    #[instrument(level = "trace", skip(board))]
    fn holds(board: &Board) -> bool {
        let owns_line =
            |player| LINES.into_iter().any(|line| line_owner(board, line) == Some(player));
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = match (owns_line(Player::X), owns_line(Player::O)) {
            (true, true) => false,
            (true, false) => x_count == o_count + 1,
            (false, true) => x_count == o_count,
            (false, false) => true,
        };
        if !valid {
            warn!(x_count, o_count, "Winner consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Completed lines belong to the player who moved last"
    }
}

/// All board invariants as a composable set.
pub type ReachableBoard = (MarkBalanceInvariant, WinnerConsistentInvariant);
