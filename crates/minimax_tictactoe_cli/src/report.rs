//! Results of each command, printable as text or JSON.

use minimax_tictactoe::{
    Action, Board, Decision, Outcome, Player, action_values, current_player, decide, is_terminal,
    outcome, utility,
};
use serde::Serialize;
use tracing::instrument;

/// Answer to `status`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// The inspected board.
    pub board: Board,
    /// Player to move.
    pub to_move: Player,
    /// True once the game is over.
    pub terminal: bool,
    /// How the game ended, if it has.
    pub outcome: Option<Outcome>,
    /// Utility from X's point of view.
    pub utility: i8,
}

impl StatusReport {
    /// Gathers the status of a board.
    #[instrument(skip(board))]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            to_move: current_player(&board),
            terminal: is_terminal(&board),
            outcome: outcome(&board),
            utility: utility(&board),
        }
    }

    /// Renders the report as text.
    pub fn to_text(&self) -> String {
        let state = match self.outcome {
            Some(outcome) => format!("Game over. {outcome}."),
            None => format!("In progress. Player {} to move.", self.to_move),
        };
        format!(
            "{}\n\n{}\nTerminal: {}\nUtility: {}",
            self.board, state, self.terminal, self.utility
        )
    }
}

/// Answer to `best`.
#[derive(Debug, Clone, Serialize)]
pub struct BestReport {
    /// Player to move.
    pub to_move: Player,
    /// The search's choice, or `None` on a finished board.
    pub decision: Option<Decision>,
}

impl BestReport {
    /// Runs the search on a board.
    #[instrument(skip(board))]
    pub fn new(board: Board) -> Self {
        Self {
            to_move: current_player(&board),
            decision: decide(&board),
        }
    }

    /// Renders the report as text.
    pub fn to_text(&self) -> String {
        match &self.decision {
            Some(decision) => format!(
                "Player {} plays {} (value {}, {} positions searched)",
                self.to_move,
                decision.action(),
                decision.value(),
                decision.nodes()
            ),
            None => "No move: the game is over".to_string(),
        }
    }
}

/// One row of an `analyze` answer.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionValue {
    /// A legal action.
    pub action: Action,
    /// Minimax value after playing it, from X's point of view.
    pub value: i8,
}

/// Answer to `analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeReport {
    /// Player to move.
    pub to_move: Player,
    /// Every legal action with its value, in row-major order.
    pub actions: Vec<ActionValue>,
}

impl AnalyzeReport {
    /// Scores every legal action on a board.
    #[instrument(skip(board))]
    pub fn new(board: Board) -> Self {
        Self {
            to_move: current_player(&board),
            actions: action_values(&board)
                .into_iter()
                .map(|(action, value)| ActionValue { action, value })
                .collect(),
        }
    }

    /// Renders the report as text.
    pub fn to_text(&self) -> String {
        if self.actions.is_empty() {
            return "No legal moves: the game is over".to_string();
        }
        let mut out = format!("Player {} to move\n", self.to_move);
        for ActionValue { action, value } in &self.actions {
            out.push_str(&format!("{action}: {value:+}\n"));
        }
        out.pop();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minimax_tictactoe::Cell;

    const X: Cell = Cell::Occupied(Player::X);
    const O: Cell = Cell::Occupied(Player::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_status_in_progress() {
        let report = StatusReport::new(Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]));
        assert_eq!(report.to_move, Player::X);
        assert!(!report.terminal);
        assert!(report.to_text().contains("In progress. Player X to move."));
    }

    #[test]
    fn test_status_won() {
        let report = StatusReport::new(Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]));
        assert!(report.terminal);
        assert_eq!(report.utility, 1);
        assert!(report.to_text().contains("Game over. Player X wins."));
    }

    #[test]
    fn test_best_text() {
        let report = BestReport::new(Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]));
        assert!(report.to_text().starts_with("Player X plays (0, 2) (value 1,"));
    }

    #[test]
    fn test_best_json_without_move() {
        let report = BestReport::new(Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["decision"].is_null());
        assert_eq!(json["to_move"], "O");
    }

    #[test]
    fn test_analyze_text() {
        let report = AnalyzeReport::new(Board::from_rows([[X, O, X], [X, X, O], [O, E, E]]));
        assert_eq!(report.to_text(), "Player O to move\n(2, 1): +1\n(2, 2): +0");
    }
}
