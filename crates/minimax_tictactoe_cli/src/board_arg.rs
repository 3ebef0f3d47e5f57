//! Board positions given on the command line.

use derive_more::{Display, Error};
use minimax_tictactoe::{Board, Cell, Player};
use std::str::FromStr;

/// Error parsing a board argument.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// A character that is neither a mark, an empty cell nor a separator.
    #[display("unexpected character {:?} at offset {}", found, offset)]
    UnexpectedChar {
        /// The offending character.
        found: char,
        /// Byte offset in the argument.
        offset: usize,
    },
    /// The argument did not describe exactly nine cells.
    #[display("expected 9 cells, found {}", _0)]
    CellCount(#[error(not(source))] usize),
}

/// A board parsed from text.
///
/// Cells are read in row-major order: `X` or `O` (either case) for marks,
/// `.`, `_` or `-` for empty cells. `/`, `|` and whitespace separate rows
/// and are otherwise ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardArg(pub Board);

impl FromStr for BoardArg {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for (offset, c) in s.char_indices() {
            let cell = match c {
                'X' | 'x' => Cell::Occupied(Player::X),
                'O' | 'o' => Cell::Occupied(Player::O),
                '.' | '_' | '-' => Cell::Empty,
                '/' | '|' => continue,
                c if c.is_whitespace() => continue,
                found => return Err(BoardParseError::UnexpectedChar { found, offset }),
            };
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Cell>| BoardParseError::CellCount(cells.len()))?;
        let [a, b, c, d, e, f, g, h, i] = cells;
        Ok(Self(Board::from_rows([[a, b, c], [d, e, f], [g, h, i]])))
    }
}
