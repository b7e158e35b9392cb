//! Board coordinates and their `row,column` text form.
//!
//! A `Position` is any pair of non-negative coordinates; it is not required
//! to lie on the board. Rule sets and `BoardState` decide what an off-board
//! position means (it is never occupied).

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checkers_errors::{ParseError, POSITION_FORMAT};
use crate::game_state::checkers_rules::BOARD_SIZE;

/// A square on the board, addressed by row then column.
///
/// Row 0 is White's back row. Serialized as its text form so it can be used
/// as a map key in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Position {
    pub row: u8,
    pub column: u8,
}

impl Position {
    #[inline]
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Checks if the position lies on the 8x8 board.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row < BOARD_SIZE && self.column < BOARD_SIZE
    }

    /// Dark squares are the playable ones: `row + column` is even.
    #[inline]
    pub const fn is_dark_square(self) -> bool {
        (self.row ^ self.column) & 1 == 0
    }

    /// Moves the position by a row and column offset.
    ///
    /// Returns `None` if the result would be off the board.
    pub fn offset(self, d_row: i8, d_column: i8) -> Option<Position> {
        let row = i16::from(self.row) + i16::from(d_row);
        let column = i16::from(self.column) + i16::from(d_column);
        if (0..i16::from(BOARD_SIZE)).contains(&row) && (0..i16::from(BOARD_SIZE)).contains(&column) {
            Some(Position::new(row as u8, column as u8))
        } else {
            None
        }
    }

    /// Signed `(row, column)` distance from `self` to `other`.
    #[inline]
    pub fn delta_to(self, other: Position) -> (i16, i16) {
        (
            i16::from(other.row) - i16::from(self.row),
            i16::from(other.column) - i16::from(self.column),
        )
    }

    /// Square halfway between `self` and `other`, if they are an even
    /// distance apart on both axes.
    pub fn midpoint(self, other: Position) -> Option<Position> {
        let (d_row, d_column) = self.delta_to(other);
        if d_row % 2 != 0 || d_column % 2 != 0 {
            return None;
        }
        let row = i16::from(self.row) + d_row / 2;
        let column = i16::from(self.column) + d_column / 2;
        Some(Position::new(row as u8, column as u8))
    }

    /// Iterates every square of the board, row by row.
    pub fn all_positions() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |column| Position::new(row, column)))
    }
}

/// Parse a `row,column` string into a position.
///
/// Accepts exactly two runs of ASCII digits separated by one comma.
pub fn position_from_text(text: &str) -> Result<Position, ParseError> {
    let syntax_error = || ParseError::InvalidSyntax {
        input: text.to_owned(),
        expected: POSITION_FORMAT,
    };

    let (row_part, column_part) = text.split_once(',').ok_or_else(syntax_error)?;
    if !is_decimal(row_part) || !is_decimal(column_part) {
        return Err(syntax_error());
    }

    let parse_component = |component: &str| {
        component
            .parse::<u8>()
            .map_err(|_| ParseError::ComponentOutOfRange {
                input: text.to_owned(),
                component: component.to_owned(),
            })
    };

    Ok(Position::new(parse_component(row_part)?, parse_component(column_part)?))
}

fn is_decimal(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        position_from_text(s)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.to_string()
    }
}

impl TryFrom<String> for Position {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        position_from_text(&value)
    }
}
