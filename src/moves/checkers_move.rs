//! Move requests and the turns built from them.

use std::fmt::{self, Display};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::position::Position;

/// A request to move the piece on `starting_position` to `target_position`.
///
/// Nothing about legality is implied; that is for a rule set to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub starting_position: Position,
    pub target_position: Position,
}

impl Move {
    pub const fn new(starting_position: Position, target_position: Position) -> Self {
        Self {
            starting_position,
            target_position,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.starting_position, self.target_position)
    }
}

/// One player's whole turn: a non-empty, ordered list of moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSequence {
    moves: Vec<Move>,
}

impl MoveSequence {
    pub fn new(moves: Vec<Move>) -> CheckersResult<Self> {
        if moves.is_empty() {
            return Err(CheckersError::EmptyMoveSequence);
        }
        Ok(Self { moves })
    }

    /// Builds a turn from the path a piece travels: every consecutive pair of
    /// positions becomes one move.
    pub fn from_positions(path: &[Position]) -> CheckersResult<Self> {
        let moves = path
            .windows(2)
            .map(|pair| Move::new(pair[0], pair[1]))
            .collect();
        Self::new(moves)
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
