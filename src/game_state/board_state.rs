//! Sparse board representation and the patches that update it.
//!
//! `BoardState` maps occupied positions to pieces. Rule sets never edit a
//! board directly; they return a `BoardStateUpdates` patch that the caller
//! applies, which keeps move validation free of side effects.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::pieces::{Color, Piece};
use crate::game_state::position::Position;
use crate::utils::render_board_state::render_board_state;

/// Which pieces stand where.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardState {
    occupancies: BTreeMap<Position, Piece>,
}

impl BoardState {
    /// A board with no pieces on it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a board from `(position, piece)` pairs.
    ///
    /// Every position must lie on the board. A later pair for the same
    /// position replaces an earlier one.
    pub fn from_occupancies<I>(occupancies: I) -> CheckersResult<Self>
    where
        I: IntoIterator<Item = (Position, Piece)>,
    {
        let mut board = Self::empty();
        for (position, piece) in occupancies {
            if !position.is_on_board() {
                return Err(CheckersError::InvalidOccupancy(position));
            }
            board.occupancies.insert(position, piece);
        }
        Ok(board)
    }

    /// Re-checks the on-board invariant, e.g. after deserializing.
    pub fn validate(&self) -> CheckersResult<()> {
        match self.occupancies.keys().find(|p| !p.is_on_board()) {
            Some(position) => Err(CheckersError::InvalidOccupancy(*position)),
            None => Ok(()),
        }
    }

    /// The piece at `position`, or `None` for empty and off-board squares.
    #[inline]
    pub fn occupant_at(&self, position: Position) -> Option<Piece> {
        self.occupancies.get(&position).copied()
    }

    #[inline]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupancies.contains_key(&position)
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.occupancies.iter().map(|(position, piece)| (*position, *piece))
    }

    /// Number of pieces of one color.
    pub fn count(&self, color: Color) -> usize {
        self.occupancies.values().filter(|piece| piece.color == color).count()
    }

    pub fn len(&self) -> usize {
        self.occupancies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancies.is_empty()
    }

    /// Returns a new board with `updates` applied; `self` is left as is.
    pub fn apply(&self, updates: &BoardStateUpdates) -> BoardState {
        let mut next = self.clone();
        next.apply_in_place(updates);
        next
    }

    /// Applies `updates` to this board.
    pub fn apply_in_place(&mut self, updates: &BoardStateUpdates) {
        for (position, update) in updates.iter() {
            match update {
                OccupancyUpdate::Vacate => {
                    self.occupancies.remove(&position);
                }
                OccupancyUpdate::Place(piece) => {
                    self.occupancies.insert(position, piece);
                }
            }
        }
    }

    /// Text grid of the board, White's side at the bottom.
    pub fn render(&self) -> String {
        render_board_state(self)
    }
}

impl Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// What happens to a single square when a patch is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyUpdate {
    Place(Piece),
    Vacate,
}

/// A patch to a board: each touched position is either filled or cleared.
///
/// A position appears at most once per patch, so the order in which entries
/// are applied does not matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardStateUpdates {
    occupancy_updates: BTreeMap<Position, OccupancyUpdate>,
}

impl BoardStateUpdates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place(mut self, position: Position, piece: Piece) -> Self {
        self.occupancy_updates.insert(position, OccupancyUpdate::Place(piece));
        self
    }

    pub fn vacate(mut self, position: Position) -> Self {
        self.occupancy_updates.insert(position, OccupancyUpdate::Vacate);
        self
    }

    pub fn get(&self, position: Position) -> Option<OccupancyUpdate> {
        self.occupancy_updates.get(&position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, OccupancyUpdate)> + '_ {
        self.occupancy_updates.iter().map(|(position, update)| (*position, *update))
    }

    pub fn len(&self) -> usize {
        self.occupancy_updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy_updates.is_empty()
    }
}
