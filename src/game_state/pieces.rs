//! Piece model: colors, ranks and the pieces built from them.
//!
//! All types are small `Copy` values compared by value. The sets are closed:
//! there are exactly two colors and two ranks.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::game_state::checkers_rules::{BLACK_BACK_ROW, WHITE_BACK_ROW};

/// Side of a piece, and of the player moving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The color that plays after this one.
    #[inline]
    pub const fn next_up(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step. White starts at the bottom rows and moves up.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row on which soldiers of this color are promoted (the opponent's back row).
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => BLACK_BACK_ROW,
            Color::Black => WHITE_BACK_ROW,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Color::White => "WHITE",
            Color::Black => "BLACK",
        };
        f.write_str(label)
    }
}

/// Rank of a piece. Promotion only goes from `Soldier` to `Queen`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Soldier,
    Queen,
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rank::Soldier => "SOLDIER",
            Rank::Queen => "QUEEN",
        };
        f.write_str(label)
    }
}

/// A single piece on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const WHITE_SOLDIER: Piece = Piece::new(Color::White, Rank::Soldier);
    pub const BLACK_SOLDIER: Piece = Piece::new(Color::Black, Rank::Soldier);
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, Rank::Queen);
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, Rank::Queen);

    #[inline]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    /// The same piece as a queen.
    #[inline]
    pub const fn promoted(self) -> Self {
        Self::new(self.color, Rank::Queen)
    }

    /// One-letter board code: lowercase for soldiers, uppercase for queens.
    pub const fn symbol(self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Soldier) => 'w',
            (Color::Black, Rank::Soldier) => 'b',
            (Color::White, Rank::Queen) => 'W',
            (Color::Black, Rank::Queen) => 'B',
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}
