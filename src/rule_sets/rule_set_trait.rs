//! Rule set abstraction.
//!
//! A rule set decides whether a single move is legal and, if so, how the
//! board changes. Implementations are stateless so one shared instance can
//! serve every game; the turn transition in `game_state` only talks to this
//! trait, so new variants never touch it.

use std::fmt::Debug;

use crate::checkers_errors::RuleViolation;
use crate::game_state::board_state::{BoardState, BoardStateUpdates};
use crate::game_state::pieces::Color;
use crate::moves::checkers_move::Move;

pub trait RuleSet: Debug + Send + Sync {
    /// Name under which the rule set is registered and saved.
    fn name(&self) -> &'static str;

    /// Check `mv` against `board_state` for `current_player`.
    ///
    /// Returns the patch to apply when the move is legal. Must not depend on
    /// anything but its arguments.
    fn try_make_move(
        &self,
        mv: &Move,
        board_state: &BoardState,
        current_player: Color,
    ) -> Result<BoardStateUpdates, RuleViolation>;

    /// Piece placement at the start of a game.
    fn initial_game_occupancies(&self) -> BoardState;

    /// Color that moves first.
    fn first_player(&self) -> Color;
}
