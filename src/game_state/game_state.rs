//! Authoritative state of one game and the turn transition.
//!
//! `GameState` bundles the board, the rule set in force and the color to
//! move. It only ever changes through `try_make_moves`, which validates a
//! whole turn on a private copy of the board and hands back a new state, so a
//! rejected turn leaves the caller's state exactly as it was.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::board_state::BoardState;
use crate::game_state::pieces::Color;
use crate::moves::checkers_move::MoveSequence;
use crate::rule_sets::rule_set_registry::RuleSetKind;
use crate::rule_sets::rule_set_trait::RuleSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board_state: BoardState,
    pub rule_set: RuleSetKind,
    pub whose_turn: Color,
}

impl GameState {
    /// Starting position of a fresh game under `rule_set`.
    pub fn new_game(rule_set: RuleSetKind) -> Self {
        let rules = rule_set.rule_set();
        Self {
            board_state: rules.initial_game_occupancies(),
            rule_set,
            whose_turn: rules.first_player(),
        }
    }

    /// Starting position of a fresh game, looking the rule set up by name.
    pub fn new_game_named(rule_set_name: &str) -> CheckersResult<Self> {
        RuleSetKind::from_name(rule_set_name).map(Self::new_game)
    }

    #[inline]
    pub fn rules(&self) -> &'static dyn RuleSet {
        self.rule_set.rule_set()
    }

    /// Play one full turn. See [`try_make_moves`].
    pub fn try_make_moves(&self, moves: &MoveSequence) -> CheckersResult<GameState> {
        try_make_moves(moves, self)
    }
}

/// Apply every move of a turn, in order, and pass play to the other color.
///
/// Each move is checked against the board as left by the moves before it.
/// The first illegal move aborts the turn with `MoveRejected` carrying its
/// 1-based index; `game_state` is never modified. On success the returned
/// state has the fully patched board and `whose_turn` advanced exactly once.
pub fn try_make_moves(moves: &MoveSequence, game_state: &GameState) -> CheckersResult<GameState> {
    let rules = game_state.rules();
    let player = game_state.whose_turn;
    let mut working_board = game_state.board_state.clone();

    for (i, mv) in moves.iter().enumerate() {
        let index = i + 1;
        let updates = rules
            .try_make_move(mv, &working_board, player)
            .map_err(|violation| {
                debug!("{player} move {index} ({mv}) rejected: {violation}");
                CheckersError::MoveRejected { index, violation }
            })?;
        working_board.apply_in_place(&updates);
        debug!("{player} move {index} ({mv}) validated");
    }

    Ok(GameState {
        board_state: working_board,
        rule_set: game_state.rule_set,
        whose_turn: player.next_up(),
    })
}
