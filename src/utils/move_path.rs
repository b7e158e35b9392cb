//! Turns command line move paths (`"2,1" "4,3" ...`) into move sequences.

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::position::{position_from_text, Position};
use crate::moves::checkers_move::MoveSequence;

/// Parse every argument as a position, reporting the 1-based index of the
/// first malformed one.
pub fn parse_positions<S: AsRef<str>>(arguments: &[S]) -> CheckersResult<Vec<Position>> {
    arguments
        .iter()
        .enumerate()
        .map(|(i, argument)| {
            let argument = argument.as_ref();
            position_from_text(argument).map_err(|source| CheckersError::InvalidMoveArgument {
                index: i + 1,
                argument: argument.to_owned(),
                source,
            })
        })
        .collect()
}

/// Parse the path a piece travels into the moves of one turn.
pub fn parse_move_path<S: AsRef<str>>(arguments: &[S]) -> CheckersResult<MoveSequence> {
    MoveSequence::from_positions(&parse_positions(arguments)?)
}
