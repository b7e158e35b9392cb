//! Errors used throughout the checkers engine.
//!
//! `CheckersError` is the single error type returned by the core: position
//! parsing, rule set lookup, board construction and move application. Each
//! variant carries enough context (offending text, 1-based move index, the
//! specific rule that was broken) for a front end to build a message.
//!
//! Usage guidelines:
//! - Parsing and rule violations are recoverable; the caller can re-prompt.
//! - `UnknownRuleSet` aborts the requested operation (usually a new game).
//! - Storage failures are not represented here; see
//!   `persistence::game_store::StorageError`.

use thiserror::Error;

use crate::game_state::position::Position;

/// Expected shape of a position string, reported back to the user.
pub const POSITION_FORMAT: &str = "<row_integer>,<column_integer>";

/// Malformed position text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text is not two decimal integers separated by a comma.
    #[error("invalid syntax '{input}', a position string must have the form {expected}")]
    InvalidSyntax {
        input: String,
        expected: &'static str,
    },

    /// Digits were fine, but the number does not fit a board coordinate.
    #[error("position component '{component}' in '{input}' is too large")]
    ComponentOutOfRange { input: String, component: String },
}

/// The reason a single move was refused by a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Target position must be different than starting position")]
    NullMove,

    #[error("There is no piece at starting position")]
    NoPieceAtStart,

    #[error("The piece at starting position is the wrong color")]
    WrongColor,

    /// Neither a one-square diagonal step nor a jump over an adjacent piece.
    #[error("A piece can only move one square diagonally or jump over an adjacent piece")]
    IllegalGeometry,

    /// A simple step onto an occupied square.
    #[error("The target position is already occupied")]
    TargetOccupied,

    /// A soldier tried to move toward its own side of the board.
    #[error("Soldiers can only move toward the opponent's side of the board")]
    IllegalDirection,

    #[error("A piece cannot capture a piece of its own color")]
    CannotCaptureOwnPiece,
}

/// Unified error type for the checkers core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckersError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A move path argument could not be read as a position.
    ///
    /// `index` is 1-based in the order the arguments were given.
    #[error("Error in argument {index}, '{argument}': {source}")]
    InvalidMoveArgument {
        index: usize,
        argument: String,
        source: ParseError,
    },

    #[error("Requested rule set '{0}' is not available")]
    UnknownRuleSet(String),

    /// Move number `index` (1-based) of a turn was illegal. The whole turn
    /// was discarded.
    #[error("Error encountered during move {index}: {violation}")]
    MoveRejected {
        index: usize,
        violation: RuleViolation,
    },

    #[error("A turn must contain at least one move")]
    EmptyMoveSequence,

    /// A board was built with a piece off the board.
    #[error("Position {0} cannot hold a piece")]
    InvalidOccupancy(Position),
}

pub type CheckersResult<T> = Result<T, CheckersError>;
