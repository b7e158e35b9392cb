//! The standard rule set.
//!
//! - No moves are forced.
//! - A simple move is one square diagonally onto an empty square.
//! - A capture jumps diagonally over an adjacent enemy piece onto the empty
//!   square behind it; the jumped piece is removed.
//! - Soldiers only move toward the opponent's side, for simple moves and
//!   captures alike. Queens move in any diagonal direction.
//! - A soldier reaching the opponent's back row becomes a queen.
//!
//! A turn with several captures is checked one move at a time, each against
//! the board left by the previous move, so a soldier promoted mid-turn keeps
//! moving as a queen.

use crate::checkers_errors::RuleViolation;
use crate::game_state::board_state::{BoardState, BoardStateUpdates};
use crate::game_state::checkers_rules::{
    BLACK_BACK_ROW, BOARD_SIZE, STANDARD_RULE_SET_NAME, STARTING_ROWS_PER_SIDE, WHITE_BACK_ROW,
};
use crate::game_state::pieces::{Color, Piece, Rank};
use crate::game_state::position::Position;
use crate::moves::checkers_move::Move;
use crate::rule_sets::rule_set_trait::RuleSet;

/// Geometry of a move that passed the shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveShape {
    Simple,
    Capture { jumped: Position },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardRuleSet;

impl RuleSet for StandardRuleSet {
    fn name(&self) -> &'static str {
        STANDARD_RULE_SET_NAME
    }

    fn try_make_move(
        &self,
        mv: &Move,
        board_state: &BoardState,
        current_player: Color,
    ) -> Result<BoardStateUpdates, RuleViolation> {
        let start = mv.starting_position;
        let target = mv.target_position;

        if target == start {
            return Err(RuleViolation::NullMove);
        }
        let occupant = board_state
            .occupant_at(start)
            .ok_or(RuleViolation::NoPieceAtStart)?;
        if occupant.color != current_player {
            return Err(RuleViolation::WrongColor);
        }

        let shape = classify_move(start, target, board_state)?;
        if board_state.is_occupied(target) {
            return Err(RuleViolation::TargetOccupied);
        }
        if !direction_allowed(occupant, start, target) {
            return Err(RuleViolation::IllegalDirection);
        }

        let mut updates = BoardStateUpdates::new().vacate(start);
        if let MoveShape::Capture { jumped } = shape {
            let captured = board_state
                .occupant_at(jumped)
                .ok_or(RuleViolation::IllegalGeometry)?;
            if captured.color == occupant.color {
                return Err(RuleViolation::CannotCaptureOwnPiece);
            }
            updates = updates.vacate(jumped);
        }

        let landed = if occupant.rank == Rank::Soldier && target.row == occupant.color.promotion_row() {
            occupant.promoted()
        } else {
            occupant
        };

        Ok(updates.place(target, landed))
    }

    fn initial_game_occupancies(&self) -> BoardState {
        let mut setup = BoardStateUpdates::new();
        for offset in 0..STARTING_ROWS_PER_SIDE {
            for position in dark_squares_in_row(WHITE_BACK_ROW + offset) {
                setup = setup.place(position, Piece::WHITE_SOLDIER);
            }
            for position in dark_squares_in_row(BLACK_BACK_ROW - offset) {
                setup = setup.place(position, Piece::BLACK_SOLDIER);
            }
        }
        BoardState::empty().apply(&setup)
    }

    fn first_player(&self) -> Color {
        Color::White
    }
}

fn dark_squares_in_row(row: u8) -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE)
        .map(move |column| Position::new(row, column))
        .filter(|position| position.is_dark_square())
}

/// Sorts a move into simple step or capture, or rejects its geometry.
///
/// A capture needs some piece on the jumped square and an empty target; whose
/// piece was jumped gets checked later.
fn classify_move(start: Position, target: Position, board_state: &BoardState) -> Result<MoveShape, RuleViolation> {
    if !target.is_on_board() {
        return Err(RuleViolation::IllegalGeometry);
    }
    let (d_row, d_column) = start.delta_to(target);
    match (d_row.abs(), d_column.abs()) {
        (1, 1) => Ok(MoveShape::Simple),
        (2, 2) => {
            let jumped = start.midpoint(target).ok_or(RuleViolation::IllegalGeometry)?;
            if board_state.is_occupied(jumped) && !board_state.is_occupied(target) {
                Ok(MoveShape::Capture { jumped })
            } else {
                Err(RuleViolation::IllegalGeometry)
            }
        }
        _ => Err(RuleViolation::IllegalGeometry),
    }
}

fn direction_allowed(piece: Piece, start: Position, target: Position) -> bool {
    match piece.rank {
        Rank::Queen => true,
        Rank::Soldier => {
            let (d_row, _) = start.delta_to(target);
            d_row.signum() == i16::from(piece.color.forward())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board_state::OccupancyUpdate;

    fn pos(row: u8, column: u8) -> Position {
        Position::new(row, column)
    }

    fn mv(from: (u8, u8), to: (u8, u8)) -> Move {
        Move::new(pos(from.0, from.1), pos(to.0, to.1))
    }

    fn board(pairs: &[((u8, u8), Piece)]) -> BoardState {
        BoardState::from_occupancies(pairs.iter().map(|&((r, c), piece)| (pos(r, c), piece)))
            .expect("test board should be valid")
    }

    fn try_move(board_state: &BoardState, from: (u8, u8), to: (u8, u8), player: Color) -> Result<BoardStateUpdates, RuleViolation> {
        StandardRuleSet.try_make_move(&mv(from, to), board_state, player)
    }

    #[test]
    fn white_moves_first() {
        assert_eq!(StandardRuleSet.first_player(), Color::White);
        assert_eq!(StandardRuleSet.name(), "StandardRuleSet");
    }

    #[test]
    fn initial_layout_has_twelve_soldiers_per_side_on_dark_squares() {
        let initial = StandardRuleSet.initial_game_occupancies();
        assert_eq!(initial.count(Color::White), 12);
        assert_eq!(initial.count(Color::Black), 12);
        for (position, piece) in initial.pieces() {
            assert!(position.is_dark_square(), "{position} is a light square");
            assert_eq!(piece.rank, Rank::Soldier);
            match piece.color {
                Color::White => assert!(position.row <= 2),
                Color::Black => assert!(position.row >= 5),
            }
        }
        assert!(initial.pieces().all(|(p, _)| p.row != 3 && p.row != 4));
        assert_eq!(initial.occupant_at(pos(0, 0)), Some(Piece::WHITE_SOLDIER));
        assert_eq!(initial.occupant_at(pos(1, 1)), Some(Piece::WHITE_SOLDIER));
        assert_eq!(initial.occupant_at(pos(7, 7)), Some(Piece::BLACK_SOLDIER));
    }

    #[test]
    fn simple_move_vacates_start_and_fills_target() {
        let b = board(&[((1, 0), Piece::WHITE_SOLDIER)]);
        let updates = try_move(&b, (1, 0), (2, 1), Color::White).expect("legal simple move");
        assert_eq!(updates.len(), 2);
        assert_eq!(updates.get(pos(1, 0)), Some(OccupancyUpdate::Vacate));
        assert_eq!(updates.get(pos(2, 1)), Some(OccupancyUpdate::Place(Piece::WHITE_SOLDIER)));

        let next = b.apply(&updates);
        assert_eq!(next.occupant_at(pos(1, 0)), None);
        assert_eq!(next.occupant_at(pos(2, 1)), Some(Piece::WHITE_SOLDIER));
    }

    #[test]
    fn capture_removes_the_jumped_piece() {
        let b = board(&[((2, 1), Piece::WHITE_SOLDIER), ((3, 2), Piece::BLACK_SOLDIER)]);
        let updates = try_move(&b, (2, 1), (4, 3), Color::White).expect("legal capture");
        let next = b.apply(&updates);
        assert_eq!(next.occupant_at(pos(2, 1)), None);
        assert_eq!(next.occupant_at(pos(3, 2)), None);
        assert_eq!(next.occupant_at(pos(4, 3)), Some(Piece::WHITE_SOLDIER));
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn black_soldiers_move_down_the_board() {
        let b = board(&[((5, 1), Piece::BLACK_SOLDIER), ((4, 2), Piece::WHITE_SOLDIER)]);
        assert!(try_move(&b, (5, 1), (4, 0), Color::Black).is_ok());
        assert!(try_move(&b, (5, 1), (3, 3), Color::Black).is_ok());
        assert_eq!(try_move(&b, (5, 1), (6, 0), Color::Black), Err(RuleViolation::IllegalDirection));
    }

    #[test]
    fn null_move_is_rejected_before_anything_else() {
        let b = BoardState::empty();
        assert_eq!(try_move(&b, (3, 3), (3, 3), Color::White), Err(RuleViolation::NullMove));
    }

    #[test]
    fn moving_from_an_empty_square_is_rejected() {
        let b = board(&[((0, 0), Piece::WHITE_SOLDIER)]);
        assert_eq!(try_move(&b, (2, 2), (3, 3), Color::White), Err(RuleViolation::NoPieceAtStart));
        assert_eq!(try_move(&b, (9, 9), (8, 8), Color::White), Err(RuleViolation::NoPieceAtStart));
    }

    #[test]
    fn moving_the_opponents_piece_is_rejected() {
        let b = board(&[((5, 1), Piece::BLACK_SOLDIER)]);
        assert_eq!(try_move(&b, (5, 1), (4, 0), Color::White), Err(RuleViolation::WrongColor));
    }

    #[test]
    fn non_diagonal_and_long_moves_are_rejected() {
        let b = board(&[((2, 2), Piece::WHITE_QUEEN)]);
        for to in [(3, 2), (2, 4), (5, 5), (4, 3), (6, 2)] {
            assert_eq!(try_move(&b, (2, 2), to, Color::White), Err(RuleViolation::IllegalGeometry), "move to {to:?}");
        }
    }

    #[test]
    fn jumping_over_an_empty_square_is_rejected() {
        let b = board(&[((2, 2), Piece::WHITE_SOLDIER)]);
        assert_eq!(try_move(&b, (2, 2), (4, 4), Color::White), Err(RuleViolation::IllegalGeometry));
    }

    #[test]
    fn moving_off_the_board_is_rejected() {
        let b = board(&[((7, 7), Piece::WHITE_QUEEN)]);
        assert_eq!(try_move(&b, (7, 7), (8, 8), Color::White), Err(RuleViolation::IllegalGeometry));
    }

    #[test]
    fn occupied_targets_are_rejected() {
        let b = board(&[
            ((2, 2), Piece::WHITE_SOLDIER),
            ((3, 3), Piece::WHITE_SOLDIER),
            ((3, 1), Piece::BLACK_SOLDIER),
            ((4, 0), Piece::BLACK_SOLDIER),
        ]);
        assert_eq!(try_move(&b, (2, 2), (3, 3), Color::White), Err(RuleViolation::TargetOccupied));
        assert_eq!(try_move(&b, (2, 2), (4, 0), Color::White), Err(RuleViolation::IllegalGeometry));
    }

    #[test]
    fn capture_onto_an_occupied_square_is_illegal_geometry() {
        let b = board(&[
            ((2, 1), Piece::WHITE_SOLDIER),
            ((3, 2), Piece::BLACK_SOLDIER),
            ((4, 3), Piece::BLACK_SOLDIER),
        ]);
        assert_eq!(try_move(&b, (2, 1), (4, 3), Color::White), Err(RuleViolation::IllegalGeometry));
    }

    #[test]
    fn soldiers_cannot_move_backwards() {
        let b = board(&[((3, 3), Piece::WHITE_SOLDIER), ((2, 2), Piece::BLACK_SOLDIER)]);
        assert_eq!(try_move(&b, (3, 3), (2, 4), Color::White), Err(RuleViolation::IllegalDirection));
        assert_eq!(try_move(&b, (3, 3), (1, 1), Color::White), Err(RuleViolation::IllegalDirection));
    }

    #[test]
    fn queens_move_in_every_diagonal_direction() {
        let b = board(&[((3, 3), Piece::BLACK_QUEEN), ((2, 2), Piece::WHITE_SOLDIER)]);
        for to in [(4, 4), (4, 2), (2, 4), (1, 1)] {
            assert!(try_move(&b, (3, 3), to, Color::Black).is_ok(), "queen move to {to:?}");
        }
    }

    #[test]
    fn capturing_own_piece_is_rejected() {
        let b = board(&[((2, 1), Piece::WHITE_SOLDIER), ((3, 2), Piece::WHITE_SOLDIER)]);
        assert_eq!(try_move(&b, (2, 1), (4, 3), Color::White), Err(RuleViolation::CannotCaptureOwnPiece));
    }

    #[test]
    fn soldiers_are_promoted_on_the_back_row() {
        let b = board(&[((6, 0), Piece::WHITE_SOLDIER), ((1, 1), Piece::BLACK_SOLDIER), ((6, 6), Piece::WHITE_SOLDIER)]);

        let white = b.apply(&try_move(&b, (6, 0), (7, 1), Color::White).expect("white reaches row 7"));
        assert_eq!(white.occupant_at(pos(7, 1)), Some(Piece::WHITE_QUEEN));

        let black = b.apply(&try_move(&b, (1, 1), (0, 0), Color::Black).expect("black reaches row 0"));
        assert_eq!(black.occupant_at(pos(0, 0)), Some(Piece::BLACK_QUEEN));

        let corner = b.apply(&try_move(&b, (6, 6), (7, 7), Color::White).expect("legal"));
        assert_eq!(corner.occupant_at(pos(7, 7)), Some(Piece::WHITE_QUEEN));

        let promoted_then_back = try_move(&white, (7, 1), (6, 2), Color::White);
        assert!(promoted_then_back.is_ok());
    }

    #[test]
    fn queens_are_not_demoted_on_their_own_back_row() {
        let b = board(&[((1, 1), Piece::WHITE_QUEEN)]);
        let next = b.apply(&try_move(&b, (1, 1), (0, 0), Color::White).expect("legal"));
        assert_eq!(next.occupant_at(pos(0, 0)), Some(Piece::WHITE_QUEEN));
    }

    #[test]
    fn validation_never_mutates_the_board() {
        let b = board(&[((2, 1), Piece::WHITE_SOLDIER), ((3, 2), Piece::BLACK_SOLDIER)]);
        let snapshot = b.clone();
        let _ = try_move(&b, (2, 1), (4, 3), Color::White);
        let _ = try_move(&b, (3, 2), (2, 1), Color::Black);
        assert_eq!(b, snapshot);
    }
}
