//! Terminal-oriented board renderer.
//!
//! Rows are printed from 7 down to 0 so White's home rows end up at the
//! bottom. Light squares are filled with `***`; dark squares show the
//! one-letter code of their occupant or stay blank.

use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_rules::BOARD_SIZE;
use crate::game_state::position::Position;

const CELL_WIDTH: usize = 4;

/// Render the board to a multi-line string.
pub fn render_board_state(board_state: &BoardState) -> String {
    let border = format!("   {}", "*".repeat(usize::from(BOARD_SIZE) * CELL_WIDTH + 1));
    let mut out = String::new();

    out.push_str(&border);
    for row in (0..BOARD_SIZE).rev() {
        out.push_str(&format!("\n {row} |"));
        for column in 0..BOARD_SIZE {
            out.push_str(&square_cell(board_state, Position::new(row, column)));
            out.push('|');
        }
        out.push('\n');
        out.push_str(&border);
    }

    out.push_str("\n  ");
    for column in 0..BOARD_SIZE {
        out.push_str(&format!("   {column}"));
    }
    out.push('\n');

    out
}

fn square_cell(board_state: &BoardState, position: Position) -> String {
    if !position.is_dark_square() {
        return "***".to_owned();
    }
    match board_state.occupant_at(position) {
        Some(piece) => format!(" {} ", piece.symbol()),
        None => "   ".to_owned(),
    }
}
