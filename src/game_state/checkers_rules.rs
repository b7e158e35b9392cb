//! Board geometry constants shared by every rule set.

/// Rows and columns on the board.
pub const BOARD_SIZE: u8 = 8;

/// Row closest to White's side.
pub const WHITE_BACK_ROW: u8 = 0;

/// Row closest to Black's side.
pub const BLACK_BACK_ROW: u8 = BOARD_SIZE - 1;

/// Number of rows each side fills at the start of a standard game.
pub const STARTING_ROWS_PER_SIDE: u8 = 3;

/// Name under which the standard rule set is registered.
pub const STANDARD_RULE_SET_NAME: &str = "StandardRuleSet";
