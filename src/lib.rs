//! Crate root module declarations for the Plum Checkers engine.
//!
//! The core lives in `game_state` (pieces, positions, boards and the turn
//! transition), `moves` and `rule_sets`. `utils` holds text conversions used
//! by the command line front end, and `persistence` stores games on disk.

pub mod checkers_errors;

pub mod game_state {
    pub mod board_state;
    pub mod checkers_rules;
    pub mod game_state;
    pub mod pieces;
    pub mod position;
}

pub mod moves {
    pub mod checkers_move;
}

pub mod rule_sets {
    pub mod rule_set_registry;
    pub mod rule_set_trait;
    pub mod standard_rule_set;
}

pub mod utils {
    pub mod move_path;
    pub mod render_board_state;
}

pub mod persistence {
    pub mod config;
    pub mod game_store;
}
