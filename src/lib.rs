//! Crate root module declarations for the ray-cast chess rules engine.
//!
//! The engine answers, for any board position, where every piece may move and
//! whether a square is attacked, and drives a click-by-click turn loop over
//! that. Rendering and input translation belong to the caller.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod directions;
    pub mod geometry;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_index;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod legal_moves_rays;
    pub mod move_generator;
    pub mod perft;
}

pub mod turn {
    pub mod turn_controller;
}

pub mod utils {
    pub mod board_generator;
    pub mod board_parser;
    pub mod random_playout;
    pub mod render_game_state;
}
