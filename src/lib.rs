//! Crate root module declarations for the duel chess engine.
//!
//! Exposes the board model, the legality engine, evaluation and the
//! heuristic opponent, plus terminal helpers, so the binaries, benchmarks and
//! any embedding front end can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_config;
    pub mod game_outcome;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
}

pub mod search {
    pub mod board_scoring;
    pub mod move_scoring;
}

pub mod engines {
    pub mod engine_heuristic;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod match_harness;
    pub mod render_game_state;
}
