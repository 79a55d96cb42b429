//! Crate root module declarations for the grid_chess position engine.
//!
//! Exposes the position state, move generation, game-state classification,
//! the player/driver glue and notation helpers so the binary, integration
//! tests and benches can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_descriptions;
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
    pub mod perft;
}

pub mod players {
    pub mod player_random;
    pub mod player_trait;
}

pub mod driver {
    pub mod game_driver;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}
