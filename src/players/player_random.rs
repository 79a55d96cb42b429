//! Random-move player.
//!
//! Selects uniformly from the legal moves. Seeded instances are reproducible,
//! which the driver tests rely on.

use log::trace;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::players::player_trait::Player;

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, position: &mut Position) -> ChessResult<Option<Move>> {
        let legal_moves = all_legal_moves(position)?;
        trace!("random player choosing among {} moves", legal_moves.len());
        Ok(legal_moves.as_slice().choose(&mut self.rng).copied())
    }
}
