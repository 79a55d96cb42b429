//! Player abstraction used by the game driver.
//!
//! A player receives the live position and answers with one of its legal
//! moves. It may make and undo moves to look ahead, but must hand the
//! position back exactly as it found it.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::Position;
use crate::moves::move_descriptions::Move;

pub trait Player: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// `Ok(None)` means the player has nothing to play.
    fn choose_move(&mut self, position: &mut Position) -> ChessResult<Option<Move>>;
}
