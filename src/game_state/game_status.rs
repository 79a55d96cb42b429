//! Game-state classification.

use std::fmt;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVE_LIMIT, REPETITION_DRAW_COUNT};
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_checks::king_is_attacked;
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    DrawFiftyMove,
    DrawThreefoldRepetition,
}

impl GameStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::DrawFiftyMove => "draw_50_move",
            GameStatus::DrawThreefoldRepetition => "draw_threefold_repetition",
        }
    }

    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies the position for the side to move.
///
/// Checkmate and stalemate win over the fifty-move draw, which in turn wins
/// over threefold repetition.
pub fn game_status(position: &mut Position) -> ChessResult<GameStatus> {
    let mover = position.side_to_move;
    if all_legal_moves(position)?.is_empty() {
        return Ok(if king_is_attacked(position, mover)? {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        });
    }

    if position.halfmove_clock >= FIFTY_MOVE_HALFMOVE_LIMIT {
        return Ok(GameStatus::DrawFiftyMove);
    }

    if repetition_count(position) >= REPETITION_DRAW_COUNT {
        return Ok(GameStatus::DrawThreefoldRepetition);
    }

    Ok(GameStatus::Ongoing)
}

/// Occurrences of the current repetition key, counting the current position
/// once plus every matching snapshot in the history.
pub fn repetition_count(position: &Position) -> usize {
    let key = position.repetition_key();
    1 + position
        .history
        .iter()
        .filter(|snapshot| snapshot.repetition_key() == key)
        .count()
}
