//! Full legal move generation pipeline.
//!
//! Pseudo-legal candidates are applied with `make_move`, rejected when they
//! leave the mover's king attacked, and rolled back with `undo_move`. Castling
//! is synthesized separately for kings because its legality is decided
//! before the move rather than after it.

use log::warn;

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_apply::{make_move, undo_move};
use crate::move_generation::legal_move_checks::king_is_attacked;
use crate::move_generation::legal_moves_king::generate_castling_moves;
use crate::move_generation::move_generator::push_pseudo_legal_moves;
use crate::moves::move_descriptions::Move;

/// Legal moves for the piece on `square`.
///
/// An empty square, or a piece of the side not to move, yields no moves. The
/// position is returned to its original state before this function returns,
/// including when an error is propagated.
pub fn legal_moves(position: &mut Position, square: Square) -> ChessResult<Vec<Move>> {
    let mut out = Vec::new();
    push_legal_moves(position, square, &mut out)?;
    Ok(out)
}

/// Legal moves for every piece of the side to move, in row-major order of
/// the source square.
pub fn all_legal_moves(position: &mut Position) -> ChessResult<Vec<Move>> {
    let mover = position.side_to_move;
    let sources: Vec<Square> = position.pieces_of(mover).map(|(square, _)| square).collect();

    let mut out = Vec::with_capacity(64);
    for square in sources {
        push_legal_moves(position, square, &mut out)?;
    }
    Ok(out)
}

fn push_legal_moves(position: &mut Position, square: Square, out: &mut Vec<Move>) -> ChessResult<()> {
    let Some(piece) = position.piece_on(square) else {
        return Ok(());
    };
    if piece.color != position.side_to_move {
        return Ok(());
    }

    let mut candidates = Vec::with_capacity(32);
    push_pseudo_legal_moves(position, square, false, &mut candidates);

    for mv in candidates {
        // Only reachable from positions where the enemy king can be taken.
        if let Err(error) = make_move(position, mv) {
            warn!("skipping candidate {mv}: {error}");
            continue;
        }
        let exposed = king_is_attacked(position, piece.color);
        undo_move(position)?;
        if !exposed? {
            out.push(mv);
        }
    }

    if piece.kind == PieceKind::King {
        generate_castling_moves(position, square, piece.color, out);
    }

    Ok(())
}
