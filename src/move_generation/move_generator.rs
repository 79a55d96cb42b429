//! Pseudo-legal move generation entry point.
//!
//! Dispatches on the kind of the piece standing on a square. Moves produced
//! here may leave the mover's own king in check and never include castling;
//! both are handled by the legal generator.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_shared::{push_offset_moves, KING_OFFSETS};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::Move;

/// Pseudo-legal moves for the piece on `square`; empty for an empty square.
///
/// With `captures_only` set, only moves landing on an enemy piece (plus en
/// passant) are returned.
pub fn pseudo_legal_moves(
    position: &Position,
    square: Square,
    captures_only: bool,
) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    push_pseudo_legal_moves(position, square, captures_only, &mut out);
    out
}

/// Coordinate-checked variant of [`pseudo_legal_moves`].
pub fn pseudo_legal_moves_at(
    position: &Position,
    row: i8,
    col: i8,
    captures_only: bool,
) -> ChessResult<Vec<Move>> {
    let square = Square::new(row, col)?;
    Ok(pseudo_legal_moves(position, square, captures_only))
}

pub(crate) fn push_pseudo_legal_moves(
    position: &Position,
    square: Square,
    captures_only: bool,
    out: &mut Vec<Move>,
) {
    let Some(piece) = position.piece_on(square) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, square, piece.color, captures_only, out),
        PieceKind::Knight => {
            generate_knight_moves(position, square, piece.color, captures_only, out)
        }
        PieceKind::Bishop => {
            generate_bishop_moves(position, square, piece.color, captures_only, out)
        }
        PieceKind::Rook => generate_rook_moves(position, square, piece.color, captures_only, out),
        PieceKind::Queen => generate_queen_moves(position, square, piece.color, captures_only, out),
        PieceKind::King => {
            push_offset_moves(position, square, piece.color, &KING_OFFSETS, captures_only, out)
        }
    }
}
