//! Move application with snapshot-and-rollback undo.
//!
//! `make_move` records a full snapshot before touching the board. If any
//! check fails part-way through, the snapshot is restored and the history is
//! left at its previous depth, so a failed call is invisible to the caller.

use log::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::Position};
use crate::moves::move_descriptions::Move;

pub fn make_move(position: &mut Position, mv: Move) -> ChessResult<()> {
    let snapshot = position.snapshot();
    match apply_move(position, mv) {
        Ok(()) => {
            position.history.push(snapshot);
            Ok(())
        }
        Err(error) => {
            debug!("rolling back {mv}: {error}");
            position.restore(snapshot);
            Err(error)
        }
    }
}

pub fn undo_move(position: &mut Position) -> ChessResult<()> {
    let snapshot = position.history.pop().ok_or(ChessErrors::EmptyHistory)?;
    position.restore(snapshot);
    Ok(())
}

fn apply_move(position: &mut Position, mv: Move) -> ChessResult<()> {
    let mut piece = position
        .piece_on(mv.from)
        .ok_or(ChessErrors::EmptySourceSquare(mv.from))?;
    let mover = piece.color;
    if mover != position.side_to_move {
        return Err(ChessErrors::WrongSideToMove(mv.from));
    }

    position.set_piece(mv.from, None);

    let mut is_capture = false;

    if mv.is_en_passant {
        if position.en_passant_target.is_none() {
            return Err(ChessErrors::MissingEnPassantTarget);
        }
        let captured_square = Square::from_parts(mv.from.row(), mv.to.col());
        position.set_piece(captured_square, None);
        is_capture = true;
    }

    if mv.is_castle() {
        if piece.kind != PieceKind::King {
            return Err(ChessErrors::InvalidCastle(mv.from));
        }
        let (rook_col, new_rook_col) = if mv.is_kingside_castle {
            (KINGSIDE_ROOK_COL, mv.to.col() as i8 - 1)
        } else {
            (QUEENSIDE_ROOK_COL, mv.to.col() as i8 + 1)
        };
        let rook_square = Square::from_parts(mv.from.row(), rook_col);
        let rook = Piece::new(mover, PieceKind::Rook);
        if position.piece_on(rook_square) != Some(rook) {
            return Err(ChessErrors::MissingCastlingRook(rook_square));
        }
        let new_rook_square = Square::new(mv.from.row() as i8, new_rook_col)?;
        position.set_piece(rook_square, None);
        position.set_piece(new_rook_square, Some(rook));
    }

    let target = position.piece_on(mv.to);
    if let Some(target) = target {
        if target.kind == PieceKind::King {
            return Err(ChessErrors::KingCapture(mv.to));
        }
        is_capture = true;
    }

    let moved_kind = piece.kind;
    if let Some(promotion) = mv.promotion {
        if piece.kind != PieceKind::Pawn {
            return Err(ChessErrors::InvalidPromotion(format!(
                "{mv}: only pawns promote"
            )));
        }
        if mv.to.row() != mover.opposite().back_row() {
            return Err(ChessErrors::InvalidPromotion(format!(
                "{mv}: promotion away from the last rank"
            )));
        }
        if !promotion.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotion(format!(
                "{mv}: cannot promote to {promotion:?}"
            )));
        }
        piece = Piece::new(mover, promotion);
    }

    position.set_piece(mv.to, Some(piece));

    if moved_kind == PieceKind::Pawn || is_capture {
        position.halfmove_clock = 0;
    } else {
        position.halfmove_clock = position.halfmove_clock.saturating_add(1);
    }

    update_castling_rights(position, mover, moved_kind, mv);

    let is_double_step =
        moved_kind == PieceKind::Pawn && (mv.to.row() as i8 - mv.from.row() as i8).abs() == 2;
    position.en_passant_target = if is_double_step {
        Some(Square::from_parts(
            (mv.from.row() + mv.to.row()) / 2,
            mv.from.col(),
        ))
    } else {
        None
    };

    position.side_to_move = mover.opposite();

    Ok(())
}

fn update_castling_rights(position: &mut Position, mover: Color, moved_kind: PieceKind, mv: Move) {
    if moved_kind == PieceKind::King {
        position.castling_rights.clear_color(mover);
    }

    if moved_kind == PieceKind::Rook && mv.from.row() == mover.back_row() {
        position.castling_rights.clear_for_rook_corner(mv.from);
    }

    // A rook captured on its corner takes its right with it.
    if mv.to.row() == mover.opposite().back_row() {
        position.castling_rights.clear_for_rook_corner(mv.to);
    }
}
