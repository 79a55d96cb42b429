use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;

pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}

/// Resolve `e2e4` / `e7e8q` style text against the legal moves of the piece
/// on the source square, so the special-move flags come from the position.
pub fn long_algebraic_to_move(position: &mut Position, long_algebraic: &str) -> ChessResult<Move> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid long algebraic move: {long_algebraic}"
        )));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(ch) => Some(
            PieceKind::from_fen_char(ch)
                .filter(|kind| kind.is_promotion_target())
                .ok_or_else(|| {
                    ChessErrors::InvalidAlgebraic(format!("invalid promotion piece: {ch}"))
                })?,
        ),
    };

    legal_moves(position, from)?
        .into_iter()
        .find(|mv| mv.to == to && mv.promotion == promotion)
        .ok_or_else(|| ChessErrors::IllegalMove(text.to_owned()))
}
