use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::move_descriptions::Move;

/// Castling moves for the king of `color` standing on `king_from`.
///
/// A side may castle when its right is still set, the king and rook sit on
/// their home squares, every square between them is empty, and neither the
/// king's square nor the two squares it crosses are attacked.
pub fn generate_castling_moves(
    position: &Position,
    king_from: Square,
    color: Color,
    out: &mut Vec<Move>,
) {
    let home_row = color.back_row();
    if king_from != Square::from_parts(home_row, KING_HOME_COL) {
        return;
    }

    let rights = position.castling_rights;
    let rook = Some(Piece::new(color, PieceKind::Rook));
    let is_empty = |col: u8| position.piece_on(Square::from_parts(home_row, col)).is_none();
    let is_safe = |col: u8| !is_square_attacked(position, Square::from_parts(home_row, col), color);

    if rights.kingside(color)
        && position.piece_on(Square::from_parts(home_row, KINGSIDE_ROOK_COL)) == rook
        && (KING_HOME_COL + 1..KINGSIDE_ROOK_COL).all(is_empty)
        && (KING_HOME_COL..=KING_HOME_COL + 2).all(is_safe)
    {
        out.push(Move::kingside_castle(
            king_from,
            Square::from_parts(home_row, KING_HOME_COL + 2),
        ));
    }

    if rights.queenside(color)
        && position.piece_on(Square::from_parts(home_row, QUEENSIDE_ROOK_COL)) == rook
        && (QUEENSIDE_ROOK_COL + 1..KING_HOME_COL).all(is_empty)
        && (KING_HOME_COL - 2..=KING_HOME_COL).all(is_safe)
    {
        out.push(Move::queenside_castle(
            king_from,
            Square::from_parts(home_row, KING_HOME_COL - 2),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_castling_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::Position;
    use crate::moves::move_descriptions::Move;

    fn castles(fen: &str, color: Color) -> Vec<Move> {
        let position = Position::from_fen(fen).expect("FEN should parse");
        let row = color.back_row() as i8;
        let from = Square::new(row, 4).expect("king home square is on the board");
        let mut out = Vec::new();
        generate_castling_moves(&position, from, color, &mut out);
        out
    }

    #[test]
    fn both_sides_available() {
        let moves = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0", Color::Light);
        assert_eq!(moves.len(), 2);
        assert!(moves[0].is_kingside_castle);
        assert_eq!(moves[0].to, Square::new(7, 6).expect("g1 is on the board"));
        assert!(moves[1].is_queenside_castle);
        assert_eq!(moves[1].to, Square::new(7, 2).expect("c1 is on the board"));

        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0", Color::Dark).len(), 2);
    }

    #[test]
    fn no_castling_out_of_or_through_check() {
        // rook on e-file gives check
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0", Color::Light).is_empty());
        // rook on f-file covers f1
        let through = castles("5rk1/8/8/8/8/8/8/R3K2R w KQ - 0", Color::Light);
        assert_eq!(through.len(), 1);
        assert!(through[0].is_queenside_castle);
    }

    #[test]
    fn b_file_may_be_attacked_but_not_occupied() {
        // b1 is attacked but the king never crosses it
        let attacked = castles("1r4k1/8/8/8/8/8/8/R3K3 w Q - 0", Color::Light);
        assert_eq!(attacked.len(), 1);
        // a knight on b1 blocks the path
        assert!(castles("6k1/8/8/8/8/8/8/RN2K3 w Q - 0", Color::Light).is_empty());
    }

    #[test]
    fn rights_and_rook_are_required() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w - - 0", Color::Light).is_empty());
        assert!(castles("6k1/8/8/8/8/8/8/4K3 w KQ - 0", Color::Light).is_empty());
    }
}
