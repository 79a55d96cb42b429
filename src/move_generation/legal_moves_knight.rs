use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_shared::{push_offset_moves, KNIGHT_OFFSETS};
use crate::moves::move_descriptions::Move;

pub fn generate_knight_moves(
    position: &Position,
    from: Square,
    color: Color,
    captures_only: bool,
    out: &mut Vec<Move>,
) {
    push_offset_moves(position, from, color, &KNIGHT_OFFSETS, captures_only, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::Position;

    #[test]
    fn corner_knight_has_two_targets() {
        let position = Position::from_fen("N3k3/8/8/8/8/8/8/4K3 w - - 0").expect("FEN should parse");
        let from = Square::new(0, 0).expect("a8 is on the board");
        let mut moves = Vec::new();
        generate_knight_moves(&position, from, Color::Light, false, &mut moves);
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn starting_knight_skips_own_pawns() {
        let position = Position::new_game();
        let from = Square::new(7, 1).expect("b1 is on the board");
        let mut moves = Vec::new();
        generate_knight_moves(&position, from, Color::Light, false, &mut moves);
        assert_eq!(moves.len(), 2);

        let mut captures = Vec::new();
        generate_knight_moves(&position, from, Color::Light, true, &mut captures);
        assert!(captures.is_empty());
    }
}
