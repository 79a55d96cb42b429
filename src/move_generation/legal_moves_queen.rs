use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_shared::{
    push_ray_moves, BISHOP_DIRECTIONS, ROOK_DIRECTIONS,
};
use crate::moves::move_descriptions::Move;

pub fn generate_queen_moves(
    position: &Position,
    from: Square,
    color: Color,
    captures_only: bool,
    out: &mut Vec<Move>,
) {
    push_ray_moves(position, from, color, &BISHOP_DIRECTIONS, captures_only, out);
    push_ray_moves(position, from, color, &ROOK_DIRECTIONS, captures_only, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::Position;

    #[test]
    fn centre_queen_on_empty_board_reaches_27_squares() {
        let position = Position::from_fen("k7/8/8/8/3Q4/8/8/7K w - - 0").expect("FEN should parse");
        let from = Square::new(4, 3).expect("d4 is on the board");
        let mut moves = Vec::new();
        generate_queen_moves(&position, from, Color::Light, false, &mut moves);
        // neither king stands on a queen line from d4
        assert_eq!(moves.len(), 27);
    }
}
