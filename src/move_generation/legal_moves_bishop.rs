use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_shared::{push_ray_moves, BISHOP_DIRECTIONS};
use crate::moves::move_descriptions::Move;

pub fn generate_bishop_moves(
    position: &Position,
    from: Square,
    color: Color,
    captures_only: bool,
    out: &mut Vec<Move>,
) {
    push_ray_moves(position, from, color, &BISHOP_DIRECTIONS, captures_only, out);
}
