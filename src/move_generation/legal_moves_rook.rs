use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_shared::{push_ray_moves, ROOK_DIRECTIONS};
use crate::moves::move_descriptions::Move;

pub fn generate_rook_moves(
    position: &Position,
    from: Square,
    color: Color,
    captures_only: bool,
    out: &mut Vec<Move>,
) {
    push_ray_moves(position, from, color, &ROOK_DIRECTIONS, captures_only, out);
}
