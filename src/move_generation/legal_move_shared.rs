use crate::game_state::{chess_types::*, game_state::Position};
use crate::moves::move_descriptions::Move;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Single-step moves to each offset that is on the board and not held by a
/// piece of `color`.
pub fn push_offset_moves(
    position: &Position,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    captures_only: bool,
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match position.piece_on(to) {
            None if !captures_only => out.push(Move::new(from, to)),
            Some(target) if target.color != color => out.push(Move::new(from, to)),
            _ => {}
        }
    }
}

/// Sliding moves along each direction until the edge, stopping before an own
/// piece and after an enemy one.
pub fn push_ray_moves(
    position: &Position,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    captures_only: bool,
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match position.piece_on(to) {
                None => {
                    if !captures_only {
                        out.push(Move::new(from, to));
                    }
                }
                Some(target) => {
                    if target.color != color {
                        out.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

#[inline]
pub fn is_enemy_on(position: &Position, square: Square, color: Color) -> bool {
    matches!(position.piece_on(square), Some(piece) if piece.color != color)
}
