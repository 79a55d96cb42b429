use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_shared::is_enemy_on;
use crate::moves::move_descriptions::Move;

pub fn generate_pawn_moves(
    position: &Position,
    from: Square,
    color: Color,
    captures_only: bool,
    out: &mut Vec<Move>,
) {
    let direction = color.pawn_direction();
    let promotion_row = color.opposite().back_row();
    let start_row = match color {
        Color::Light => 6,
        Color::Dark => 1,
    };

    if !captures_only {
        if let Some(to) = from.offset(direction, 0) {
            if position.piece_on(to).is_none() {
                if to.row() == promotion_row {
                    push_promotions(from, to, out);
                } else {
                    out.push(Move::new(from, to));

                    if from.row() == start_row {
                        if let Some(two_step) = to.offset(direction, 0) {
                            if position.piece_on(two_step).is_none() {
                                out.push(Move::new(from, two_step));
                            }
                        }
                    }
                }
            }
        }
    }

    for col_delta in [-1i8, 1i8] {
        let Some(to) = from.offset(direction, col_delta) else {
            continue;
        };

        if is_enemy_on(position, to, color) {
            if to.row() == promotion_row {
                push_promotions(from, to, out);
            } else {
                out.push(Move::new(from, to));
            }
        }
    }

    if let Some(target) = position.en_passant_target {
        let capture_row = match color {
            Color::Light => 3,
            Color::Dark => 4,
        };
        let adjacent = (from.col() as i8 - target.col() as i8).abs() == 1;
        let ahead = target.row() as i8 == from.row() as i8 + direction;
        if from.row() == capture_row && adjacent && ahead {
            out.push(Move::en_passant(from, target));
        }
    }
}

fn push_promotions(from: Square, to: Square, out: &mut Vec<Move>) {
    for kind in PROMOTION_KINDS {
        out.push(Move::promotion(from, to, kind));
    }
}
