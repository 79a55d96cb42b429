//! Attack detection.
//!
//! Attacks are found by looking outward from the target square: pawn
//! diagonals, knight and king offsets, then the first piece along each ray.
//! The answer is the same as asking whether any enemy piece has a
//! captures-only move onto a defender standing on the square, but it also
//! holds for empty squares (castling paths).

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::Position};
use crate::move_generation::legal_move_shared::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ROOK_DIRECTIONS,
};

/// First king of `color` in row-major order.
pub fn king_square(position: &Position, color: Color) -> ChessResult<Square> {
    position
        .pieces_of(color)
        .find(|(_, piece)| piece.kind == PieceKind::King)
        .map(|(square, _)| square)
        .ok_or(ChessErrors::MissingKing(color.name()))
}

pub fn king_is_attacked(position: &Position, color: Color) -> ChessResult<bool> {
    let square = king_square(position, color)?;
    Ok(is_square_attacked(position, square, color))
}

/// True if a piece of the color opposite to `defender` attacks `square`.
pub fn is_square_attacked(position: &Position, square: Square, defender: Color) -> bool {
    let mut attacked = false;
    visit_attackers(position, square, defender.opposite(), |_| {
        attacked = true;
        true
    });
    attacked
}

/// Squares holding `attacker` pieces that attack `square`.
pub fn attackers_of(position: &Position, square: Square, attacker: Color) -> Vec<Square> {
    let mut attackers = Vec::new();
    visit_attackers(position, square, attacker, |from| {
        attackers.push(from);
        false
    });
    attackers
}

// `visit` returns true to stop the scan early.
fn visit_attackers(
    position: &Position,
    square: Square,
    attacker: Color,
    mut visit: impl FnMut(Square) -> bool,
) {
    let holds = |from: Square, kinds: &[PieceKind]| {
        matches!(position.piece_on(from), Some(piece) if piece.color == attacker && kinds.contains(&piece.kind))
    };

    // An attacking pawn sits one row behind the target, from its own point of view.
    let pawn_row = -attacker.pawn_direction();
    for col_delta in [-1i8, 1i8] {
        if let Some(from) = square.offset(pawn_row, col_delta) {
            if holds(from, &[PieceKind::Pawn]) && visit(from) {
                return;
            }
        }
    }

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(from) = square.offset(d_row, d_col) {
            if holds(from, &[PieceKind::Knight]) && visit(from) {
                return;
            }
        }
    }

    for &(d_row, d_col) in &KING_OFFSETS {
        if let Some(from) = square.offset(d_row, d_col) {
            if holds(from, &[PieceKind::King]) && visit(from) {
                return;
            }
        }
    }

    let sliders: [(&[(i8, i8)], [PieceKind; 2]); 2] = [
        (&BISHOP_DIRECTIONS, [PieceKind::Bishop, PieceKind::Queen]),
        (&ROOK_DIRECTIONS, [PieceKind::Rook, PieceKind::Queen]),
    ];
    for (directions, kinds) in sliders {
        for &(d_row, d_col) in directions {
            let mut current = square;
            while let Some(from) = current.offset(d_row, d_col) {
                if position.piece_on(from).is_some() {
                    if holds(from, &kinds) && visit(from) {
                        return;
                    }
                    break;
                }
                current = from;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::move_generator::pseudo_legal_moves;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn start_position_attacks() {
        let position = Position::new_game();
        // e3 is covered by the d2/f2 pawns, e6 by black pawns, e4 by nobody
        assert!(is_square_attacked(&position, sq(5, 4), Color::Dark));
        assert!(is_square_attacked(&position, sq(2, 4), Color::Light));
        assert!(!is_square_attacked(&position, sq(4, 4), Color::Dark));
        assert!(!is_square_attacked(&position, sq(4, 4), Color::Light));
        assert_eq!(king_is_attacked(&position, Color::Light), Ok(false));
    }

    #[test]
    fn pawns_do_not_attack_straight_ahead() {
        let position = Position::from_fen("4k3/8/8/8/8/4p3/8/4K3 w - - 0").expect("FEN should parse");
        assert!(!is_square_attacked(&position, sq(6, 4), Color::Light));
        assert!(is_square_attacked(&position, sq(6, 3), Color::Light));
        assert!(is_square_attacked(&position, sq(6, 5), Color::Light));
    }

    #[test]
    fn sliders_are_blocked() {
        // white rook a1, its rank blocked by the c1 knight
        let position = Position::from_fen("4k3/8/8/8/8/7K/8/R1n5 b - - 0").expect("FEN should parse");
        assert!(is_square_attacked(&position, sq(7, 2), Color::Dark));
        assert!(!is_square_attacked(&position, sq(7, 3), Color::Dark));
    }

    #[test]
    fn attackers_of_lists_every_checker() {
        // double check on e8 from the e-file rook and the d6 knight
        let position =
            Position::from_fen("4k3/8/3N4/8/8/8/8/4RK2 b - - 0").expect("FEN should parse");
        let mut attackers = attackers_of(&position, sq(0, 4), Color::Light);
        attackers.sort();
        assert_eq!(attackers, vec![sq(2, 3), sq(7, 4)]);
        assert_eq!(king_is_attacked(&position, Color::Dark), Ok(true));
    }

    #[test]
    fn missing_king_is_reported() {
        let position = Position::from_fen("8/8/8/8/3r4/8/4K3/8 w - - 0").expect("FEN should parse");
        assert_eq!(
            king_is_attacked(&position, Color::Dark),
            Err(ChessErrors::MissingKing("black"))
        );
    }

    #[test]
    fn matches_captures_only_scan_on_occupied_squares() {
        let position = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0",
        )
        .expect("FEN should parse");

        for (target, piece) in Square::all()
            .filter_map(|s| position.piece_on(s).map(|p| (s, p)))
            .collect::<Vec<_>>()
        {
            let attacker = piece.color.opposite();
            let mut by_scan = false;
            for (from, _) in position.pieces_of(attacker) {
                let moves = pseudo_legal_moves(&position, from, true);
                if moves.iter().any(|m| m.to == target && !m.is_en_passant) {
                    by_scan = true;
                    break;
                }
            }
            assert_eq!(
                is_square_attacked(&position, target, piece.color),
                by_scan,
                "attack mismatch on {target}"
            );
        }
    }
}
