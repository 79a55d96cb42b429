use crate::game_state::{chess_types::*, game_state::Position};
use crate::utils::algebraic::square_to_algebraic;

/// Five-field FEN for the tracked state: board, side, castling, en passant,
/// halfmove clock.
pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(&position.board);
    let side_to_move = match position.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(position.castling_rights);
    let en_passant = position
        .en_passant_target
        .map(square_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{} {} {} {} {}",
        board, side_to_move, castling, en_passant, position.halfmove_clock
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for (row, rank) in board.iter().enumerate() {
        let mut empty_count = 0u8;

        for square in rank {
            match square {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights.light_kingside {
        out.push('K');
    }
    if rights.light_queenside {
        out.push('Q');
    }
    if rights.dark_kingside {
        out.push('k');
    }
    if rights.dark_queenside {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color};
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let generated = generate_fen(&parsed);

        assert_eq!(generated, STARTING_POSITION_FEN);

        let reparsed = parse_fen(&generated).expect("generated FEN should parse");
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn round_trip_custom_positions() {
        let fens = [
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4",
            "1r4k1/7p/3p1bp1/p1pP4/P1P1prP1/1N2R2P/1P1N1PK1/8 b - - 3",
            "rnbqkbnr/pp2pppp/8/2ppP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0",
            "8/3P4/8/8/8/8/8/k6K w - - 0",
            "r3k2r/8/8/8/8/8/8/R3K2R b Qk - 99",
        ];

        for fen in fens {
            let parsed = parse_fen(fen).expect("custom FEN should parse");
            assert_eq!(generate_fen(&parsed), fen);
        }

        let parsed = parse_fen(fens[0]).expect("custom FEN should parse");
        assert_eq!(parsed.side_to_move(), Color::Dark);
        assert_eq!(
            parsed.castling_rights(),
            CastlingRights {
                dark_kingside: true,
                dark_queenside: true,
                ..CastlingRights::NONE
            }
        );
        assert_eq!(parsed.halfmove_clock(), 4);
    }

    #[test]
    fn fullmove_number_is_dropped_on_output() {
        let parsed = parse_fen("8/8/8/8/8/8/8/k6K w - - 12 60").expect("six-field FEN should parse");
        assert_eq!(generate_fen(&parsed), "8/8/8/8/8/8/8/k6K w - - 12");
    }
}
