//! FEN-to-Position parser.
//!
//! Reads the board layout, side to move, castling rights, en-passant target
//! and the optional halfmove clock. A trailing fullmove number is tolerated
//! and ignored since the engine does not track it.

use log::warn;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Position;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<Position> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 4 {
        return Err(invalid(format!(
            "expected at least 4 fields, found {}",
            parts.len()
        )));
    }
    if parts.len() > 6 {
        return Err(invalid("FEN has extra trailing fields".to_owned()));
    }

    let mut position = Position::new_empty();

    position.board = parse_board(parts[0])?;
    position.side_to_move = parse_side_to_move(parts[1])?;
    position.castling_rights = parse_castling_rights(parts[2])?;
    position.en_passant_target = parse_en_passant_target(parts[3])?;
    position.halfmove_clock = match parts.get(4) {
        Some(halfmove_part) => halfmove_part
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid halfmove clock: {halfmove_part}")))?,
        None => 0,
    };
    if let Some(fullmove_part) = parts.get(5) {
        fullmove_part
            .parse::<u16>()
            .map_err(|_| invalid(format!("invalid fullmove number: {fullmove_part}")))?;
    }

    report_king_counts(&position, fen);

    Ok(position)
}

fn invalid(message: String) -> ChessErrors {
    ChessErrors::InvalidFen(message)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid(format!(
            "board layout must contain 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board: Board = [[None; 8]; 8];

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                if col > 8 {
                    return Err(invalid(format!("rank {} has more than 8 squares", row + 1)));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}' in board layout")))?;

            if col >= 8 {
                return Err(invalid(format!("rank {} has more than 8 squares", row + 1)));
            }

            board[row][col] = Some(piece);
            col += 1;
        }

        if col != 8 {
            return Err(invalid(format!(
                "rank {} does not sum to 8 squares",
                row + 1
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    // Letters must appear at most once and in `KQkq` order.
    let mut next_allowed = 0usize;
    for ch in castling_part.chars() {
        let index = match ch {
            'K' => 0,
            'Q' => 1,
            'k' => 2,
            'q' => 3,
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        };
        if index < next_allowed {
            return Err(invalid(format!(
                "castling rights must be unique and in KQkq order: {castling_part}"
            )));
        }
        next_allowed = index + 1;

        match index {
            0 => rights.light_kingside = true,
            1 => rights.light_queenside = true,
            2 => rights.dark_kingside = true,
            _ => rights.dark_queenside = true,
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))
}

// Positions without exactly one king per side are accepted; king lookups
// report `MissingKing` later if a side has none.
fn report_king_counts(position: &Position, fen: &str) {
    for color in [Color::Light, Color::Dark] {
        let kings = position
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            warn!("FEN '{fen}' has {kings} {} king(s)", color.name());
        }
    }
}
