//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the engine's
//! row/column squares, where row 0 is rank 8.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid algebraic square: {square}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    let col = (file - b'a') as i8;
    let row = (b'8' - rank) as i8;
    Square::new(row, col)
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_square_conversions() {
        let a8 = algebraic_to_square("a8").expect("a8 should parse");
        assert_eq!((a8.row(), a8.col()), (0, 0));
        let h1 = algebraic_to_square("h1").expect("h1 should parse");
        assert_eq!((h1.row(), h1.col()), (7, 7));
        let d6 = algebraic_to_square("d6").expect("d6 should parse");
        assert_eq!((d6.row(), d6.col()), (2, 3));

        let e4 = Square::new(4, 4).expect("e4 is on the board");
        assert_eq!(square_to_algebraic(e4), "e4");
    }

    #[test]
    fn rejects_malformed_squares() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("e44").is_err());
    }
}
