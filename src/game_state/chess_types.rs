//! Value types shared by the whole engine: colors, piece kinds, pieces,
//! squares and castling rights.
//!
//! Squares use a row/column layout where row 0 is Dark's back rank (FEN rank
//! 8) and column 0 is the a-file, so `a8 == (0, 0)` and `h1 == (7, 7)`. FEN
//! parsing, FEN generation and algebraic conversions all follow this layout.

use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};

pub use crate::game_state::game_state::Position;
pub use crate::game_state::undo_state::{RepetitionKey, UndoState};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    #[inline]
    pub const fn from_is_white(is_white: bool) -> Self {
        if is_white {
            Color::Light
        } else {
            Color::Dark
        }
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::Light)
    }

    /// Row delta a pawn of this color advances by.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Row holding this color's king and rooks at the start of a game.
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::Light => 7,
            Color::Dark => 0,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "white",
            Color::Dark => "black",
        }
    }
}

/// Piece kind (color is carried separately by `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Magnitude used by the signed piece encoding.
    #[inline]
    pub const fn magnitude(self) -> i8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    #[inline]
    pub const fn from_magnitude(magnitude: i8) -> Option<Self> {
        match magnitude {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase FEN letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub const fn from_fen_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// Promotion choices in generation order.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// A colored piece standing on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Signed encoding: the sign is the color (positive for Light) and the
    /// magnitude is the kind.
    #[inline]
    pub const fn code(self) -> i8 {
        match self.color {
            Color::Light => self.kind.magnitude(),
            Color::Dark => -self.kind.magnitude(),
        }
    }

    /// Inverse of [`Piece::code`]. Zero and out-of-range codes decode to `None`.
    #[inline]
    pub const fn from_code(code: i8) -> Option<Self> {
        let color = if code > 0 { Color::Light } else { Color::Dark };
        match PieceKind::from_magnitude(code.saturating_abs()) {
            Some(kind) => Some(Self { color, kind }),
            None => None,
        }
    }

    #[inline]
    pub const fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::Light => base.to_ascii_uppercase(),
            Color::Dark => base,
        }
    }

    #[inline]
    pub const fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };
        match PieceKind::from_fen_char(ch) {
            Some(kind) => Some(Self { color, kind }),
            None => None,
        }
    }
}

/// The 8x8 grid, indexed `[row][col]`; `None` is an empty square.
pub type Board = [[Option<Piece>; 8]; 8];

/// Board square. Always within the 8x8 board once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Checked constructor from raw coordinates.
    pub fn new(row: i8, col: i8) -> ChessResult<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessErrors::InvalidCoordinates { row, col })
        }
    }

    /// Constructor for coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn from_parts(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Shift by `(d_row, d_col)`; `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self::from_parts(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::from_parts(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

/// The four independent castling permissions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastlingRights {
    pub const ALL: Self = Self {
        light_kingside: true,
        light_queenside: true,
        dark_kingside: true,
        dark_queenside: true,
    };

    pub const NONE: Self = Self {
        light_kingside: false,
        light_queenside: false,
        dark_kingside: false,
        dark_queenside: false,
    };

    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        match color {
            Color::Light => self.light_kingside,
            Color::Dark => self.dark_kingside,
        }
    }

    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        match color {
            Color::Light => self.light_queenside,
            Color::Dark => self.dark_queenside,
        }
    }

    pub fn clear_color(&mut self, color: Color) {
        match color {
            Color::Light => {
                self.light_kingside = false;
                self.light_queenside = false;
            }
            Color::Dark => {
                self.dark_kingside = false;
                self.dark_queenside = false;
            }
        }
    }

    /// Drop the right tied to the rook that starts on `square`, if any.
    pub fn clear_for_rook_corner(&mut self, square: Square) {
        match (square.row(), square.col()) {
            (7, 7) => self.light_kingside = false,
            (7, 0) => self.light_queenside = false,
            (0, 7) => self.dark_kingside = false,
            (0, 0) => self.dark_queenside = false,
            _ => {}
        }
    }

    #[inline]
    pub const fn any(self) -> bool {
        self.light_kingside || self.light_queenside || self.dark_kingside || self.dark_queenside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_piece_codes_round_trip() {
        for color in [Color::Light, Color::Dark] {
            for kind in [
                PieceKind::Pawn,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
                PieceKind::King,
            ] {
                let piece = Piece::new(color, kind);
                assert_eq!(Piece::from_code(piece.code()), Some(piece));
                assert_eq!(piece.code() > 0, color == Color::Light);
            }
        }
        assert_eq!(Piece::from_code(0), None);
        assert_eq!(Piece::from_code(7), None);
        assert_eq!(Piece::new(Color::Dark, PieceKind::King).code(), -6);
    }

    #[test]
    fn square_bounds_and_names() {
        assert!(Square::new(8, 0).is_err());
        assert!(Square::new(0, -1).is_err());
        let a8 = Square::new(0, 0).expect("a8 is on the board");
        let h1 = Square::new(7, 7).expect("h1 is on the board");
        assert_eq!(a8.to_string(), "a8");
        assert_eq!(h1.to_string(), "h1");
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(1, 1), Some(Square::from_parts(1, 1)));
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn rook_corner_clears_only_its_right() {
        let mut rights = CastlingRights::ALL;
        rights.clear_for_rook_corner(Square::from_parts(7, 0));
        assert!(!rights.light_queenside);
        assert!(rights.light_kingside && rights.dark_kingside && rights.dark_queenside);
        rights.clear_for_rook_corner(Square::from_parts(4, 4));
        assert!(rights.light_kingside);
    }
}
