//! Move value type.
//!
//! A `Move` only says where a piece goes and which special rule applies. It
//! never records what gets captured; the applier reads that from the board.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub is_en_passant: bool,
    pub is_kingside_castle: bool,
    pub is_queenside_castle: bool,
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Plain move or capture.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            is_en_passant: false,
            is_kingside_castle: false,
            is_queenside_castle: false,
            promotion: None,
        }
    }

    #[inline]
    pub const fn promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            promotion: Some(kind),
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self {
            is_en_passant: true,
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn kingside_castle(from: Square, to: Square) -> Self {
        Self {
            is_kingside_castle: true,
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn queenside_castle(from: Square, to: Square) -> Self {
        Self {
            is_queenside_castle: true,
            ..Self::new(from, to)
        }
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.is_kingside_castle || self.is_queenside_castle
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.fen_char())?;
        }
        Ok(())
    }
}
