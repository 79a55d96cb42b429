//! Errors used throughout the position engine.
//!
//! `ChessErrors` is the single error type across the crate. Variants fall into
//! three groups:
//! - malformed input (`InvalidFen`, `InvalidAlgebraic`) that is reasonable to
//!   show to an end user;
//! - addressing errors (`InvalidCoordinates`) raised by any query or mutation
//!   outside the 8x8 board;
//! - invariant violations (`KingCapture`, `MissingCastlingRook`,
//!   `EmptyHistory`, ...) which should be unreachable through legal play and
//!   indicate a bug in the caller.
//!
//! Every failing mutation leaves the `Position` exactly as it was before the
//! call, so callers may ignore a failed attempt and try another move.

use thiserror::Error;

use crate::game_state::chess_types::Square;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// The FEN text could not be parsed. Payload describes the offending field.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A square or move in algebraic text could not be parsed.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// Row or column outside `0..8`.
    #[error("invalid coordinates: row {row}, col {col}")]
    InvalidCoordinates { row: i8, col: i8 },

    #[error("no piece on source square {0}")]
    EmptySourceSquare(Square),

    #[error("piece on {0} does not belong to the side to move")]
    WrongSideToMove(Square),

    #[error("en-passant move attempted but no en-passant target is set")]
    MissingEnPassantTarget,

    /// Castling flag on a move whose mover is not a king.
    #[error("castling attempted with a non-king piece from {0}")]
    InvalidCastle(Square),

    #[error("castling attempted but no rook found on {0}")]
    MissingCastlingRook(Square),

    #[error("attempted to capture the king on {0}")]
    KingCapture(Square),

    #[error("invalid promotion: {0}")]
    InvalidPromotion(String),

    #[error("no move to undo")]
    EmptyHistory,

    /// The position has no king of the requested color.
    #[error("no {0} king on the board")]
    MissingKing(&'static str),

    /// A move was requested that is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A player collaborator could not produce a move.
    #[error("player failed: {0}")]
    PlayerFailed(String),

    #[error("worker thread panicked")]
    WorkerPanicked,
}

pub type ChessResult<T> = Result<T, ChessErrors>;
