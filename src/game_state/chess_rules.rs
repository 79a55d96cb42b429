//! Canonical chess-rule constants.
//!
//! Static rule literals: the standard starting position and the thresholds
//! used by the game-state classifier.

/// Standard chess starting position in the five-field FEN form the engine
/// reads and writes (board, side, castling, en passant, halfmove clock).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0";

/// Halfmove clock value at which the fifty-move draw applies.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 100;

/// Occurrences of one position (current one included) that draw the game.
pub const REPETITION_DRAW_COUNT: usize = 3;

/// Column the king starts on.
pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
