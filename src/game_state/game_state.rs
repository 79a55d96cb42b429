//! Core mutable board state.
//!
//! `Position` is the central model of the engine: an 8x8 grid of pieces, the
//! side to move, castling rights, the en-passant target, the halfmove clock
//! and a stack of full snapshots used to undo moves one at a time.
//!
//! A `Position` is plain value data. Callers that want to explore branches in
//! parallel clone it per worker; make/undo on one shared instance is not
//! reentrant.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::{make_move, undo_move};
use crate::move_generation::legal_move_generator::{all_legal_moves, legal_moves};
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u16,
    pub(crate) history: Vec<UndoState>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Board with no pieces, Light to move and no rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::Light,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece on `(row, col)`. `Ok(None)` is an empty square; coordinates off
    /// the board are an error rather than an empty answer.
    pub fn piece_at(&self, row: i8, col: i8) -> ChessResult<Option<Piece>> {
        let square = Square::new(row, col)?;
        Ok(self.piece_on(square))
    }

    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.board[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn is_white_turn(&self) -> bool {
        self.side_to_move.is_white()
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Pieces of `color` with their squares, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.piece_on(square) {
            Some(piece) if piece.color == color => Some((square, piece)),
            _ => None,
        })
    }

    pub fn repetition_key(&self) -> RepetitionKey {
        RepetitionKey {
            board: self.board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
        }
    }

    pub(crate) fn snapshot(&self) -> UndoState {
        UndoState {
            board: self.board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
        }
    }

    /// Overwrite every scalar field and the grid; history is left alone.
    pub(crate) fn restore(&mut self, snapshot: UndoState) {
        self.board = snapshot.board;
        self.side_to_move = snapshot.side_to_move;
        self.castling_rights = snapshot.castling_rights;
        self.en_passant_target = snapshot.en_passant_target;
        self.halfmove_clock = snapshot.halfmove_clock;
    }

    #[inline]
    pub fn make_move(&mut self, mv: Move) -> ChessResult<()> {
        make_move(self, mv)
    }

    #[inline]
    pub fn undo_move(&mut self) -> ChessResult<()> {
        undo_move(self)
    }

    #[inline]
    pub fn legal_moves(&mut self, square: Square) -> ChessResult<Vec<Move>> {
        legal_moves(self, square)
    }

    #[inline]
    pub fn all_legal_moves(&mut self) -> ChessResult<Vec<Move>> {
        all_legal_moves(self)
    }

    #[inline]
    pub fn game_status(&mut self) -> ChessResult<GameStatus> {
        game_status(self)
    }
}

impl std::str::FromStr for Position {
    type Err = ChessErrors;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        parse_fen(fen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_new_game() {
        let position = Position::new_game();
        assert_eq!(position.get_fen(), STARTING_POSITION_FEN);
        assert_eq!(position, Position::default());
        assert!(position.is_white_turn());
        assert_eq!(position.pieces_of(Color::Light).count(), 16);
        assert_eq!(position.pieces_of(Color::Dark).count(), 16);
    }

    #[test]
    fn piece_at_distinguishes_empty_from_out_of_bounds() {
        let position = Position::new_game();
        assert_eq!(position.piece_at(4, 4), Ok(None));
        assert_eq!(
            position.piece_at(8, 0),
            Err(ChessErrors::InvalidCoordinates { row: 8, col: 0 })
        );
        assert_eq!(
            position.piece_at(0, -1),
            Err(ChessErrors::InvalidCoordinates { row: 0, col: -1 })
        );
        assert_eq!(
            position.piece_at(7, 4),
            Ok(Some(Piece::new(Color::Light, PieceKind::King)))
        );
    }

    #[test]
    fn from_str_matches_from_fen() {
        let fen = "k7/8/1Q6/8/8/8/8/7K b - - 0";
        let parsed: Position = fen.parse().expect("FEN should parse");
        assert_eq!(parsed, Position::from_fen(fen).expect("FEN should parse"));
    }

    #[test]
    fn snapshot_restore_is_exact() {
        let mut position =
            Position::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 12").expect("FEN should parse");
        let before = position.clone();
        let snapshot = position.snapshot();
        position.board = [[None; 8]; 8];
        position.halfmove_clock = 0;
        position.castling_rights = CastlingRights::NONE;
        position.restore(snapshot);
        assert_eq!(position, before);
        assert_eq!(position.repetition_key(), before.repetition_key());
    }
}
