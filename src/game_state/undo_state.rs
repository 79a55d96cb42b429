use crate::game_state::chess_types::*;

/// Full snapshot pushed by `make_move` and restored verbatim by `undo_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub halfmove_clock: u16,
}

impl UndoState {
    #[inline]
    pub fn repetition_key(&self) -> RepetitionKey {
        RepetitionKey {
            board: self.board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
        }
    }
}

/// Fields that decide whether two positions repeat. Clocks and history depth
/// are not part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepetitionKey {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
}
