use std::thread;

use log::{debug, trace};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_apply::{make_move, undo_move};
use crate::move_generation::legal_move_checks::king_is_attacked;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(position: &mut Position, depth: u8) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }

    perft_recurse(position, depth, &mut total)?;
    Ok(total)
}

/// Node counts below each root move, keyed by its long algebraic text.
pub fn perft_divide(position: &mut Position, depth: u8) -> ChessResult<Vec<(String, usize)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    let root_moves = all_legal_moves(position)?;
    let mut divided = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        let mut local = PerftCounts::default();
        descend(position, mv, depth, &mut local)?;
        trace!("perft divide {mv}: {}", local.nodes);
        divided.push((mv.to_string(), local.nodes));
    }
    Ok(divided)
}

/// Same totals as [`perft`], with one worker thread per root move. Each
/// worker owns a clone of the position.
pub fn perft_multi_threaded(position: &Position, depth: u8) -> ChessResult<PerftCounts> {
    let mut root = position.clone();
    if depth == 0 {
        return perft(&mut root, 0);
    }

    let root_moves = all_legal_moves(&mut root)?;
    debug!("perft depth {depth}: spawning {} workers", root_moves.len());

    let mut handles = Vec::with_capacity(root_moves.len());
    for mv in root_moves {
        let mut branch = root.clone();
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = descend(&mut branch, mv, depth, &mut local);
            (result, local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        let (result, local) = handle
            .join()
            .map_err(|_| ChessErrors::WorkerPanicked)?;
        result?;
        total.merge(local);
    }

    Ok(total)
}

fn perft_recurse(position: &mut Position, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    for mv in all_legal_moves(position)? {
        descend(position, mv, depth, counts)?;
    }
    Ok(())
}

// Plays `mv`, counts it when it is a leaf or recurses otherwise, then takes it back.
fn descend(position: &mut Position, mv: Move, depth: u8, counts: &mut PerftCounts) -> ChessResult<()> {
    let is_capture = mv.is_en_passant || position.piece_on(mv.to).is_some();
    make_move(position, mv)?;

    let result = if depth == 1 {
        count_leaf(position, mv, is_capture, counts)
    } else {
        perft_recurse(position, depth - 1, counts)
    };

    undo_move(position)?;
    result
}

fn count_leaf(
    position: &mut Position,
    mv: Move,
    is_capture: bool,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    counts.nodes += 1;
    if is_capture {
        counts.captures += 1;
    }
    if mv.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.promotion.is_some() {
        counts.promotions += 1;
    }

    let defender = position.side_to_move;
    if king_is_attacked(position, defender)? {
        counts.checks += 1;
        if all_legal_moves(position)?.is_empty() {
            counts.checkmates += 1;
        }
    }
    Ok(())
}
