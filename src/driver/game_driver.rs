//! Headless game loop.
//!
//! Alternates two players over a position, applies their moves and classifies
//! the position after every ply. No clocks and no rendering.

use log::{debug, info};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::Position;
use crate::game_state::game_status::{game_status, GameStatus};
use crate::moves::move_descriptions::Move;
use crate::players::player_trait::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    DrawStalemate,
    DrawFiftyMove,
    DrawRepetition,
    DrawMaxPlies,
}

impl GameOutcome {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    pub final_position: Position,
    pub moves: Vec<Move>,
}

impl GameRecord {
    pub fn moves_long_algebraic(&self) -> Vec<String> {
        self.moves.iter().map(Move::to_string).collect()
    }
}

/// Play `white` against `black` from `position` until the game ends or
/// `config.max_plies` moves have been made.
pub fn play_game<'a>(
    mut position: Position,
    white: &'a mut dyn Player,
    black: &'a mut dyn Player,
    config: &MatchConfig,
) -> ChessResult<GameRecord> {
    white.new_game();
    black.new_game();

    let mut moves = Vec::new();

    if let Some(outcome) = outcome_for(&mut position)? {
        return Ok(GameRecord {
            outcome,
            final_position: position,
            moves,
        });
    }

    for ply in 0..config.max_plies {
        let mover = position.side_to_move();
        let player = match mover {
            Color::Light => &mut *white,
            Color::Dark => &mut *black,
        };

        let mv = player.choose_move(&mut position)?.ok_or_else(|| {
            ChessErrors::PlayerFailed(format!(
                "{} returned no move in an ongoing position",
                player.name()
            ))
        })?;

        position.make_move(mv).map_err(|error| {
            ChessErrors::PlayerFailed(format!("{} played {mv}: {error}", player.name()))
        })?;
        moves.push(mv);

        if config.verbose {
            info!("ply {}: {} plays {mv}", ply + 1, mover.name());
        } else {
            debug!("ply {}: {} plays {mv}", ply + 1, mover.name());
        }

        if let Some(outcome) = outcome_for(&mut position)? {
            return Ok(GameRecord {
                outcome,
                final_position: position,
                moves,
            });
        }
    }

    Ok(GameRecord {
        outcome: GameOutcome::DrawMaxPlies,
        final_position: position,
        moves,
    })
}

fn outcome_for(position: &mut Position) -> ChessResult<Option<GameOutcome>> {
    let outcome = match game_status(position)? {
        GameStatus::Ongoing => return Ok(None),
        GameStatus::Checkmate => GameOutcome::Checkmate {
            winner: position.side_to_move().opposite(),
        },
        GameStatus::Stalemate => GameOutcome::DrawStalemate,
        GameStatus::DrawFiftyMove => GameOutcome::DrawFiftyMove,
        GameStatus::DrawThreefoldRepetition => GameOutcome::DrawRepetition,
    };
    Ok(Some(outcome))
}
