//! Command-line front end for the grid_chess position engine.
//!
//! `grid_chess perft --depth 4` counts move-tree leaves from a FEN.
//! `grid_chess play --seed 7` plays two random players against each other.
//! Set `RUST_LOG=debug` for per-ply and per-worker logging.

use clap::{Parser, Subcommand};
use log::info;

use grid_chess::chess_errors::ChessResult;
use grid_chess::driver::game_driver::{play_game, MatchConfig};
use grid_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use grid_chess::game_state::game_state::Position;
use grid_chess::move_generation::perft::{perft, perft_divide, perft_multi_threaded};
use grid_chess::players::player_random::RandomPlayer;

#[derive(Parser, Debug)]
#[command(about = "Chess position engine: perft and random self-play", version)]
struct CmdArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count leaf nodes of the legal move tree
    Perft {
        #[arg(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
        #[arg(long, default_value_t = 3)]
        depth: u8,
        /// Print node counts per root move
        #[arg(long)]
        divide: bool,
        /// One worker thread per root move
        #[arg(long)]
        threads: bool,
    },
    /// Play a game between two random players
    Play {
        #[arg(long, default_value = STARTING_POSITION_FEN)]
        fen: String,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 300)]
        max_plies: u16,
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> ChessResult<()> {
    env_logger::init();
    let cmd_args = CmdArgs::parse();

    match cmd_args.command {
        Command::Perft {
            fen,
            depth,
            divide,
            threads,
        } => {
            let mut position = Position::from_fen(&fen)?;
            if divide {
                let divided = perft_divide(&mut position, depth)?;
                let total: usize = divided.iter().map(|(_, nodes)| nodes).sum();
                for (mv, nodes) in divided {
                    println!("{mv}: {nodes}");
                }
                println!("total: {total}");
            } else {
                let counts = if threads {
                    perft_multi_threaded(&position, depth)?
                } else {
                    perft(&mut position, depth)?
                };
                println!("{counts:?}");
            }
        }
        Command::Play {
            fen,
            seed,
            max_plies,
            verbose,
        } => {
            let position = Position::from_fen(&fen)?;
            let (mut white, mut black) = match seed {
                Some(seed) => (
                    RandomPlayer::seeded(seed),
                    RandomPlayer::seeded(seed.wrapping_add(1)),
                ),
                None => (RandomPlayer::new(), RandomPlayer::new()),
            };
            let config = MatchConfig { max_plies, verbose };

            info!("starting game from {fen}");
            let record = play_game(position, &mut white, &mut black, &config)?;
            println!("moves: {}", record.moves_long_algebraic().join(" "));
            println!("outcome: {:?}", record.outcome);
            println!("final: {}", record.final_position.get_fen());
        }
    }

    Ok(())
}
