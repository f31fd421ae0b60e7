//! Headless AI vs AI simulator for Kalah.
//!
//! Plays many games without any interface and reports wins per player and draws.

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use kalah_engine::coretypes::{Outcome, PitIndex, Player, PlyKind, StoneKind, DEFAULT_DEPTH};
use kalah_engine::error;
use kalah_engine::playout::random_move;
use kalah_engine::search::choose_best_move;
use kalah_engine::GameState;

/// Who plays North. South is always the engine.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Opponent {
    Engine,
    Random,
}

#[derive(Parser, Debug)]
#[command(
    name = "kalah-sim",
    about = "Simulate engine vs engine (or engine vs random) Kalah games"
)]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    games: usize,

    /// Search depth for the engine
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: PlyKind,

    /// Pits on each side of the board
    #[arg(long, default_value_t = 6)]
    pits: usize,

    /// Stones in each pit at the start
    #[arg(long, default_value_t = 4)]
    stones: StoneKind,

    /// Player controlling North
    #[arg(long, value_enum, default_value_t = Opponent::Engine)]
    opponent: Opponent,

    /// Number of random plies at the start of each game (both sides)
    #[arg(long, default_value_t = 0)]
    noise_plies: usize,

    /// Random seed
    #[arg(long, default_value_t = 1u64)]
    seed: u64,

    /// Show progress
    #[arg(long)]
    verbose: bool,
}

/// Tally of finished games.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
struct Counts {
    south: usize,
    north: usize,
    draws: usize,
}

impl Counts {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::South) => self.south += 1,
            Outcome::Winner(Player::North) => self.north += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Play one game from `start` to the end and return its result.
fn play_game(start: &GameState, args: &Args, rng: &mut SmallRng) -> error::Result<Outcome> {
    let mut state = start.clone();
    let mut ply = 0;

    while !state.is_game_over() {
        let random_turn = ply < args.noise_plies
            || (args.opponent == Opponent::Random && state.current_player() == Player::North);
        let maybe_pit: Option<PitIndex> = if random_turn {
            random_move(&state, rng)
        } else {
            choose_best_move(&state, args.depth)
        };

        match maybe_pit {
            Some(pit) => {
                state.apply_move(pit)?;
            }
            None => break,
        }
        ply += 1;
    }

    state.check_game_over();
    state.winner()
}

fn percent(count: usize, total: usize) -> f64 {
    100.0 * count as f64 / total.max(1) as f64
}

fn main() -> error::Result<()> {
    let args = Args::parse();
    let start = GameState::new(args.stones, args.pits)?;
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut counts = Counts::default();

    println!(
        "Running {} games (depth={}, opponent={:?})... This may take a while depending on depth.",
        args.games, args.depth, args.opponent
    );

    let progress_step = (args.games / 10).max(1);
    for game in 1..=args.games {
        counts.record(play_game(&start, &args, &mut rng)?);

        if args.verbose && game % progress_step == 0 {
            println!("Progress: {game}/{} games", args.games);
        }
    }

    let total = args.games;
    println!("\nResults:");
    println!(
        "Player 0 wins: {} ({:.2}%)",
        counts.south,
        percent(counts.south, total)
    );
    println!(
        "Player 1 wins: {} ({:.2}%)",
        counts.north,
        percent(counts.north, total)
    );
    println!(
        "Draws       : {} ({:.2}%)",
        counts.draws,
        percent(counts.draws, total)
    );

    Ok(())
}
