//! Main CLI interface to Kalah engine.

use std::io::{self, Write};

use clap::Parser;

use kalah_engine::coretypes::{MoveOutcome, Outcome, PitIndex, Player, PlyKind, StoneKind};
use kalah_engine::coretypes::DEFAULT_DEPTH;
use kalah_engine::evaluation::evaluate;
use kalah_engine::{Engine, EngineBuilder, GameState};

#[derive(Parser, Debug)]
#[command(name = "kalah", about = "Play Kalah against the engine in a terminal")]
struct Args {
    /// Search depth for the engine
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: PlyKind,

    /// Pits on each side of the board
    #[arg(long, default_value_t = 6)]
    pits: usize,

    /// Stones in each pit at the start
    #[arg(long, default_value_t = 4)]
    stones: StoneKind,

    /// Let the engine play first, as South
    #[arg(long)]
    engine_first: bool,

    /// Print search diagnostics after every engine move
    #[arg(long)]
    debug: bool,
}

enum InputKind {
    Exit,
    Newgame,
    Help,
    Error,
    Undo,
    Debug,
    GameMove(PitIndex),
}

impl InputKind {
    /// Pit numbers are read relative to the side of the player to move.
    fn parse(s: &str, state: &GameState) -> Self {
        if let Ok(pit) = state.parse_move(s) {
            Self::GameMove(pit)
        } else {
            match s.trim() {
                "exit" => Self::Exit,
                "newgame" | "ng" => Self::Newgame,
                "help" => Self::Help,
                "undo" => Self::Undo,
                "debug" => Self::Debug,
                _ => Self::Error,
            }
        }
    }
}

/// 1-based number of `pit` along its owner's side.
fn pit_number(state: &GameState, pit: PitIndex) -> usize {
    match state.board().owner(pit) {
        Some(player) => pit - state.board().pits(player).start + 1,
        None => 0,
    }
}

fn print_outcome(outcome: &MoveOutcome) {
    if outcome.captured > 0 {
        println!("Captured {} stones.", outcome.captured);
    }
    if outcome.extra_turn() && !outcome.game_over {
        println!("Extra turn!");
    }
}

/// Let the engine search and play a single move.
fn engine_turn(engine: &mut Engine) -> kalah_engine::error::Result<()> {
    println!("{}\nthinking...", engine.state());
    let result = engine.search_sync()?;

    if let Some(pit) = result.best_move {
        let number = pit_number(engine.state(), pit);
        let outcome = engine.apply_move(pit)?;
        println!("Kalah played pit {number}.");
        print_outcome(&outcome);
        if engine.debug() {
            println!("{}", result);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    println!("Kalah CLI 0.1.0\n");

    let mut engine = EngineBuilder::new()
        .pits_per_player(args.pits)
        .stones_per_pit(args.stones)
        .depth(args.depth)
        .debug(args.debug)
        .build()?;
    let human = if args.engine_first {
        Player::North
    } else {
        Player::South
    };
    println!("You are player {human}. Type help for commands.\n");

    let mut input = String::new();

    loop {
        if engine.state().is_game_over() {
            let state = engine.state();
            println!("{}", state);
            let south = state.score(Player::South);
            let north = state.score(Player::North);
            match state.winner()? {
                Outcome::Winner(player) if player == human => {
                    println!("Congrats!! You won {south} to {north}.")
                }
                Outcome::Winner(_) => println!("Kalah engine won {south} to {north}."),
                Outcome::Draw => println!("The game is DRAWN at {south} each."),
            }
            println!("Press Enter to start a new game.");
            input.clear();
            if io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            engine.new_game()?;
            continue;
        }

        if engine.state().current_player() != human {
            engine_turn(&mut engine)?;
            continue;
        }

        // Wait for user input.
        if engine.debug() {
            let static_score = evaluate(engine.state(), human);
            println!("Current Static score: {}", static_score);
        }
        println!("{}", engine.state());
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match InputKind::parse(&input, engine.state()) {
            InputKind::Exit => break,
            InputKind::Newgame => {
                engine.new_game()?;
                println!("Starting new game...");
            }
            InputKind::Help => {
                println!("Commands:");
                println!("newgame | ng => Begin a new game.");
                println!("undo => Undo the game to return to your last move.");
                println!("debug => Toggle search diagnostics.");
                println!("help => Print this help text.");
                println!("exit => end CLI.");
                println!("\nTo make a move, enter the number of one of your pits.");
                println!("Pits are numbered from 1 in the direction stones are sown.");
            }
            InputKind::Undo => {
                // Undo the engine's moves and the player's last move.
                while let Some(pit) = engine.undo()? {
                    println!("Undo pit {}.", pit_number(engine.state(), pit));
                    if engine.state().current_player() == human {
                        break;
                    }
                }
            }
            InputKind::Debug => {
                let debug = !engine.debug();
                engine.set_debug(debug);
                println!("Debug {}.", if debug { "on" } else { "off" });
            }
            InputKind::Error => {
                println!("Invalid command: {}", input.trim());
            }
            InputKind::GameMove(pit) => match engine.apply_move(pit) {
                Ok(outcome) => print_outcome(&outcome),
                Err(error) => println!("That move was illegal! No action taken. ({error})"),
            },
        }
    }
    Ok(())
}
