//! Kalah (Mancala) rules and search engine.
//!
//! The rules live in [`GameState`], which owns the board and only changes
//! through move application. [`search`] explores copies of a state to pick moves.

pub mod board;
pub mod coretypes;
pub mod engine;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod game_state;
pub mod movelist;
pub mod perft;
pub mod playout;
pub mod search;

pub use board::Board;
pub use coretypes::{MoveOutcome, Outcome, PitIndex, Player, Score, Turn};
pub use engine::{Engine, EngineBuilder};
pub use error::{Error, ErrorKind};
pub use game::Game;
pub use game_state::GameState;
pub use search::{choose_best_move, SearchResult};
