//! Search functions.

mod alpha_beta;
mod minimax;

pub use alpha_beta::*;
pub use minimax::*;

use std::fmt::{self, Display};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crate::coretypes::{PitIndex, Player, PlyKind, Score};
use crate::game_state::GameState;

/// Node statistics gathered while searching.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub(crate) struct Counters {
    pub nodes: u64,
    pub cut_nodes: u64,
}

/// The results found from running a search on some root state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SearchResult {
    /// The best move to make for a state discovered from search. None if the player has no moves.
    pub best_move: Option<PitIndex>,
    /// The score of making the best move, relative to `player`.
    pub score: Score,
    /// The player to move for the root state that was searched.
    pub player: Player,
    /// Depth in plies that was searched. Extra turns do not use up depth.
    pub depth: PlyKind,
    /// Total number of nodes visited in a search.
    pub nodes: u64,
    /// Number of nodes where an alpha or beta cutoff was performed.
    pub cut_nodes: u64,
    /// Total time elapsed from the start to the end of a search.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Get average nodes per second of search.
    pub fn nps(&self) -> f64 {
        (self.nodes as f64 / self.elapsed.as_secs_f64()).round()
    }

    /// Returns the player who is leading in the search of the root state, or None if even.
    pub fn leading(&self) -> Option<Player> {
        match self.score.signum() {
            1 => Some(self.player),
            -1 => Some(!self.player),
            _ => None,
        }
    }

    /// Single line summary in the style of an `info` line.
    pub fn info(&self) -> String {
        let best_move = self
            .best_move
            .map_or_else(|| "none".to_string(), |pit| pit.to_string());
        format!(
            "info depth {} score {} time {} nodes {} nps {} bestmove {}",
            self.depth,
            self.score,
            self.elapsed.as_millis(),
            self.nodes,
            self.nps(),
            best_move,
        )
    }
}

impl Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let best_move = self
            .best_move
            .map_or_else(|| "none".to_string(), |pit| pit.to_string());

        let mut displayed = String::new();
        displayed.push_str("SearchResult {\n");
        displayed.push_str(&format!("    best_move: {}\n", best_move));
        displayed.push_str(&format!("    score    : {}\n", self.score));
        displayed.push_str(&format!("    player   : {}\n", self.player));
        displayed.push_str(&format!("    depth    : {}\n", self.depth));
        displayed.push_str(&format!("    nodes    : {}\n", self.nodes));
        displayed.push_str(&format!("    nps      : {}\n", self.nps()));
        displayed.push_str(&format!(
            "    elapsed  : {}.{:03}s\n",
            self.elapsed.as_secs(),
            self.elapsed.subsec_millis()
        ));
        displayed.push_str(&format!("    cut_nodes: {}\n", self.cut_nodes));
        displayed.push_str("}\n");

        write!(f, "{displayed}")
    }
}

/// Kalah Engine primary search function.
/// Finds the best move for the player to move in `state` with a depth limited alpha-beta search.
pub fn search(state: &GameState, depth: PlyKind) -> SearchResult {
    let instant = Instant::now();
    let mut counters = Counters::default();
    let (best_move, score) = alpha_beta::alpha_beta_root(state, depth, &mut counters);

    SearchResult {
        best_move,
        score,
        player: state.current_player(),
        depth,
        nodes: counters.nodes,
        cut_nodes: counters.cut_nodes,
        elapsed: instant.elapsed(),
    }
}

/// Kalah Engine non-blocking search function. This runs the search on a separate thread.
/// When the search has been completed, it returns the value by sending it over the given Sender.
///
/// # Arguments
///
/// * `state`: Snapshot of the game to search, owned by the search thread
/// * `depth`: Plies to search, extra turns do not use up depth
/// * `debug`: When true prints an info line for the finished search
/// * `sender`: Channel to send search result over
///
/// There is no way to stop a running search. If the receiver is dropped, the
/// result is discarded once the search completes.
pub fn search_nonblocking<T>(
    state: GameState,
    depth: PlyKind,
    debug: bool,
    sender: mpsc::Sender<T>,
) -> thread::JoinHandle<()>
where
    T: 'static + Send + From<SearchResult>,
{
    thread::spawn(move || {
        let search_result = search(&state, depth);
        if debug {
            println!("{}", search_result.info());
        }
        let _ = sender.send(search_result.into());
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_start_position() {
        let state = GameState::default();
        let result = search(&state, 4);
        println!("{result}");

        assert_eq!(result.player, Player::South);
        assert_eq!(result.best_move, choose_best_move(&state, 4));
        assert!(result.nodes > 6);
    }

    #[test]
    fn nonblocking_matches_blocking() {
        let state = GameState::default();
        let (sender, receiver) = mpsc::channel::<SearchResult>();
        let handle = search_nonblocking(state.clone(), 3, false, sender);
        handle.join().unwrap();

        let result = receiver.recv().unwrap();
        let expected = search(&state, 3);
        assert_eq!(result.best_move, expected.best_move);
        assert_eq!(result.score, expected.score);
        assert_eq!(result.nodes, expected.nodes);
    }

    #[test]
    fn dropped_receiver_discards_result() {
        let (sender, receiver) = mpsc::channel::<SearchResult>();
        drop(receiver);
        let handle = search_nonblocking(GameState::default(), 2, false, sender);
        assert!(handle.join().is_ok());
    }
}
