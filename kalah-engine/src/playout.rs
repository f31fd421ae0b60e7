//! Random play.
//!
//! Random moves serve as a baseline opponent, and random playouts produce
//! arbitrary reachable states for testing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::coretypes::PitIndex;
use crate::game_state::GameState;

/// Picks a uniformly random legal move, or None if there are no moves.
pub fn random_move<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Option<PitIndex> {
    state.legal_moves().choose(rng).copied()
}

/// Plays random legal moves from `state` until the game ends, returning the final state.
pub fn random_playout<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> GameState {
    let mut state = state.clone();
    while let Some(pit) = random_move(&state, rng) {
        if state.do_move(pit).game_over {
            break;
        }
    }
    state
}
