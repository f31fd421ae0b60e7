//! Minimax implementation.
//!
//! Searches the same tree as alpha-beta without pruning. It is much slower,
//! and exists as a reference to check alpha-beta scores against.

use std::cmp;

use crate::coretypes::{Player, PlyKind, Score};
use crate::evaluation::evaluate;
use crate::game_state::GameState;
use crate::search::alpha_beta::child_depth;

/// Minimax score of `state` from the point of view of `player`.
pub fn minimax(state: &GameState, depth: PlyKind, maximizing: bool, player: Player) -> Score {
    let legal_moves = state.legal_moves();

    // Stop at terminal node: finished game, no moves or last depth.
    if depth == 0 || state.is_game_over() || legal_moves.is_empty() {
        return evaluate(state, player);
    }

    let children = legal_moves.into_iter().map(|pit| {
        let (child, outcome) = state.make_move(pit);
        let child_maximizing = child.current_player() == player;
        minimax(&child, child_depth(depth, outcome.turn), child_maximizing, player)
    });

    if maximizing {
        children.fold(Score::MIN, cmp::max)
    } else {
        children.fold(Score::MAX, cmp::min)
    }
}
