//! Minimax with Alpha-Beta pruning implementation.

use std::cmp;

use crate::coretypes::{PitIndex, Player, PlyKind, Score, Turn};
use crate::evaluation::evaluate;
use crate::game_state::GameState;
use crate::search::Counters;

/// Properties of Alpha-Beta pruning.
/// * The maxing player can only update alpha from its children.
/// * The minning player can only update beta from its children.
/// * Alpha and Beta can only be inherited from their ancestors, and are otherwise Alpha=-Inf, Beta=Inf.
/// * Alpha is usually less than Beta. When they are equal or cross, a cut off occurs.
///
/// Scores are from the point of view of `player`. A node maximizes when `player`
/// is the one to move in it. Moves that grant an extra turn are searched at the
/// same depth as their parent, all other moves one ply shallower.
pub fn alpha_beta(
    state: &GameState,
    depth: PlyKind,
    alpha: Score,
    beta: Score,
    maximizing: bool,
    player: Player,
) -> Score {
    let mut counters = Counters::default();
    alpha_beta_impl(state, depth, alpha, beta, maximizing, player, &mut counters)
}

/// Returns the best move for the player to move in `state`, or None if there are no moves.
/// Ties go to the lowest pit index.
pub fn choose_best_move(state: &GameState, depth: PlyKind) -> Option<PitIndex> {
    alpha_beta_root(state, depth, &mut Counters::default()).0
}

/// Depth a child is searched at after a move with the given turn result.
/// A depth of 0 at the root has nothing left to charge, so its children are evaluated directly.
pub(crate) const fn child_depth(depth: PlyKind, turn: Turn) -> PlyKind {
    match turn {
        Turn::SameMover => depth,
        Turn::OtherMover => depth.saturating_sub(1),
    }
}

/// alpha_beta_root is almost the same as alpha_beta impl, except it links a score to its move.
///
/// Each root move is searched with a full window so that every move gets an exact score,
/// which keeps the first-best tie-break independent of pruning.
pub(crate) fn alpha_beta_root(
    state: &GameState,
    depth: PlyKind,
    counters: &mut Counters,
) -> (Option<PitIndex>, Score) {
    counters.nodes += 1;
    let player = state.current_player();
    let mut best: Option<(PitIndex, Score)> = None;

    for pit in state.legal_moves() {
        let (child, outcome) = state.make_move(pit);
        let score = alpha_beta_impl(
            &child,
            child_depth(depth, outcome.turn),
            Score::MIN,
            Score::MAX,
            child.current_player() == player,
            player,
            counters,
        );

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((pit, score));
        }
    }

    match best {
        Some((pit, score)) => (Some(pit), score),
        None => (None, evaluate(state, player)),
    }
}

pub(crate) fn alpha_beta_impl(
    state: &GameState,
    depth: PlyKind,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    player: Player,
    counters: &mut Counters,
) -> Score {
    counters.nodes += 1;
    let legal_moves = state.legal_moves();

    // Stop at terminal node: finished game, no moves or last depth.
    if depth == 0 || state.is_game_over() || legal_moves.is_empty() {
        return evaluate(state, player);
    }

    if maximizing {
        let mut best_score = Score::MIN;

        for pit in legal_moves {
            let (child, outcome) = state.make_move(pit);
            let score = alpha_beta_impl(
                &child,
                child_depth(depth, outcome.turn),
                alpha,
                beta,
                child.current_player() == player,
                player,
                counters,
            );

            best_score = cmp::max(best_score, score);
            alpha = cmp::max(alpha, best_score);
            if alpha >= beta {
                // Beta cutoff
                counters.cut_nodes += 1;
                break;
            }
        }
        best_score
    } else {
        let mut best_score = Score::MAX;

        for pit in legal_moves {
            let (child, outcome) = state.make_move(pit);
            let score = alpha_beta_impl(
                &child,
                child_depth(depth, outcome.turn),
                alpha,
                beta,
                child.current_player() == player,
                player,
                counters,
            );

            best_score = cmp::min(best_score, score);
            beta = cmp::min(beta, best_score);
            if alpha >= beta {
                // Alpha cutoff
                counters.cut_nodes += 1;
                break;
            }
        }
        best_score
    }
}
