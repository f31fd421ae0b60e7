//! Evaluation functions that return a Score.

use crate::coretypes::{Outcome, Player, Score, ScoreKind};
use crate::game_state::GameState;

// Evaluation Constants

/// Value of a won game. Dominates every heuristic score, since a heuristic can
/// never exceed `HOUSE_WEIGHT + 1` times `MAX_TOTAL_STONES`.
pub const WIN: Score = Score(999_999);
pub const LOSS: Score = Score(-999_999);
pub const DRAW: Score = Score(0);

/// Stones banked in a house are worth more than stones still in play.
pub const HOUSE_WEIGHT: ScoreKind = 10;

// Evaluation Functions

/// Primary evaluate function for engine, from the point of view of `player`.
/// Finished games return `WIN`, `DRAW` or `LOSS`.
pub fn evaluate(state: &GameState, player: Player) -> Score {
    match terminal(state, player) {
        Some(score) => score,
        None => house_difference(state, player) * HOUSE_WEIGHT + side_difference(state, player),
    }
}

/// Score of a finished game for `player`, or None if the game is still going.
pub fn terminal(state: &GameState, player: Player) -> Option<Score> {
    let outcome = state.winner().ok()?;
    Some(match outcome {
        Outcome::Winner(winner) if winner == player => WIN,
        Outcome::Winner(_) => LOSS,
        Outcome::Draw => DRAW,
    })
}

/// Returns `player`'s house stones minus the opponent's house stones.
pub fn house_difference(state: &GameState, player: Player) -> Score {
    let board = state.board();
    Score(board.house_stones(player) as ScoreKind - board.house_stones(!player) as ScoreKind)
}

/// Returns stones on `player`'s pits minus stones on the opponent's pits.
pub fn side_difference(state: &GameState, player: Player) -> Score {
    let board = state.board();
    Score(board.side_sum(player) as ScoreKind - board.side_sum(!player) as ScoreKind)
}
