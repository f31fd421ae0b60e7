//! MoveList types used in Kalah engine.
//!
//! A move is the index of the pit being sown, so a list of moves is a list of
//! pit indices.

use arrayvec::ArrayVec;

use crate::coretypes::{PitIndex, MAX_PITS_PER_PLAYER};

/// MoveList holds the legal moves of a position. A player can never have more
/// moves than pits.
pub type MoveList = ArrayVec<PitIndex, MAX_PITS_PER_PLAYER>;

/// Every move played in a game, in order. Games have no fixed length bound.
pub type MoveHistory = Vec<PitIndex>;

/// Returns a space separated string of the moves in a list.
pub fn display<'a, I>(moves: I) -> String
where
    I: IntoIterator<Item = &'a PitIndex>,
{
    moves
        .into_iter()
        .map(|pit| pit.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
