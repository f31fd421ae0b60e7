//! Performance Test
//!
//! A simple debugging and testing function used to count
//! the number of nodes at a specific depth.
//!
//! Every move is one ply, including moves that grant an extra turn.

use std::ops::{Add, AddAssign};
use std::sync::{Mutex, PoisonError};
use std::thread;

use crate::coretypes::PlyKind;
use crate::game_state::GameState;
use crate::movelist::MoveList;

/// Debugging information about results of perft test.
/// nodes: Number of nodes at lowest depth of perft.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PerftInfo {
    pub nodes: u64,
}

impl PerftInfo {
    fn new(nodes: u64) -> Self {
        PerftInfo { nodes }
    }
}

impl Add for PerftInfo {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        PerftInfo {
            nodes: self.nodes + rhs.nodes,
        }
    }
}

impl AddAssign for PerftInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
    }
}

// Count the number of nodes at a certain depth.
// This ignores higher terminal nodes.
// In other words, it counts the number of paths to the given depth.
pub fn perft(state: &GameState, ply: PlyKind, threads: usize) -> PerftInfo {
    // Guard easy to calculate inputs.
    if ply == 0 {
        // Ever only 1 state at 0 ply.
        return PerftInfo::new(1);
    } else if ply <= 2 || threads <= 1 {
        // Simple enough to not require threads, or single threaded.
        return perft_recurse(state, ply);
    }
    debug_assert!(ply > 2);
    debug_assert!(threads > 1);

    let legal_moves = state.legal_moves();
    // Guard no moves to search.
    if legal_moves.is_empty() {
        return PerftInfo::new(0);
    }

    let legal_moves = Mutex::new(legal_moves);
    let total_perft_info = Mutex::new(PerftInfo::new(0));

    // Scoped threads process partitioned moves and are joined on scope exit.
    thread::scope(|scope| {
        for _ in 0..threads {
            scope.spawn(|| perft_executor(state, ply, &legal_moves, &total_perft_info));
        }
    });

    total_perft_info
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
}

/// perft_executor works by stealing one move at a time from given moves list and running perft on that move.
/// When there are no moves left to steal, this function stores the data it has collected so far and returns.
/// params:
/// state - state to evaluate moves on.
/// ply - ply of provided state. Must be greater than 1.
/// moves - synchronous access to list of moves to steal from. Moves must be valid for given state.
/// perft_info - place to store information post execution.
#[inline(always)]
fn perft_executor(
    state: &GameState,
    ply: PlyKind,
    moves: &Mutex<MoveList>,
    total_perft_info: &Mutex<PerftInfo>,
) {
    debug_assert!(ply > 1);
    let steal = || moves.lock().unwrap_or_else(PoisonError::into_inner).pop();
    let mut perft_info = PerftInfo::new(0);

    while let Some(pit) = steal() {
        let (child, _) = state.make_move(pit);
        perft_info += perft_recurse(&child, ply - 1);
    }

    *total_perft_info
        .lock()
        .unwrap_or_else(PoisonError::into_inner) += perft_info;
}

/// Ply must be non-zero.
fn perft_recurse(state: &GameState, ply: PlyKind) -> PerftInfo {
    debug_assert_ne!(ply, 0);
    let legal_moves = state.legal_moves();
    if ply == 1 {
        // If we reach the depth before the end,
        // return the count of legal moves.
        PerftInfo::new(legal_moves.len() as u64)
    } else {
        let mut perft_info = PerftInfo::new(0);
        for pit in legal_moves {
            let (child, _) = state.make_move(pit);
            perft_info += perft_recurse(&child, ply - 1);
        }
        perft_info
    }
}
