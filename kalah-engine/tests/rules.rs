//! Rules
//!
//! Tests that the rules engine holds its invariants over many reachable states.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use kalah_engine::coretypes::Player::*;
use kalah_engine::playout::random_move;
use kalah_engine::*;

/// Walk `games` random games from `start`, calling `check` on every state reached.
fn for_reachable_states<F>(start: &GameState, games: usize, seed: u64, mut check: F)
where
    F: FnMut(&GameState),
{
    let mut rng = SmallRng::seed_from_u64(seed);
    for _ in 0..games {
        let mut state = start.clone();
        check(&state);
        while let Some(pit) = random_move(&state, &mut rng) {
            let outcome = state.apply_move(pit).unwrap();
            check(&state);
            if outcome.game_over {
                break;
            }
        }
    }
}

#[test]
fn start_scenario() {
    let mut state = GameState::new(4, 6).unwrap();
    assert_eq!(
        state.board().as_slice(),
        &[4, 4, 4, 4, 4, 4, 0, 4, 4, 4, 4, 4, 4, 0]
    );
    assert_eq!(state.legal_moves().as_slice(), &[0, 1, 2, 3, 4, 5]);

    let mut landed = Vec::new();
    let outcome = state
        .apply_move_observed(2, |_, index| landed.push(index))
        .unwrap();

    assert_eq!(landed, vec![3, 4, 5, 6]);
    assert_eq!(outcome.turn, Turn::SameMover);
    assert_eq!(state.current_player(), South);
    assert_eq!(
        state.board().as_slice(),
        &[4, 4, 0, 5, 5, 5, 1, 4, 4, 4, 4, 4, 4, 0]
    );
}

#[test]
fn conservation() {
    for (stones, pits) in [(4, 6), (3, 4), (6, 6), (1, 1), (5, 9)] {
        let start = GameState::new(stones, pits).unwrap();
        let total = 2 * pits as u32 * stones;
        for_reachable_states(&start, 40, 1, |state| {
            assert_eq!(state.board().total(), total, "{state}");
        });
    }
}

#[test]
fn legality_closure() {
    let start = GameState::default();
    for_reachable_states(&start, 20, 2, |state| {
        let legal_moves = state.legal_moves();
        for pit in 0..state.board().len() + 2 {
            let mut copy = state.clone();
            match copy.apply_move(pit) {
                Ok(_) => assert!(legal_moves.contains(&pit)),
                Err(error) => {
                    assert!(!legal_moves.contains(&pit));
                    assert_eq!(error.kind(), ErrorKind::InvalidMove);
                    assert_eq!(&copy, state);
                }
            }
        }
    });
}

#[test]
fn legal_moves_ascending_and_owned() {
    let start = GameState::default();
    for_reachable_states(&start, 20, 3, |state| {
        let legal_moves = state.legal_moves();
        assert!(legal_moves.windows(2).all(|pair| pair[0] < pair[1]));
        for &pit in &legal_moves {
            assert_eq!(state.board().owner(pit), Some(state.current_player()));
            assert!(state.board()[pit] > 0);
        }
        assert_eq!(
            legal_moves.is_empty(),
            state.board().side_empty(state.current_player())
        );
    });
}

#[test]
fn turn_only_changes_without_extra_turn() {
    let mut rng = SmallRng::seed_from_u64(4);
    for _ in 0..20 {
        let mut state = GameState::default();
        while let Some(pit) = random_move(&state, &mut rng) {
            let mover = state.current_player();
            let house = state.house(mover);
            let outcome = state.apply_move(pit).unwrap();

            match outcome.turn {
                Turn::SameMover => assert_eq!(state.current_player(), mover),
                Turn::OtherMover => assert_eq!(state.current_player(), !mover),
            }
            // A capture always banks at least the landing stone and one opposite stone.
            assert!(outcome.captured == 0 || outcome.captured >= 2);
            assert!(outcome.captured <= state.board()[house]);
            if outcome.game_over {
                break;
            }
        }
    }
}

#[test]
fn capture_from_pit_one() {
    #[rustfmt::skip]
    let mut state = GameState::from_board(&[
        2, 1, 0, 4, 4, 4,   3,
        4, 4, 4, 7, 4, 4,   1,
    ], South).unwrap();
    let opposite_stones = state.board()[10];
    let house_before = state.board()[6];

    let outcome = state.apply_move(1).unwrap();
    assert_eq!(outcome.captured, opposite_stones + 1);
    assert_eq!(state.board()[6], house_before + opposite_stones + 1);
    assert_eq!(state.board()[2], 0);
    assert_eq!(state.board()[10], 0);
    assert_eq!(state.current_player(), North);
}

#[test]
fn terminal_sweep_collects_everything() {
    let start = GameState::default();
    for_reachable_states(&start, 30, 5, |state| {
        if state.is_game_over() {
            assert!(Player::iter().all(|p| state.board().side_sum(p) == 0));
            assert_eq!(
                state.board().house_stones(South) + state.board().house_stones(North),
                48
            );
            assert!(state.winner().is_ok());
        } else {
            assert_eq!(state.winner().unwrap_err().kind(), ErrorKind::NotTerminal);
        }
    });
}

#[test]
fn observer_is_optional() {
    let mut rng = SmallRng::seed_from_u64(6);
    for _ in 0..20 {
        let mut observed = GameState::default();
        let mut plain = GameState::default();
        while let Some(pit) = random_move(&plain, &mut rng) {
            let mut calls = 0;
            let in_pit = observed.board()[pit];
            let a = observed.apply_move_observed(pit, |_, _| calls += 1).unwrap();
            let b = plain.apply_move(pit).unwrap();

            assert_eq!(a, b);
            assert_eq!(observed, plain);
            assert_eq!(calls, in_pit);
            if b.game_over {
                break;
            }
        }
    }
}

#[test]
fn unswept_terminal_state_scores() {
    let mut rng = SmallRng::seed_from_u64(8);
    for _ in 0..50 {
        let north_pits: Vec<u32> = (0..6).map(|_| rng.gen_range(0..5)).collect();
        let mut stones = vec![0, 0, 0, 0, 0, 0, rng.gen_range(0..30)];
        stones.extend(&north_pits);
        stones.push(rng.gen_range(0..30));

        let unswept = GameState::from_board(&stones, South).unwrap();
        let mut swept = unswept.clone();
        assert!(swept.check_game_over());
        assert_eq!(unswept.winner().unwrap(), swept.winner().unwrap());
    }
}
