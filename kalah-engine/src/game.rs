//! Game structure.

use crate::coretypes::{MoveOutcome, PitIndex};
use crate::error::{self, ErrorKind};
use crate::game_state::GameState;
use crate::movelist::MoveHistory;

/// Game contains information for an in progress game:
/// The base state the game started from, the sequence of moves that were
/// played, and the current state.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    pub base_state: GameState,
    pub moves: MoveHistory,
    pub state: GameState,
}

impl Game {
    /// Create a new Game from a base state and a sequence of moves.
    /// This generates the current state by applying the sequence of moves to the base.
    /// If a move in the move history was illegal, Err is returned.
    pub fn new(base_state: GameState, moves: MoveHistory) -> error::Result<Self> {
        let mut state = base_state.clone();

        for (ply, &pit) in moves.iter().enumerate() {
            state.apply_move(pit).map_err(|error| {
                error::Error::from((
                    ErrorKind::GameIllegalMove,
                    format!("ply {ply}, pit {pit}: {error}"),
                ))
            })?;
        }

        Ok(Self {
            base_state,
            moves,
            state,
        })
    }

    /// Create a new game in the standard 6 pit, 4 stone start state.
    pub fn start_position() -> Self {
        Self::from(GameState::default())
    }

    /// Apply a move to the current state and record it.
    /// The history is only extended if the move was legal.
    pub fn play(&mut self, pit: PitIndex) -> error::Result<MoveOutcome> {
        let outcome = self.state.apply_move(pit)?;
        self.moves.push(pit);
        Ok(outcome)
    }

    /// Take back the last move played, returning it.
    /// The current state is rebuilt by replaying the remaining history from the base.
    pub fn undo(&mut self) -> Option<PitIndex> {
        let pit = self.moves.pop()?;
        let mut state = self.base_state.clone();
        for &replayed in &self.moves {
            // History only ever holds moves that were legal when played.
            state.do_move(replayed);
        }
        self.state = state;
        Some(pit)
    }
}

/// Convert a state to a Game with no past moves.
impl From<GameState> for Game {
    fn from(state: GameState) -> Self {
        Self {
            base_state: state.clone(),
            moves: MoveHistory::new(),
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coretypes::Player;

    #[test]
    fn replay_history() {
        let game = Game::new(GameState::default(), vec![2, 5, 9]).unwrap();
        let mut state = GameState::default();
        for pit in [2, 5, 9] {
            state.apply_move(pit).unwrap();
        }
        assert_eq!(game.state, state);
        assert_eq!(game.state.current_player(), Player::South);
    }

    #[test]
    fn illegal_history_is_rejected() {
        // South keeps the turn after pit 2, so North's pit 9 is illegal.
        let error = Game::new(GameState::default(), vec![2, 9]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::GameIllegalMove);
    }

    #[test]
    fn play_and_undo() {
        let mut game = Game::start_position();
        game.play(2).unwrap();
        game.play(0).unwrap();
        assert!(game.play(0).is_err());
        assert_eq!(game.moves, vec![2, 0]);

        assert_eq!(game.undo(), Some(0));
        assert_eq!(game, Game::new(GameState::default(), vec![2]).unwrap());
        assert_eq!(game.undo(), Some(2));
        assert_eq!(game.state, GameState::default());
        assert_eq!(game.undo(), None);
    }
}
