//! Engine struct acts as a simplified API for the various parts of the Kalah engine.

use std::sync::mpsc::{self, Receiver};
use std::thread::JoinHandle;

use crate::coretypes::{MoveOutcome, PitIndex, PlyKind, StoneKind};
use crate::coretypes::{DEFAULT_DEPTH, DEFAULT_PITS_PER_PLAYER, DEFAULT_STONES_PER_PIT, MAX_DEPTH};
use crate::error::{self, ErrorKind};
use crate::game::Game;
use crate::game_state::GameState;
use crate::search::{self, SearchResult};

/// EngineBuilder allows for parameters of an Engine to be set and built once.
///
/// Default values:
///
/// * `pits_per_player`: 6
/// * `stones_per_pit`: 4
/// * `depth`: 8
/// * `debug`: false
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EngineBuilder {
    pits_per_player: usize,
    stones_per_pit: StoneKind,
    depth: PlyKind,
    debug: bool,
}

impl EngineBuilder {
    /// Create a new default EngineBuilder.
    pub fn new() -> Self {
        Self {
            pits_per_player: DEFAULT_PITS_PER_PLAYER,
            stones_per_pit: DEFAULT_STONES_PER_PIT,
            depth: DEFAULT_DEPTH,
            debug: false,
        }
    }

    /// Create and return a new Engine. Fails if the board dimensions or depth are out of range.
    pub fn build(&self) -> error::Result<Engine> {
        if self.depth > MAX_DEPTH {
            return Err((
                ErrorKind::EngineInvalidDepth,
                format!("{} not in 0..={MAX_DEPTH}", self.depth),
            )
                .into());
        }
        let state = GameState::new(self.stones_per_pit, self.pits_per_player)?;

        Ok(Engine {
            game: Game::from(state),
            depth: self.depth,
            debug: self.debug,
            search_handle: None,
        })
    }

    /// Set the number of pits on each side of the board.
    pub fn pits_per_player(mut self, pits_per_player: usize) -> Self {
        self.pits_per_player = pits_per_player;
        self
    }

    /// Set the number of stones each pit starts with.
    pub fn stones_per_pit(mut self, stones_per_pit: StoneKind) -> Self {
        self.stones_per_pit = stones_per_pit;
        self
    }

    /// Set the depth in plies of every search.
    pub fn depth(mut self, depth: PlyKind) -> Self {
        self.depth = depth;
        self
    }

    /// Set whether the engine begins in debug mode.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A search started by the engine that has not been collected yet.
struct PendingSearch {
    handle: JoinHandle<()>,
    receiver: Receiver<SearchResult>,
}

/// Engine owns the real game and runs searches on snapshots of it.
///
/// At most one search runs at a time. The game may only be changed while no
/// search is pending, so a result always belongs to the current state.
pub struct Engine {
    game: Game,
    depth: PlyKind,
    debug: bool,

    search_handle: Option<PendingSearch>,
}

impl Engine {
    /// Returns reference to current game of engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns reference to the current state of the game.
    pub fn state(&self) -> &GameState {
        &self.game.state
    }

    pub fn depth(&self) -> PlyKind {
        self.depth
    }

    /// Returns current debug flag of engine.
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Update the engine's debug parameter.
    pub fn set_debug(&mut self, new_debug: bool) {
        self.debug = new_debug;
    }

    /// Returns true if the engine is ready to start a search.
    pub fn ready(&self) -> bool {
        self.search_handle.is_none()
    }

    /// Restart from the base state of the current game.
    pub fn new_game(&mut self) -> error::Result<()> {
        self.ensure_ready()?;
        self.game = Game::from(self.game.base_state.clone());
        Ok(())
    }

    /// Apply a move to the real game.
    pub fn apply_move(&mut self, pit: PitIndex) -> error::Result<MoveOutcome> {
        self.ensure_ready()?;
        self.game.play(pit)
    }

    /// Take back the last move of the game.
    pub fn undo(&mut self) -> error::Result<Option<PitIndex>> {
        self.ensure_ready()?;
        Ok(self.game.undo())
    }

    /// Run a blocking search of the current state.
    pub fn search_sync(&mut self) -> error::Result<SearchResult> {
        self.search()?;
        self.wait()
    }

    /// Run a non-blocking search on a snapshot of the current state.
    /// The engine only runs one search at a time, so if it is not ready, it fails to begin.
    pub fn search(&mut self) -> error::Result<()> {
        if !self.ready() {
            return Err((ErrorKind::EngineAlreadySearching, "failed to begin search").into());
        }

        let (sender, receiver) = mpsc::channel();
        let handle = search::search_nonblocking(
            self.game.state.clone(),
            self.depth,
            self.debug,
            sender,
        );
        self.search_handle = Some(PendingSearch { handle, receiver });
        Ok(())
    }

    /// Engine blocks thread until the pending search is completed and returns its result.
    pub fn wait(&mut self) -> error::Result<SearchResult> {
        let pending = self
            .search_handle
            .take()
            .ok_or(ErrorKind::EngineNotSearching)?;

        let result = pending
            .receiver
            .recv()
            .map_err(|error| error::Error::new(ErrorKind::EngineSearchFailed, error))?;
        let _ = pending.handle.join();
        Ok(result)
    }

    fn ensure_ready(&self) -> error::Result<()> {
        if self.ready() {
            Ok(())
        } else {
            Err((ErrorKind::EngineAlreadySearching, "game is being searched").into())
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            game: Game::start_position(),
            depth: DEFAULT_DEPTH,
            debug: false,
            search_handle: None,
        }
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        if let Some(pending) = self.search_handle.take() {
            let _ = pending.handle.join();
        }
    }
}
