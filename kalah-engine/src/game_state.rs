//! Holds GameState struct, the most important data structure for the engine.
//! GameState represents a Kalah position and enforces the rules of the game.

use std::fmt::{self, Display};

use crate::board::Board;
use crate::coretypes::{MoveOutcome, Outcome, PitIndex, Player, StoneKind, Turn};
use crate::coretypes::{DEFAULT_PITS_PER_PLAYER, DEFAULT_STONES_PER_PIT};
use crate::error::{self, ErrorKind};
use crate::movelist::MoveList;

/// struct GameState
/// A complete data set that can represent any Kalah position.
/// # Members:
/// * board - stone counts of every pit and house.
/// * current_player - Player whose turn it is.
///
/// A GameState is only mutated through `apply_move`. Search explores hypothetical
/// futures on clones, so the real game is never touched by it.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
}

impl GameState {
    /// New game with `stones_per_pit` in every pit, empty houses and South to move.
    pub fn new(stones_per_pit: StoneKind, pits_per_player: usize) -> error::Result<Self> {
        Ok(Self {
            board: Board::new(stones_per_pit, pits_per_player)?,
            current_player: Player::South,
        })
    }

    /// Arbitrary position from raw stone counts, laid out as in `Board`.
    pub fn from_board(stones: &[StoneKind], current_player: Player) -> error::Result<Self> {
        Ok(Self {
            board: Board::from_stones(stones)?,
            current_player,
        })
    }

    /// Const getters.
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn current_player(&self) -> Player {
        self.current_player
    }
    pub fn pits_per_player(&self) -> usize {
        self.board.pits_per_player()
    }
    pub fn house(&self, player: Player) -> PitIndex {
        self.board.house(player)
    }

    /// Returns every non-empty pit of the current player, in ascending index order.
    /// Empty exactly when the current player's side is empty.
    pub fn legal_moves(&self) -> MoveList {
        self.board
            .pits(self.current_player)
            .filter(|&pit| self.board[pit] > 0)
            .collect()
    }

    /// Checks if given pit may be sown by the current player.
    pub fn is_legal_move(&self, pit: PitIndex) -> bool {
        self.board.owner(pit) == Some(self.current_player) && self.board[pit] > 0
    }

    /// Converts a 1-based pit number, counted along the current player's side in
    /// sowing order, into a board index. The pit may still be empty.
    pub fn parse_move(&self, s: &str) -> error::Result<PitIndex> {
        let number: usize = s
            .trim()
            .parse()
            .map_err(|error| error::Error::new(ErrorKind::ParseMoveMalformed, error))?;
        let pits = self.board.pits(self.current_player);

        if number == 0 || number > pits.len() {
            Err((
                ErrorKind::ParseMoveMalformed,
                format!("pit number {number} not in 1..={}", pits.len()),
            )
                .into())
        } else {
            Ok(pits.start + number - 1)
        }
    }

    /// Sow the stones of `pit` for the current player.
    /// On an illegal pit, Err is returned and the state is left unchanged.
    pub fn apply_move(&mut self, pit: PitIndex) -> error::Result<MoveOutcome> {
        self.apply_move_observed(pit, |_, _| {})
    }

    /// Same as `apply_move`, but `observer` is called with the board and the
    /// landing index each time a single stone is placed, in sowing order.
    /// The observer is only a hook for presentation and cannot affect the move.
    pub fn apply_move_observed<F>(
        &mut self,
        pit: PitIndex,
        observer: F,
    ) -> error::Result<MoveOutcome>
    where
        F: FnMut(&Board, PitIndex),
    {
        if !self.is_legal_move(pit) {
            return Err((
                ErrorKind::InvalidMove,
                format!(
                    "pit {pit} is not a non-empty pit of player {}",
                    self.current_player
                ),
            )
                .into());
        }
        Ok(self.sow(pit, observer))
    }

    /// Apply a move to self, in place.
    /// `do_move` does not check if the move is legal or not,
    /// it simply executes it while assuming legality.
    /// Used by search on moves taken from `legal_moves`.
    pub fn do_move(&mut self, pit: PitIndex) -> MoveOutcome {
        debug_assert!(self.is_legal_move(pit));
        self.sow(pit, |_, _| {})
    }

    /// Generates a new GameState from applying a legal move on a copy of the current one.
    pub fn make_move(&self, pit: PitIndex) -> (Self, MoveOutcome) {
        let mut child = self.clone();
        let outcome = child.do_move(pit);
        (child, outcome)
    }

    /// Sow, then resolve extra turn or capture for the last stone, pass the
    /// turn if needed and collect the board if the game ended.
    fn sow<F>(&mut self, pit: PitIndex, mut observer: F) -> MoveOutcome
    where
        F: FnMut(&Board, PitIndex),
    {
        let mover = self.current_player;
        let skipped_house = self.board.house(!mover);
        let len = self.board.len();

        let mut in_hand = self.board.stones[pit];
        self.board.stones[pit] = 0;
        let mut index = pit;

        // Opponent's house is passed over without consuming a stone.
        while in_hand > 0 {
            index = (index + 1) % len;
            if index == skipped_house {
                continue;
            }
            self.board.stones[index] += 1;
            in_hand -= 1;
            observer(&self.board, index);
        }

        let mut turn = Turn::OtherMover;
        let mut captured = 0;

        if index == self.board.house(mover) {
            turn = Turn::SameMover;
        } else if self.board.owner(index) == Some(mover) && self.board[index] == 1 {
            captured = self.capture(index, mover);
        }

        if turn == Turn::OtherMover {
            self.current_player = !mover;
        }

        MoveOutcome {
            turn,
            captured,
            game_over: self.check_game_over(),
        }
    }

    /// Bank the stone at `landing` together with the stones opposite of it.
    /// Nothing is captured when the opposite pit is empty.
    fn capture(&mut self, landing: PitIndex, mover: Player) -> StoneKind {
        let opposite = self.board.opposite(landing);
        let opposite_stones = self.board[opposite];
        if opposite_stones == 0 {
            return 0;
        }

        let captured = opposite_stones + 1;
        let house = self.board.house(mover);
        self.board.stones[house] += captured;
        self.board.stones[landing] = 0;
        self.board.stones[opposite] = 0;
        captured
    }

    /// Returns true if either side has no stones left in its pits.
    /// Does not sweep the board.
    pub fn is_game_over(&self) -> bool {
        Player::iter().any(|player| self.board.side_empty(player))
    }

    /// If the game is over, sweep all remaining pit stones into their owners'
    /// houses and return true. Idempotent, later calls find nothing to sweep.
    pub fn check_game_over(&mut self) -> bool {
        if self.is_game_over() {
            self.board.sweep();
            true
        } else {
            false
        }
    }

    /// Final stone count of `player`: house plus any stones still on their side.
    /// Correct before and after the terminal sweep.
    pub fn score(&self, player: Player) -> StoneKind {
        self.board.house_stones(player) + self.board.side_sum(player)
    }

    /// Returns the result of a finished game without mutating it.
    /// Err if neither side is empty yet.
    pub fn winner(&self) -> error::Result<Outcome> {
        if !self.is_game_over() {
            return Err(ErrorKind::NotTerminal.into());
        }

        let south = self.score(Player::South);
        let north = self.score(Player::North);
        Ok(if south > north {
            Outcome::Winner(Player::South)
        } else if north > south {
            Outcome::Winner(Player::North)
        } else {
            Outcome::Draw
        })
    }
}

/// Defaults to a standard 6 pit, 4 stone game.
impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board {
                stones: [DEFAULT_STONES_PER_PIT; DEFAULT_PITS_PER_PLAYER]
                    .into_iter()
                    .chain([0])
                    .chain([DEFAULT_STONES_PER_PIT; DEFAULT_PITS_PER_PLAYER])
                    .chain([0])
                    .collect(),
                pits_per_player: DEFAULT_PITS_PER_PLAYER,
            },
            current_player: Player::South,
        }
    }
}

/// Displays pretty-printed board and the player to move.
impl Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}Player to move: {}", self.board, self.current_player)
    }
}
