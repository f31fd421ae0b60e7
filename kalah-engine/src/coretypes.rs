//! The fundamental and simple types of `kalah_engine`.

use std::fmt::{self, Display, Write};
use std::mem::replace;
use std::ops::{Add, AddAssign, Mul, Neg, Not, Sub};
use std::str::FromStr;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////
pub const DEFAULT_PITS_PER_PLAYER: usize = 6;
pub const DEFAULT_STONES_PER_PIT: StoneKind = 4;

// Largest supported side. Fixes the capacity of boards and move lists.
pub const MAX_PITS_PER_PLAYER: usize = 16;
pub const MAX_BOARD_LEN: usize = 2 * MAX_PITS_PER_PLAYER + 2;

// Most stones a board may hold. Keeps every heuristic score below a won game.
pub const MAX_TOTAL_STONES: StoneKind = 90_000;

// Depth used by front ends when none is given.
pub const DEFAULT_DEPTH: PlyKind = 8;

// The greatest depth accepted by the engine builder.
pub const MAX_DEPTH: PlyKind = 32;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Type alias for max ply/depth.
pub type PlyKind = u8;

/// Number of stones held by a single pit or house.
pub type StoneKind = u32;

/// Index into a board. Moves are identified by the pit they are sown from.
pub type PitIndex = usize;

// Type alias to make changing Score inner type easy if needed.
pub type ScoreKind = i32;

/// Heuristic or terminal value of a position for some player.
/// Larger is better for the player the score was computed for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Score(pub ScoreKind);

/// Player 0 (South) sows from the bottom row into the house on the right.
/// Player 1 (North) sows from the top row into the house on the left.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    South,
    North,
}

/// Result of a finished game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Who moves after a move has been applied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Turn {
    /// Last stone landed in the mover's house, so the mover goes again.
    SameMover,
    /// Turn passed to the opponent.
    OtherMover,
}

/// Information about a single applied move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MoveOutcome {
    pub turn: Turn,
    /// Stones banked by a capture, including the capturing stone. 0 without capture.
    pub captured: StoneKind,
    pub game_over: bool,
}

impl Score {
    pub const MIN: Score = Score(ScoreKind::MIN);
    pub const MAX: Score = Score(ScoreKind::MAX);

    pub const fn signum(&self) -> ScoreKind {
        self.0.signum()
    }
}

impl Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}
impl Sub for Score {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}
impl Mul<ScoreKind> for Score {
    type Output = Self;
    fn mul(self, rhs: ScoreKind) -> Self::Output {
        Self(self.0 * rhs)
    }
}
impl Neg for Score {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

impl Player {
    /// Numeric player id, South is 0 and North is 1.
    pub const fn index(&self) -> usize {
        match self {
            Player::South => 0,
            Player::North => 1,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Player::South),
            1 => Some(Player::North),
            _ => None,
        }
    }

    pub const fn to_char(&self) -> char {
        match self {
            Player::South => '0',
            Player::North => '1',
        }
    }

    pub const fn iter() -> PlayerIterator {
        PlayerIterator::new()
    }
}

impl Not for Player {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Player::South => Player::North,
            Player::North => Player::South,
        }
    }
}

impl Not for &Player {
    type Output = Player;
    fn not(self) -> Self::Output {
        Player::not(*self)
    }
}

impl From<Player> for char {
    fn from(player: Player) -> Self {
        player.to_char()
    }
}

impl FromStr for Player {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "south" | "s" => Ok(Player::South),
            "1" | "north" | "n" => Ok(Player::North),
            _ => Err((ErrorKind::ParsePlayerMalformed, s).into()),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

pub struct PlayerIterator {
    maybe_player: Option<Player>,
}

impl PlayerIterator {
    pub const fn new() -> Self {
        Self {
            maybe_player: Some(Player::South),
        }
    }
}

impl Iterator for PlayerIterator {
    type Item = Player;
    fn next(&mut self) -> Option<Self::Item> {
        let value = match self.maybe_player {
            Some(Player::South) => Some(Player::North),
            Some(Player::North) | None => None,
        };
        replace(&mut self.maybe_player, value)
    }
}

impl Outcome {
    /// Returns the winning player, or None for a draw.
    pub const fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "player {player} wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

impl MoveOutcome {
    /// True if the move granted the mover another turn.
    pub const fn extra_turn(&self) -> bool {
        matches!(self.turn, Turn::SameMover)
    }
}
