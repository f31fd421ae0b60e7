//! Board representation.
//!
//! A board of `p` pits per player is a flat sequence of `2p + 2` stone counts:
//!
//! ```text
//! indices:  0 .. p-1     p        p+1 .. 2p    2p+1
//!           South pits   South    North pits   North
//!                        house                 house
//! ```
//!
//! Sowing walks the sequence counter-clockwise in ascending index order,
//! so the pit opposite of index `i` is the reflection `2p - i`.

use std::fmt::{self, Display};
use std::ops::{Index, Range};

use arrayvec::ArrayVec;

use crate::coretypes::{
    PitIndex, Player, StoneKind, MAX_BOARD_LEN, MAX_PITS_PER_PLAYER, MAX_TOTAL_STONES,
};
use crate::error::{self, ErrorKind};

/// Stone counts of every pit and house.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    pub(crate) stones: ArrayVec<StoneKind, MAX_BOARD_LEN>,
    pub(crate) pits_per_player: usize,
}

impl Board {
    /// Create a board with `stones_per_pit` in every pit and empty houses.
    pub fn new(stones_per_pit: StoneKind, pits_per_player: usize) -> error::Result<Self> {
        check_pits_per_player(pits_per_player)?;
        check_total_stones((2 * pits_per_player as StoneKind).checked_mul(stones_per_pit))?;

        let mut stones = ArrayVec::new();
        for _ in Player::iter() {
            stones.extend((0..pits_per_player).map(|_| stones_per_pit));
            stones.push(0);
        }

        Ok(Self {
            stones,
            pits_per_player,
        })
    }

    /// Create a board from raw stone counts laid out as described in the module docs.
    pub fn from_stones(stones: &[StoneKind]) -> error::Result<Self> {
        if stones.len() < 4 || stones.len() % 2 != 0 {
            return Err((
                ErrorKind::BoardLengthMismatch,
                format!("length {} is not 2p + 2", stones.len()),
            )
                .into());
        }
        let pits_per_player = (stones.len() - 2) / 2;
        check_pits_per_player(pits_per_player)?;
        check_total_stones(
            stones
                .iter()
                .try_fold(0 as StoneKind, |acc, &count| acc.checked_add(count)),
        )?;

        Ok(Self {
            stones: stones.iter().copied().collect(),
            pits_per_player,
        })
    }

    pub fn pits_per_player(&self) -> usize {
        self.pits_per_player
    }

    /// Number of positions on the board, houses included.
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    pub fn as_slice(&self) -> &[StoneKind] {
        &self.stones
    }

    /// Index of `player`'s house.
    pub const fn house(&self, player: Player) -> PitIndex {
        match player {
            Player::South => self.pits_per_player,
            Player::North => 2 * self.pits_per_player + 1,
        }
    }

    /// Range of indices of `player`'s pits, houses excluded.
    pub const fn pits(&self, player: Player) -> Range<PitIndex> {
        match player {
            Player::South => 0..self.pits_per_player,
            Player::North => self.pits_per_player + 1..2 * self.pits_per_player + 1,
        }
    }

    /// Returns the player whose side the pit at `index` is on.
    /// Houses and out of range indices have no pit owner.
    pub fn owner(&self, index: PitIndex) -> Option<Player> {
        Player::iter().find(|&player| self.pits(player).contains(&index))
    }

    pub fn is_house(&self, index: PitIndex) -> bool {
        Player::iter().any(|player| self.house(player) == index)
    }

    /// Pit facing `index` across the board. Only meaningful for pits.
    pub const fn opposite(&self, index: PitIndex) -> PitIndex {
        debug_assert!(index < 2 * self.pits_per_player + 1);
        2 * self.pits_per_player - index
    }

    /// Sum of stones in `player`'s pits.
    pub fn side_sum(&self, player: Player) -> StoneKind {
        self.stones[self.pits(player)].iter().sum()
    }

    /// Returns true if all of `player`'s pits are empty.
    pub fn side_empty(&self, player: Player) -> bool {
        self.stones[self.pits(player)].iter().all(|&count| count == 0)
    }

    /// Stones in `player`'s house.
    pub fn house_stones(&self, player: Player) -> StoneKind {
        self.stones[self.house(player)]
    }

    /// Sum of every stone on the board.
    pub fn total(&self) -> StoneKind {
        self.stones.iter().sum()
    }

    /// Moves every pit stone into its owner's house.
    pub(crate) fn sweep(&mut self) {
        for player in Player::iter() {
            let swept = self.side_sum(player);
            let house = self.house(player);
            let pits = self.pits(player);
            self.stones[pits]
                .iter_mut()
                .for_each(|count| *count = 0);
            self.stones[house] += swept;
        }
    }
}

fn check_pits_per_player(pits_per_player: usize) -> error::Result<()> {
    if pits_per_player == 0 || pits_per_player > MAX_PITS_PER_PLAYER {
        Err((
            ErrorKind::InvalidPitsPerPlayer,
            format!("{pits_per_player} not in 1..={MAX_PITS_PER_PLAYER}"),
        )
            .into())
    } else {
        Ok(())
    }
}

/// `total` is None when the sum already overflowed the stone counter.
fn check_total_stones(total: Option<StoneKind>) -> error::Result<()> {
    match total {
        Some(total) if total <= MAX_TOTAL_STONES => Ok(()),
        Some(total) => Err((
            ErrorKind::StoneCountOverflow,
            format!("{total} stones, at most {MAX_TOTAL_STONES} allowed"),
        )
            .into()),
        None => Err(ErrorKind::StoneCountOverflow.into()),
    }
}

impl Index<PitIndex> for Board {
    type Output = StoneKind;
    fn index(&self, index: PitIndex) -> &Self::Output {
        &self.stones[index]
    }
}

/// Pretty-printed board as seen by South. North's pits run right to left on top,
/// North's house is on the left and South's house on the right.
impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let north: String = self
            .pits(Player::North)
            .rev()
            .map(|index| format!("[{:>2}]", self.stones[index]))
            .collect();
        let south: String = self
            .pits(Player::South)
            .map(|index| format!("[{:>2}]", self.stones[index]))
            .collect();
        let gap = " ".repeat(4 * self.pits_per_player);

        writeln!(f, "    {north}")?;
        writeln!(
            f,
            "[{:>2}]{gap}[{:>2}]",
            self.house_stones(Player::North),
            self.house_stones(Player::South)
        )?;
        writeln!(f, "    {south}")
    }
}
