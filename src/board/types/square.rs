//! Square types for the padded 16x8 board.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Mask that is non-zero for every index outside the 8x8 board.
pub const OFF_BOARD_MASK: u8 = 0x88;

/// Number of cells in the padded board.
pub const PADDED_SIZE: usize = 128;

/// A square on the padded 16x8 board.
///
/// Index 0 is a8, index 7 is h8, index 16 is a7 and so on down to h1 at 119.
/// Columns 8-15 of each row are padding. A `Square` may hold an off-board
/// index; use [`Square::is_on_board`] before treating it as a real square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8);

impl Square {
    /// Create a square from a rank (0 = rank 1) and file (0 = file a).
    #[must_use]
    pub const fn from_coords(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((7 - rank) * 16 + file))
        } else {
            None
        }
    }

    /// True when the index lies on the 8x8 board.
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 & OFF_BOARD_MASK == 0
    }

    /// Raw padded index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row in the padded grid (0 = rank 8, 7 = rank 1).
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 16
    }

    /// Rank label, 0-7 where 0 = rank 1.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        7 - self.row()
    }

    /// File, 0-7 where 0 = file a. Only meaningful on-board.
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 % 16
    }

    /// Step by a padded-board offset, returning `None` if the result is off-board.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Option<Self> {
        let target = self.0 as i16 + delta as i16;
        if target < 0 || target >= PADDED_SIZE as i16 {
            return None;
        }
        let sq = Square(target as u8);
        if sq.is_on_board() {
            Some(sq)
        } else {
            None
        }
    }

    /// All 64 on-board squares in index order (a8, b8, ..., h1).
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn all() -> impl Iterator<Item = Square> {
        (0..PADDED_SIZE as u8)
            .map(Square)
            .filter(|sq| sq.is_on_board())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((rank, file): (u8, u8)) -> Result<Self, Self::Error> {
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square((7 - rank) * 16 + file))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };

        Square::from_coords(rank, file).ok_or_else(invalid)
    }
}
