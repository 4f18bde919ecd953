//! Contents of one padded-board cell.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};

/// What a cell of the padded board holds.
///
/// `OffBoard` is only ever stored in padding cells and `Empty` only on-board,
/// so the two are never confused for each other.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    OffBoard,
    Occupied(Color, Piece),
}

impl Cell {
    /// True if a piece stands here.
    #[inline]
    #[must_use]
    pub const fn is_piece(self) -> bool {
        matches!(self, Cell::Occupied(..))
    }

    /// Color of the occupant, if any.
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Occupied(color, _) => Some(color),
            _ => None,
        }
    }

    /// `.` for empty, `-` for padding, otherwise the FEN letter.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::OffBoard => '-',
            Cell::Occupied(color, piece) => piece.to_fen_char(color),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
