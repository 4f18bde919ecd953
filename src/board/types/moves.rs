//! Move record.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::piece::{Color, Piece};
use super::square::Square;

/// A pseudo-legal move together with everything needed to take it back.
///
/// `captured` is whatever stood on the target square before the move
/// (`Cell::Empty` for a quiet move), so undoing a move never has to look at
/// anything but the move itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    moving: (Color, Piece),
    captured: Cell,
    is_capture: bool,
    score: i32,
}

impl Move {
    /// Create a move; the capture flag is derived from `captured`.
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, moving: (Color, Piece), captured: Cell) -> Self {
        Move {
            from,
            to,
            moving,
            captured,
            is_capture: captured.is_piece(),
            score: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Color and type of the piece being moved
    #[inline]
    #[must_use]
    pub const fn moving(self) -> (Color, Piece) {
        self.moving
    }

    /// Contents of the target square before the move
    #[inline]
    #[must_use]
    pub const fn captured(self) -> Cell {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.is_capture
    }

    /// Ordering score, reserved for search. Always zero here.
    #[inline]
    #[must_use]
    pub const fn score(self) -> i32 {
        self.score
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_flag_follows_target_contents() {
        let from: Square = "e4".parse().unwrap();
        let to: Square = "d5".parse().unwrap();
        let quiet = Move::new(from, to, (Color::White, Piece::Pawn), Cell::Empty);
        assert!(!quiet.is_capture());

        let capture = Move::new(
            from,
            to,
            (Color::White, Piece::Pawn),
            Cell::Occupied(Color::Black, Piece::Pawn),
        );
        assert!(capture.is_capture());
        assert_eq!(capture.score(), 0);
        assert_eq!(capture.to_string(), "e4d5");
    }
}
