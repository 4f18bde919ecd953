//! Step offsets on the padded board.
//!
//! Index 0 is a8, so moving toward rank 8 subtracts 16.

use super::types::{Color, Piece};

pub(crate) const NORTH: i8 = -16;
pub(crate) const SOUTH: i8 = 16;
pub(crate) const EAST: i8 = 1;
pub(crate) const WEST: i8 = -1;

const ROOK: [i8; 4] = [NORTH, SOUTH, EAST, WEST];
const BISHOP: [i8; 4] = [NORTH + EAST, NORTH + WEST, SOUTH + EAST, SOUTH + WEST];
const ROYAL: [i8; 8] = [
    NORTH,
    SOUTH,
    EAST,
    WEST,
    NORTH + EAST,
    NORTH + WEST,
    SOUTH + EAST,
    SOUTH + WEST,
];
const KNIGHT: [i8; 8] = [-33, -31, -18, -14, 14, 18, 31, 33];
const WHITE_PAWN: [i8; 4] = [NORTH, NORTH * 2, NORTH + WEST, NORTH + EAST];
const BLACK_PAWN: [i8; 4] = [SOUTH, SOUTH * 2, SOUTH + WEST, SOUTH + EAST];

/// Step offsets for a piece. Pawns depend on color; everything else does not.
#[must_use]
pub(crate) const fn directions(color: Color, piece: Piece) -> &'static [i8] {
    match piece {
        Piece::Pawn => match color {
            Color::White => &WHITE_PAWN,
            Color::Black => &BLACK_PAWN,
        },
        Piece::Knight => &KNIGHT,
        Piece::Bishop => &BISHOP,
        Piece::Rook => &ROOK,
        Piece::Queen | Piece::King => &ROYAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_and_king_share_the_union_of_rook_and_bishop() {
        let mut union: Vec<i8> = ROOK.iter().chain(BISHOP.iter()).copied().collect();
        union.sort_unstable();
        let mut royal = ROYAL.to_vec();
        royal.sort_unstable();
        assert_eq!(union, royal);
    }

    #[test]
    fn pawn_tables_mirror_each_other() {
        let white = directions(Color::White, Piece::Pawn);
        let black = directions(Color::Black, Piece::Pawn);
        assert_eq!(white[0], -black[0]);
        assert_eq!(white[1], 2 * white[0]);
        assert_eq!(black[1], 2 * black[0]);
    }

    #[test]
    fn knight_offsets_are_l_shaped() {
        for delta in KNIGHT {
            let rows = (delta as i16 + 40).div_euclid(16) - 2;
            let cols = delta as i16 - rows * 16;
            let (r, c) = (rows.abs(), cols.abs());
            assert!((r, c) == (1, 2) || (r, c) == (2, 1), "offset {delta}");
        }
    }
}
