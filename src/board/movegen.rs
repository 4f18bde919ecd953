//! Pseudo-legal move generation.
//!
//! Moves are produced lazily by [`PseudoMoves`]. King safety is not checked,
//! and castling, en passant and promotion are not generated.

use super::directions::directions;
use super::types::{Cell, Color, Move, Piece, Square, PADDED_SIZE};
use super::Board;

/// Lazy sequence of pseudo-legal moves for the side to move.
///
/// Squares are visited in index order (a8 first), directions in table order,
/// and each ray nearest square first. The iterator borrows the board, so the
/// board cannot be changed until it is dropped.
#[derive(Clone, Debug)]
pub struct PseudoMoves<'a> {
    board: &'a Board,
    color: Color,
    /// Next padded index to scan for a piece of `color`.
    next_square: usize,
    /// Piece whose directions are being walked.
    origin: Option<(Square, Piece)>,
    dir: usize,
    /// Last square yielded on the current ray, if the ray continues.
    ray: Option<Square>,
}

impl<'a> PseudoMoves<'a> {
    pub(crate) fn new(board: &'a Board) -> Self {
        PseudoMoves {
            board,
            color: board.side_to_move,
            next_square: 0,
            origin: None,
            dir: 0,
            ray: None,
        }
    }

    fn next_origin(&mut self) -> Option<(Square, Piece)> {
        while self.next_square < PADDED_SIZE {
            let sq = Square(self.next_square as u8);
            self.next_square += 1;
            if !sq.is_on_board() {
                continue;
            }
            if let Cell::Occupied(color, piece) = self.board.cells[sq.index()] {
                if color == self.color {
                    return Some((sq, piece));
                }
            }
        }
        None
    }

    /// Try one step from `start` along `delta`.
    fn step(&self, origin: Square, piece: Piece, start: Square, delta: i8) -> Option<Move> {
        let target = start.offset(delta)?;
        let occupant = self.board.cells[target.index()];
        if occupant.color() == Some(self.color) {
            return None;
        }
        if piece == Piece::Pawn && !self.pawn_may_enter(origin, target, delta) {
            return None;
        }
        Some(Move::new(origin, target, (self.color, piece), occupant))
    }

    fn pawn_may_enter(&self, origin: Square, target: Square, delta: i8) -> bool {
        let occupant = self.board.cells[target.index()];
        if target.file() != origin.file() {
            return occupant.is_piece();
        }
        if occupant != Cell::Empty {
            return false;
        }
        let single = directions(self.color, Piece::Pawn)[0];
        if delta == single {
            return true;
        }
        if origin.rank() != self.color.pawn_start_rank() {
            return false;
        }
        // Every square strictly between origin and target must be empty too.
        match origin.offset(single) {
            Some(between) => self.board.cells[between.index()] == Cell::Empty,
            None => false,
        }
    }
}

impl Iterator for PseudoMoves<'_> {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        loop {
            let (origin, piece) = match self.origin {
                Some(current) => current,
                None => {
                    let found = self.next_origin()?;
                    self.origin = Some(found);
                    self.dir = 0;
                    self.ray = None;
                    found
                }
            };

            let dirs = directions(self.color, piece);
            let Some(&delta) = dirs.get(self.dir) else {
                self.origin = None;
                continue;
            };

            let start = self.ray.unwrap_or(origin);
            match self.step(origin, piece, start, delta) {
                Some(mv) => {
                    if mv.is_capture() || !piece.is_slider() {
                        self.dir += 1;
                        self.ray = None;
                    } else {
                        self.ray = Some(mv.to());
                    }
                    return Some(mv);
                }
                None => {
                    self.dir += 1;
                    self.ray = None;
                }
            }
        }
    }
}

impl Board {
    /// Lazily generate every pseudo-legal move for the side to move.
    ///
    /// Calling this again restarts generation from the first square.
    #[must_use = "iterators are lazy and do nothing unless consumed"]
    pub fn generate_pseudo_moves(&self) -> PseudoMoves<'_> {
        PseudoMoves::new(self)
    }
}
