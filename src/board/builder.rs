//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_0x88::board::{BoardBuilder, Color, Piece};
//!
//! let board = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, Piece::King)
//!     .piece("e8".parse().unwrap(), Color::Black, Piece::King)
//!     .piece("a2".parse().unwrap(), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(board.generate_pseudo_moves().count(), 7);
//! ```

use super::history::HISTORY_CAPACITY;
use super::types::{CastlingRights, Cell, Color, Piece, Square};
use super::Board;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_number: usize,
    fullmove_number: u32,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_number: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for (sq, cell) in board.squares() {
            if let Cell::Occupied(color, piece) = cell {
                builder.pieces.push((sq, color, piece));
            }
        }
        builder.castling_rights = board.castling_rights();
        builder
    }

    /// Place a piece. Later placements on the same square win; off-board
    /// squares are ignored.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.push((square, color, piece));
        self
    }

    /// Clear a square.
    #[must_use]
    pub fn remove(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn castling_rights(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    #[must_use]
    pub fn en_passant(mut self, square: Option<Square>) -> Self {
        self.en_passant_target = square;
        self
    }

    /// Starting halfmove number, clamped to the history capacity.
    #[must_use]
    pub fn halfmove_number(mut self, halfmove: usize) -> Self {
        self.halfmove_number = halfmove.min(HISTORY_CAPACITY);
        self
    }

    #[must_use]
    pub fn fullmove_number(mut self, fullmove: u32) -> Self {
        self.fullmove_number = fullmove;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (sq, color, piece) in self.pieces {
            board.set_cell(sq, Cell::Occupied(color, piece));
        }
        board.side_to_move = self.side_to_move;
        board.castling_rights = self.castling_rights;
        board.en_passant_target = self.en_passant_target;
        board.fullmove_number = self.fullmove_number;
        board.reset_history(self.halfmove_number);
        board
    }
}
