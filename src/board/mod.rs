//! Chess board representation and pseudo-legal move generation.
//!
//! The board is a padded 16x8 ("0x88") array: a square index is on the board
//! exactly when `index & 0x88 == 0`, so a single mask test detects any step
//! that leaves the board. Moves are generated lazily, applied in place and
//! undone from a fixed-capacity history.
//!
//! # Example
//! ```
//! use chess_0x88::board::Board;
//!
//! let board = Board::new();
//! let moves = board.generate_pseudo_moves();
//! println!("Starting position has {} pseudo-legal moves", moves.count());
//! ```

mod builder;
mod directions;
mod display;
mod error;
mod fen;
mod history;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use fen::STARTING_FEN;
pub use history::HISTORY_CAPACITY;
pub use movegen::PseudoMoves;
pub use state::Board;
pub use types::{CastlingRights, Cell, Color, Move, Piece, Square, OFF_BOARD_MASK, PADDED_SIZE};
