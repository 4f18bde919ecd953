//! Core chess types.
//!
//! This module contains the value types shared by the board, the move
//! generator and the executor:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - index into the padded 16x8 board
//! - `Cell` - empty, padding, or a colored piece
//! - `Move` - a move plus the data needed to undo it
//! - `CastlingRights` - castling state carried from FEN

mod castling;
mod cell;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use cell::Cell;
pub use moves::Move;
pub use piece::{Color, Piece};
pub use square::{Square, OFF_BOARD_MASK, PADDED_SIZE};
