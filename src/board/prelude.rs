//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_0x88::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, CastlingRights, Cell, Color, FenError, Move, MoveError, Piece,
    PseudoMoves, Square, SquareError, STARTING_FEN,
};
