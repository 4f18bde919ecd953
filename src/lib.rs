pub mod board;
mod perft;

pub use board::{
    Board, BoardBuilder, CastlingRights, Cell, Color, FenError, Move, MoveError, Piece,
    PseudoMoves, Square, SquareError, HISTORY_CAPACITY, STARTING_FEN,
};
