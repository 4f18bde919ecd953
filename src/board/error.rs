//! Error types for board construction and move execution.

use std::fmt;

use super::types::{Cell, Color, Piece, Square};

/// Error type for FEN and placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string does not have exactly six fields
    WrongPartCount { found: usize },
    /// Invalid piece character in the placement field
    InvalidPiece { char: char },
    /// A rank does not expand to exactly eight files
    MalformedPlacement { rank: usize, files: usize },
    /// The placement field does not have exactly eight ranks
    WrongRankCount { found: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Halfmove clock or fullmove number is not a non-negative integer
    InvalidCounter { found: String },
    /// Halfmove clock exceeds the history capacity
    HalfmoveOutOfRange { halfmove: usize, capacity: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongPartCount { found } => {
                write!(f, "FEN must have 6 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::MalformedPlacement { rank, files } => {
                write!(f, "Rank {rank} expands to {files} files, expected 8")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "Placement has {found} ranks, expected 8")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
            FenError::HalfmoveOutOfRange { halfmove, capacity } => {
                write!(f, "Halfmove clock {halfmove} exceeds history capacity {capacity}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for applying and undoing moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move starts on an off-board square
    InvalidMove {
        from: Square,
        to: Square,
        moving: (Color, Piece),
        captured: Cell,
    },
    /// Undo requested with no outstanding moves
    HistoryUnderflow,
    /// Apply requested with the history full
    HistoryOverflow { capacity: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidMove {
                from,
                to,
                moving: (color, piece),
                captured,
            } => write!(
                f,
                "Invalid move: {} from square {} to square {}, occupied by '{}'",
                piece.to_fen_char(*color),
                from.0,
                to.0,
                captured
            ),
            MoveError::HistoryUnderflow => write!(f, "No move to undo"),
            MoveError::HistoryOverflow { capacity } => {
                write!(f, "Move history is full ({capacity} half-moves)")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
