use std::str::FromStr;

use super::error::FenError;
use super::history::HISTORY_CAPACITY;
use super::types::{CastlingRights, Cell, Color, Piece, Square};
use super::Board;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Board {
    /// Build a board from the six FEN fields, already split.
    ///
    /// `placement` is the FEN piece-placement field; it must expand to
    /// exactly eight ranks of eight files.
    pub fn from_parts(
        placement: &str,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove: usize,
        fullmove: u32,
    ) -> Result<Self, FenError> {
        if halfmove > HISTORY_CAPACITY {
            return Err(FenError::HalfmoveOutOfRange {
                halfmove,
                capacity: HISTORY_CAPACITY,
            });
        }

        let mut board = Board::empty();
        parse_placement(&mut board, placement)?;
        board.side_to_move = side_to_move;
        board.castling_rights = castling_rights;
        board.en_passant_target = en_passant_target;
        board.fullmove_number = fullmove;
        board.reset_history(halfmove);
        Ok(board)
    }

    /// Parse a board position from FEN notation.
    ///
    /// Returns an error if the FEN string is invalid.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        parse_fen(fen).map_err(|err| {
            log::warn!("rejected FEN '{fen}': {err}");
            err
        })
    }

    /// Parse a board position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Convert the board position to FEN notation.
    ///
    /// The halfmove field is the current halfmove number, so it advances with
    /// every applied move.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                let cell = Square::from_coords(rank, file).map_or(Cell::Empty, |sq| self.cell(sq));
                if let Cell::Occupied(color, piece) = cell {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            self.castling_rights,
            ep,
            self.halfmove_number(),
            self.fullmove_number
        )
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}

fn parse_fen(fen: &str) -> Result<Board, FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() != 6 {
        return Err(FenError::WrongPartCount { found: parts.len() });
    }

    let side = match parts[1] {
        "w" => Color::White,
        "b" => Color::Black,
        other => {
            return Err(FenError::InvalidSideToMove {
                found: other.to_string(),
            })
        }
    };

    let castling =
        CastlingRights::from_fen(parts[2]).map_err(|c| FenError::InvalidCastling { char: c })?;

    let en_passant = if parts[3] == "-" {
        None
    } else {
        Some(
            parts[3]
                .parse::<Square>()
                .map_err(|_| FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                })?,
        )
    };

    let halfmove = parse_counter(parts[4])?;
    let fullmove = parse_counter(parts[5])?;

    Board::from_parts(parts[0], side, castling, en_passant, halfmove, fullmove)
}

fn parse_counter<T: FromStr>(field: &str) -> Result<T, FenError> {
    field.parse().map_err(|_| FenError::InvalidCounter {
        found: field.to_string(),
    })
}

fn parse_placement(board: &mut Board, placement: &str) -> Result<(), FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file: usize = 0;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                file += run as usize;
            } else {
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file < 8 {
                    let sq = Square((row * 16 + file) as u8);
                    board.set_cell(sq, Cell::Occupied(Color::of_fen_char(c), piece));
                }
                file += 1;
            }
            if file > 8 {
                return Err(FenError::MalformedPlacement { rank: 8 - row, files: file });
            }
        }
        if file != 8 {
            return Err(FenError::MalformedPlacement { rank: 8 - row, files: file });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_fen_matches_new() {
        let parsed = Board::from_fen(STARTING_FEN);
        let built = Board::new();
        assert_eq!(parsed.cells(), built.cells());
        assert_eq!(parsed.to_fen(), STARTING_FEN);
    }

    #[test]
    fn round_trips_all_fields() {
        let fen = "r3k2r/8/8/3pP3/8/8/8/R3K2R b Kq d6 12 40";
        let board = Board::from_fen(fen);
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.en_passant_target(), Some("d6".parse().unwrap()));
        assert_eq!(board.halfmove_number(), 12);
        assert_eq!(board.fullmove_number(), 40);
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn rejects_short_rank() {
        let err = Board::try_from_fen("rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .unwrap_err();
        assert_eq!(err, FenError::MalformedPlacement { rank: 7, files: 7 });
    }

    #[test]
    fn rejects_long_rank() {
        let err = Board::try_from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .unwrap_err();
        assert_eq!(err, FenError::MalformedPlacement { rank: 6, files: 9 });
    }

    #[test]
    fn rejects_wrong_rank_count() {
        let err = Board::try_from_fen("8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
        assert_eq!(err, FenError::WrongRankCount { found: 7 });
    }

    #[test]
    fn rejects_unknown_piece() {
        let err = Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1")
            .unwrap_err();
        assert_eq!(err, FenError::InvalidPiece { char: 'X' });
    }

    #[test]
    fn rejects_missing_fields() {
        let err = Board::try_from_fen("8/8/8/8/8/8/8/8 w - -").unwrap_err();
        assert_eq!(err, FenError::WrongPartCount { found: 4 });
    }

    #[test]
    fn rejects_extra_fields() {
        let err = Board::try_from_fen("8/8/8/8/8/8/8/8 w - - 0 1 extra").unwrap_err();
        assert_eq!(err, FenError::WrongPartCount { found: 7 });
        assert!("8/8/8/8/8/8/8/8 w - - 0 1 2".parse::<Board>().is_err());
    }

    #[test]
    fn rejects_bad_counters() {
        let err = Board::try_from_fen("8/8/8/8/8/8/8/8 w - - x 1").unwrap_err();
        assert_eq!(
            err,
            FenError::InvalidCounter {
                found: "x".to_string()
            }
        );
        let err = Board::try_from_fen("8/8/8/8/8/8/8/8 w - - 5000 1").unwrap_err();
        assert_eq!(
            err,
            FenError::HalfmoveOutOfRange {
                halfmove: 5000,
                capacity: HISTORY_CAPACITY
            }
        );
    }

    #[test]
    fn from_parts_takes_split_fields() {
        let board = Board::from_parts(
            "4k3/8/8/8/8/8/8/4K3",
            Color::Black,
            CastlingRights::none(),
            None,
            0,
            1,
        )
        .unwrap();
        assert_eq!(board.to_fen(), "4k3/8/8/8/8/8/8/4K3 b - - 0 1");
    }

    #[test]
    fn parses_via_from_str() {
        let board: Board = STARTING_FEN.parse().unwrap();
        assert_eq!(board.side_to_move(), Color::White);
        assert!("garbage".parse::<Board>().is_err());
    }
}
