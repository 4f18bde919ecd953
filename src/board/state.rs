use super::history::{MoveHistory, HISTORY_CAPACITY};
use super::types::{CastlingRights, Cell, Color, Move, Piece, Square, PADDED_SIZE};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// A chess position on a padded 16x8 board with an undo history.
///
/// Side to move is never changed by [`Board::make_move`] or
/// [`Board::unmake_move`]; callers that alternate turns flip it themselves
/// with [`Board::flip_side_to_move`].
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) cells: [Cell; PADDED_SIZE],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) fullmove_number: u32,
    pub(crate) history: MoveHistory,
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.place(file, 0, Cell::Occupied(Color::White, *piece));
            board.place(file, 7, Cell::Occupied(Color::Black, *piece));
            board.place(file, 1, Cell::Occupied(Color::White, Piece::Pawn));
            board.place(file, 6, Cell::Occupied(Color::Black, Piece::Pawn));
        }
        board.castling_rights = CastlingRights::all();
        board
    }

    /// No pieces, White to move, padding cells marked off-board.
    pub(crate) fn empty() -> Self {
        let mut cells = [Cell::Empty; PADDED_SIZE];
        for (idx, cell) in cells.iter_mut().enumerate() {
            if !Square(idx as u8).is_on_board() {
                *cell = Cell::OffBoard;
            }
        }
        Board {
            cells,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            fullmove_number: 1,
            history: MoveHistory::new(0),
        }
    }

    fn place(&mut self, file: u8, rank: u8, cell: Cell) {
        if let Some(sq) = Square::from_coords(rank, file) {
            self.cells[sq.index()] = cell;
        }
    }

    /// Put `cell` on an on-board square. Off-board squares are left untouched.
    pub(crate) fn set_cell(&mut self, sq: Square, cell: Cell) {
        if sq.is_on_board() {
            self.cells[sq.index()] = cell;
        }
    }

    /// Restart the history at `halfmove`, dropping anything recorded so far.
    pub(crate) fn reset_history(&mut self, halfmove: usize) {
        debug_assert!(halfmove <= HISTORY_CAPACITY);
        self.history = MoveHistory::new(halfmove);
    }

    /// Contents of a square; anything off the board reads as `OffBoard`.
    #[inline]
    #[must_use]
    pub fn cell(&self, sq: Square) -> Cell {
        if sq.is_on_board() {
            self.cells[sq.index()]
        } else {
            Cell::OffBoard
        }
    }

    /// The on-board squares and their occupants, a8 first, h1 last.
    pub fn squares(&self) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all().map(move |sq| (sq, self.cells[sq.index()]))
    }

    /// The raw padded cell array, padding included.
    #[must_use]
    pub fn cells(&self) -> &[Cell; PADDED_SIZE] {
        &self.cells
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn flip_side_to_move(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Halfmove number; doubles as the history stack pointer.
    #[must_use]
    pub fn halfmove_number(&self) -> usize {
        self.history.cursor()
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Most recently applied move that can still be undone.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Moves applied on this board that have not been undone yet.
    #[must_use]
    pub fn outstanding_moves(&self) -> usize {
        self.history.outstanding()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_holds_off_board_sentinel() {
        let board = Board::new();
        for idx in 0..PADDED_SIZE {
            let sq = Square(idx as u8);
            if sq.is_on_board() {
                assert_ne!(board.cells()[idx], Cell::OffBoard);
            } else {
                assert_eq!(board.cells()[idx], Cell::OffBoard);
            }
        }
    }

    #[test]
    fn starting_position_layout() {
        let board = Board::new();
        assert_eq!(
            board.cell("e1".parse().unwrap()),
            Cell::Occupied(Color::White, Piece::King)
        );
        assert_eq!(
            board.cell("d8".parse().unwrap()),
            Cell::Occupied(Color::Black, Piece::Queen)
        );
        assert_eq!(board.cell("e4".parse().unwrap()), Cell::Empty);
        assert_eq!(board.squares().filter(|(_, c)| c.is_piece()).count(), 32);
        assert_eq!(board.side_to_move(), Color::White);
        assert_eq!(board.halfmove_number(), 0);
        assert_eq!(board.fullmove_number(), 1);
    }

    #[test]
    fn off_board_reads_as_sentinel() {
        let board = Board::new();
        assert_eq!(board.cell(Square(8)), Cell::OffBoard);
        assert_eq!(board.cell(Square(200)), Cell::OffBoard);
    }

    #[test]
    fn squares_iterates_in_index_order() {
        let board = Board::new();
        let first: Vec<Square> = board.squares().take(9).map(|(sq, _)| sq).collect();
        assert_eq!(first[0], Square(0));
        assert_eq!(first[7], Square(7));
        assert_eq!(first[8], Square(16));
    }

    #[test]
    fn flip_alternates_side() {
        let mut board = Board::new();
        board.flip_side_to_move();
        assert_eq!(board.side_to_move(), Color::Black);
        board.flip_side_to_move();
        assert_eq!(board.side_to_move(), Color::White);
    }
}
