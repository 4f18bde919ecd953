use super::error::MoveError;
use super::types::{Cell, Move};
use super::Board;

impl Board {
    /// Apply `m` in place and push it onto the history.
    ///
    /// The source square is cleared and the moving piece is written to the
    /// target square. A target off the board drops the placement but still
    /// clears the source. Side to move, castling rights and the fullmove
    /// number are left alone.
    ///
    /// # Errors
    /// `InvalidMove` if the source square is off the board, `HistoryOverflow`
    /// if the history is full. The board is unchanged on error.
    pub fn make_move(&mut self, m: &Move) -> Result<(), MoveError> {
        if !m.from().is_on_board() {
            log::trace!("rejecting move from off-board square {}", m.from().0);
            return Err(MoveError::InvalidMove {
                from: m.from(),
                to: m.to(),
                moving: m.moving(),
                captured: m.captured(),
            });
        }
        self.history.push(*m)?;

        let (color, piece) = m.moving();
        self.set_cell(m.to(), Cell::Occupied(color, piece));
        self.cells[m.from().index()] = Cell::Empty;
        log::trace!("made {m} at halfmove {}", self.history.cursor());
        Ok(())
    }

    /// Take back the most recent move and return it.
    ///
    /// Restores the moving piece on its source square and the previous
    /// contents of the target square.
    ///
    /// # Errors
    /// `HistoryUnderflow` if no applied move is outstanding.
    pub fn unmake_move(&mut self) -> Result<Move, MoveError> {
        let m = self.history.pop()?;
        let (color, piece) = m.moving();
        self.cells[m.from().index()] = Cell::Occupied(color, piece);
        self.set_cell(m.to(), m.captured());
        log::trace!("unmade {m} back to halfmove {}", self.history.cursor());
        Ok(m)
    }
}
