use super::error::MoveError;
use super::types::Move;

/// Maximum number of half-moves the history can hold.
pub const HISTORY_CAPACITY: usize = 2048;

/// Stack of applied moves, indexed by the halfmove number.
///
/// The cursor starts at the position's halfmove clock. Slots below that
/// starting point were never written by this board, so they cannot be undone.
#[derive(Clone, Debug)]
pub(crate) struct MoveHistory {
    base: usize,
    moves: Vec<Move>,
}

impl MoveHistory {
    pub(crate) fn new(base: usize) -> Self {
        debug_assert!(base <= HISTORY_CAPACITY);
        MoveHistory {
            base,
            moves: Vec::with_capacity(HISTORY_CAPACITY - base),
        }
    }

    /// Current halfmove number, i.e. the index of the next slot to write.
    #[inline]
    pub(crate) fn cursor(&self) -> usize {
        self.base + self.moves.len()
    }

    pub(crate) fn push(&mut self, mv: Move) -> Result<(), MoveError> {
        if self.cursor() >= HISTORY_CAPACITY {
            return Err(MoveError::HistoryOverflow {
                capacity: HISTORY_CAPACITY,
            });
        }
        self.moves.push(mv);
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> Result<Move, MoveError> {
        self.moves.pop().ok_or(MoveError::HistoryUnderflow)
    }

    pub(crate) fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Number of moves that can still be undone.
    pub(crate) fn outstanding(&self) -> usize {
        self.moves.len()
    }
}
