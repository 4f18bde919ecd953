use crate::board::{Board, Move, MoveError};

impl Board {
    /// Count leaf positions exactly `depth` plies below the current one.
    ///
    /// Counts are pseudo-legal: moves that leave the king in check are
    /// included. Side to move is flipped around each recursion, so the board
    /// comes back unchanged.
    ///
    /// # Errors
    /// Propagates any `MoveError` from applying or undoing a move.
    pub fn perft(&mut self, depth: usize) -> Result<u64, MoveError> {
        if depth == 0 {
            return Ok(1);
        }

        let moves: Vec<Move> = self.generate_pseudo_moves().collect();
        let mut nodes = 0;
        for m in &moves {
            nodes += self.perft_child(m, depth - 1)?;
        }

        Ok(nodes)
    }

    /// Per-move subtotals at the root. Their sum is `perft(depth)`.
    ///
    /// # Errors
    /// Propagates any `MoveError` from applying or undoing a move.
    pub fn perft_divide(&mut self, depth: usize) -> Result<Vec<(Move, u64)>, MoveError> {
        if depth == 0 {
            return Ok(Vec::new());
        }

        let moves: Vec<Move> = self.generate_pseudo_moves().collect();
        let mut split = Vec::with_capacity(moves.len());
        for m in moves {
            let nodes = self.perft_child(&m, depth - 1)?;
            log::debug!("{m}: {nodes}");
            split.push((m, nodes));
        }

        Ok(split)
    }

    fn perft_child(&mut self, m: &Move, depth: usize) -> Result<u64, MoveError> {
        self.make_move(m)?;
        self.flip_side_to_move();
        let nodes = self.perft(depth);
        self.flip_side_to_move();
        self.unmake_move()?;
        nodes
    }
}
