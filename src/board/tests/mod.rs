//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for known positions
//! - `make_unmake.rs` - Apply/undo correctness and history errors
//! - `movegen.rs` - Piece movement rules and ray termination
//! - `proptest.rs` - Property-based tests


use rand::prelude::*;

use crate::board::{Board, Move};

/// Play up to `plies` random pseudo-legal moves, flipping the side after each.
///
/// Returns the moves played so they can be undone in reverse.
pub(super) fn random_playout(board: &mut Board, rng: &mut StdRng, plies: usize) -> Vec<Move> {
    let mut played = Vec::with_capacity(plies);
    for _ in 0..plies {
        let moves: Vec<Move> = board.generate_pseudo_moves().collect();
        let Some(mv) = moves.choose(rng).copied() else {
            break;
        };
        board.make_move(&mv).unwrap();
        board.flip_side_to_move();
        played.push(mv);
    }
    assert_eq!(board.outstanding_moves(), played.len());
    played
}

pub(super) fn sq(name: &str) -> crate::board::Square {
    name.parse().unwrap()
}
