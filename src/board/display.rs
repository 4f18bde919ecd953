use std::fmt;

use super::types::{Square, PADDED_SIZE};
use super::Board;

impl fmt::Display for Board {
    /// Eight lines, rank 8 first, one character per square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (sq, cell) in self.squares() {
            write!(f, "{cell}")?;
            if sq.file() == 7 {
                writeln!(f)?;
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

impl Board {
    /// Grid of on-board padded indices with the given squares shown as `*`.
    ///
    /// Debug aid for checking offsets and generated targets by eye.
    #[must_use]
    pub fn render_indexed(highlight: &[Square]) -> String {
        let mut out = String::new();
        for idx in 0..PADDED_SIZE as u8 {
            let sq = Square(idx);
            if !sq.is_on_board() {
                continue;
            }
            if highlight.contains(&sq) {
                out.push_str(&format!("{:>4}", '*'));
            } else {
                out.push_str(&format!("{idx:>4}"));
            }
            out.push(if sq.file() == 7 { '\n' } else { ' ' });
        }
        out
    }
}
