use std::fmt;

use super::{Board, Square, BOARD_SIZE};

const COLUMN_HEADER: &str = "    a b c d e f g h";

/// Plain-text grid, row 0 (algebraic 8) at the top.
///
/// ```text
///     a b c d e f g h
///   +-----------------+
/// 8 | w . w . w . w . | 8
/// ...
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{COLUMN_HEADER}")?;
        writeln!(f, "  +-----------------+")?;
        for row in 0..BOARD_SIZE {
            let label = BOARD_SIZE - row;
            write!(f, "{label} |")?;
            for col in 0..BOARD_SIZE {
                write!(f, " {}", self.get(Square(row, col)).to_char())?;
            }
            writeln!(f, " | {label}")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "{COLUMN_HEADER}")
    }
}
