//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 8;

/// Column index for an algebraic column letter (`'a'` -> 0). Accepts upper case.
pub(crate) fn col_to_index(col: char) -> Option<usize> {
    match col.to_ascii_lowercase() {
        c @ 'a'..='h' => Some(c as usize - 'a' as usize),
        _ => None,
    }
}

/// Row index for an algebraic row digit (`'8'` -> 0, `'1'` -> 7).
pub(crate) fn row_to_index(row: char) -> Option<usize> {
    match row {
        '1'..='8' => Some(BOARD_SIZE - (row as usize - '0' as usize)),
        _ => None,
    }
}

/// True iff both coordinates lie in `[0, 8)`.
#[inline]
#[must_use]
pub const fn is_on_board(row: isize, col: isize) -> bool {
    row >= 0 && row < BOARD_SIZE as isize && col >= 0 && col < BOARD_SIZE as isize
}

/// A square on the board, represented as (row, col).
///
/// Row 0 is White's home edge and is written as `8` in algebraic form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Square(row, col))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// The square `steps` diagonal steps away in `dir`, if still on the board
    #[must_use]
    pub fn offset(self, (dr, dc): (isize, isize), steps: isize) -> Option<Square> {
        let row = self.0 as isize + dr * steps;
        let col = self.1 as isize + dc * steps;
        if is_on_board(row, col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Every square in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, BOARD_SIZE - self.0)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= BOARD_SIZE {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= BOARD_SIZE {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = col_to_index(col).ok_or_else(invalid)?;
        let row = row_to_index(row).ok_or_else(invalid)?;
        Ok(Square(row, col))
    }
}
