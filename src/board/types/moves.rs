//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;
use crate::board::error::SquareError;

/// Ordered list of moves, kept in generation order.
pub type MoveList = Vec<Move>;

/// A candidate move from one square to another.
///
/// Moves carry no flags: whether a move captures depends on the board it is
/// played on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Build a move from the raw `(start_row, start_col, end_row, end_col)` tuple.
    pub fn from_coords(
        start_row: usize,
        start_col: usize,
        end_row: usize,
        end_col: usize,
    ) -> Result<Self, SquareError> {
        Ok(Move {
            from: Square::try_from((start_row, start_col))?,
            to: Square::try_from((end_row, end_col))?,
        })
    }

    /// The move as a `(start_row, start_col, end_row, end_col)` tuple
    #[must_use]
    pub const fn coords(self) -> (usize, usize, usize, usize) {
        (self.from.0, self.from.1, self.to.0, self.to.1)
    }

    #[inline]
    #[must_use]
    pub const fn row_delta(self) -> isize {
        self.to.0 as isize - self.from.0 as isize
    }

    #[inline]
    #[must_use]
    pub const fn col_delta(self) -> isize {
        self.to.1 as isize - self.from.1 as isize
    }

    /// Number of rows travelled
    #[inline]
    #[must_use]
    pub const fn distance(self) -> usize {
        self.row_delta().unsigned_abs()
    }

    #[inline]
    #[must_use]
    pub const fn is_diagonal(self) -> bool {
        self.row_delta().unsigned_abs() == self.col_delta().unsigned_abs()
    }

    /// True for an exact two-square diagonal hop, the only capture shape
    #[inline]
    #[must_use]
    pub const fn is_jump_shaped(self) -> bool {
        self.row_delta().unsigned_abs() == 2 && self.col_delta().unsigned_abs() == 2
    }

    /// The square a jump passes over
    #[inline]
    #[must_use]
    pub const fn midpoint(self) -> Square {
        Square((self.from.0 + self.to.0) / 2, (self.from.1 + self.to.1) / 2)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.from, self.to)
    }
}
