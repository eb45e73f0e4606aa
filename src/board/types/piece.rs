//! Piece, cell and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Diagonal step as `(row delta, col delta)`.
pub type Direction = (isize, isize);

/// All four diagonals, in the order kings scan them.
const KING_DIRECTIONS: [Direction; 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const WHITE_MAN_DIRECTIONS: [Direction; 2] = [(1, -1), (1, 1)];
const BLACK_MAN_DIRECTIONS: [Direction; 2] = [(-1, -1), (-1, 1)];

/// Player colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in the order the game-over check visits them.
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row direction a man of this color advances in (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row on which a man of this color is promoted (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Contents of a single board square.
///
/// Cells are plain values: promoting a man writes a new `King` into the
/// square rather than changing the piece in place.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Man(Color),
    King(Color),
}

impl Cell {
    /// Color of the piece on this cell, `None` when empty
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Man(color) | Cell::King(color) => Some(color),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_man(self) -> bool {
        matches!(self, Cell::Man(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Cell::King(_))
    }

    /// True when the cell holds a piece of `color`
    #[inline]
    #[must_use]
    pub fn is_color(self, color: Color) -> bool {
        self.color() == Some(color)
    }

    /// Directions this piece may move and capture in.
    ///
    /// Men go forward only; kings use all four diagonals. Empty cells have none.
    #[must_use]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Cell::Empty => &[],
            Cell::Man(Color::White) => &WHITE_MAN_DIRECTIONS,
            Cell::Man(Color::Black) => &BLACK_MAN_DIRECTIONS,
            Cell::King(_) => &KING_DIRECTIONS,
        }
    }

    /// The king a man becomes on promotion. Kings and empty cells are unchanged.
    #[inline]
    #[must_use]
    pub const fn promoted(self) -> Cell {
        match self {
            Cell::Man(color) => Cell::King(color),
            other => other,
        }
    }

    /// Single-character symbol: `w`/`b` for men, `W`/`B` for kings, `.` for empty
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Man(Color::White) => 'w',
            Cell::Man(Color::Black) => 'b',
            Cell::King(Color::White) => 'W',
            Cell::King(Color::Black) => 'B',
        }
    }

    /// Parse a cell from its symbol (see [`Cell::to_char`])
    #[must_use]
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'w' => Some(Cell::Man(Color::White)),
            'b' => Some(Cell::Man(Color::Black)),
            'W' => Some(Cell::King(Color::White)),
            'B' => Some(Cell::King(Color::Black)),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "empty"),
            Cell::Man(color) => write!(f, "{color} man"),
            Cell::King(color) => write!(f, "{color} king"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_men_move_forward_only() {
        assert_eq!(Cell::Man(Color::White).directions(), &[(1, -1), (1, 1)]);
        assert_eq!(Cell::Man(Color::Black).directions(), &[(-1, -1), (-1, 1)]);
        assert_eq!(Cell::King(Color::Black).directions().len(), 4);
        assert!(Cell::Empty.directions().is_empty());
    }

    #[test]
    fn test_promotion_keeps_color() {
        assert_eq!(Cell::Man(Color::Black).promoted(), Cell::King(Color::Black));
        assert_eq!(Cell::King(Color::White).promoted(), Cell::King(Color::White));
        assert_eq!(Cell::Empty.promoted(), Cell::Empty);
    }

    #[test]
    fn test_char_symbols() {
        for cell in [
            Cell::Empty,
            Cell::Man(Color::White),
            Cell::Man(Color::Black),
            Cell::King(Color::White),
            Cell::King(Color::Black),
        ] {
            assert_eq!(Cell::from_char(cell.to_char()), Some(cell));
        }
        assert_eq!(Cell::from_char('x'), None);
    }

    #[test]
    fn test_opponent_and_rows() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::White.promotion_row(), 7);
        assert_eq!(Color::Black.promotion_row(), 0);
        assert_eq!(Color::Black.forward(), -1);
    }
}
