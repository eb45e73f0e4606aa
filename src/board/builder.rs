//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece instead of playing up to them.
//!
//! # Example
//! ```
//! use czech_draughts::board::{BoardBuilder, Cell, Color, Square};
//!
//! let board = BoardBuilder::new()
//!     .man(Square(2, 5), Color::White)
//!     .man(Square(3, 4), Color::Black)
//!     .king(Square(7, 0), Color::Black)
//!     .build();
//! assert_eq!(board.get(Square(7, 0)), Cell::King(Color::Black));
//! ```

use super::{Board, Cell, Color, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Cell)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let pieces = Square::all()
            .map(|sq| (sq, board.get(sq)))
            .filter(|(_, cell)| !cell.is_empty())
            .collect();
        BoardBuilder { pieces }
    }

    /// Place a cell on the board, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, square: Square, cell: Cell) -> Self {
        self.pieces.retain(|(sq, _)| *sq != square);
        if !cell.is_empty() {
            self.pieces.push((square, cell));
        }
        self
    }

    #[must_use]
    pub fn man(self, square: Square, color: Color) -> Self {
        self.piece(square, Cell::Man(color))
    }

    #[must_use]
    pub fn king(self, square: Square, color: Color) -> Self {
        self.piece(square, Cell::King(color))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(self, square: Square) -> Self {
        self.piece(square, Cell::Empty)
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, cell) in self.pieces {
            board.set(square, cell);
        }
        board
    }
}
