//! Core draughts types.
//!
//! - `Cell` and `Color` - square contents and player colors
//! - `Square` - (row, col) board coordinate with algebraic notation
//! - `Move` and `MoveList` - move representation

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList};
pub use piece::{Cell, Color, Direction};
pub use square::{is_on_board, Square, BOARD_SIZE};

pub(crate) use square::{col_to_index, row_to_index};
