//! Board representation and the Czech draughts rules.
//!
//! The board is a plain 8x8 array of [`Cell`] values. Captures are forced:
//! skipping one costs the piece that should have jumped. A capturing piece
//! keeps jumping until no further jump is available, and men reaching the far
//! row are crowned kings.
//!
//! # Example
//! ```
//! use czech_draughts::board::{Board, Color, Move, MoveKind, NextTurn, Square};
//!
//! let mut board = Board::new();
//! let mv = Move::new(Square(2, 0), Square(3, 1));
//! assert_eq!(board.validate(mv, Color::White), Ok(MoveKind::Step));
//! let applied = board.apply(mv, Color::White);
//! assert_eq!(applied.next, NextTurn::Pass(Color::Black));
//! ```

mod builder;
mod captures;
mod display;
mod error;
mod game_over;
mod make_move;
mod movegen;
pub mod prelude;
mod state;
mod types;
mod validate;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{IllegalMoveReason, MoveError, MoveParseError, SquareError};
pub use game_over::GameResult;
pub use make_move::{AppliedMove, NextTurn};
pub use state::Board;
pub use types::{is_on_board, Cell, Color, Direction, Move, MoveList, Square, BOARD_SIZE};
pub use validate::MoveKind;

pub(crate) use types::{col_to_index, row_to_index};
