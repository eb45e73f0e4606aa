//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `setup.rs` - Starting position and board access
//! - `captures.rs` - Jump detection
//! - `validate.rs` - Move validation and the forced-capture penalty
//! - `multi_jump.rs` - Applying moves and jump chains
//! - `promotion.rs` - Crowning men
//! - `game_over.rs` - End-of-game detection
//! - `movegen.rs` - Legal move listing
//! - `proptest.rs` - Property-based tests

mod validate;

use crate::board::{Move, Square};

/// Shorthand for a move between raw coordinates.
pub(super) fn mv(from: (usize, usize), to: (usize, usize)) -> Move {
    Move::new(Square(from.0, from.1), Square(to.0, to.1))
}
