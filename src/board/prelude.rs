//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use czech_draughts::board::prelude::*;
//! ```

pub use super::{
    AppliedMove, Board, BoardBuilder, Cell, Color, GameResult, Move, MoveError, MoveKind,
    MoveList, MoveParseError, NextTurn, Square, SquareError,
};
