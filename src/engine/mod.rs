//! Game controller: turn order, jump chains and the end of the game.
//!
//! The board module decides whether single moves are legal; [`Game`] strings
//! them together into turns.

mod controller;

pub use controller::{Game, Phase, PlayOutcome, TurnStatus};
