//! End-of-game detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color, Square};

/// State of the game as far as the board can tell.
///
/// Draws only happen by agreement between the players, so they never show
/// up here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameResult {
    InProgress,
    Win(Color),
}

impl GameResult {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameResult::Win(_))
    }

    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameResult::InProgress => None,
            GameResult::Win(color) => Some(color),
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "in progress"),
            GameResult::Win(color) => write!(f, "{color} won"),
        }
    }
}

impl Board {
    /// True when the piece on `square` has a capture or a one-square step
    /// onto an empty square in one of its directions.
    ///
    /// Longer king moves are not considered.
    #[must_use]
    pub fn can_piece_act(&self, square: Square) -> bool {
        let cell = self.get(square);
        let Some(color) = cell.color() else {
            return false;
        };
        let directions = cell.directions();

        if directions
            .iter()
            .any(|&dir| self.jump_in_direction(color, square, dir).is_some())
        {
            return true;
        }

        let can_step = directions.iter().any(|&dir| {
            square
                .offset(dir, 1)
                .is_some_and(|target| self.get(target).is_empty())
        });
        if !can_step {
            log::trace!("piece at {square} has no valid moves or jumps");
        }
        can_step
    }

    /// Evaluate the board after a completed turn.
    ///
    /// A side with no pieces, or none that can act, has lost. White is
    /// checked first.
    #[must_use]
    pub fn outcome(&self) -> GameResult {
        for color in Color::BOTH {
            let count = self.count(color);
            let can_move = self.pieces(color).any(|(square, _)| self.can_piece_act(square));
            log::debug!("{color} pieces: {count}, can move: {can_move}");

            if count == 0 || !can_move {
                return GameResult::Win(color.opponent());
            }
        }
        GameResult::InProgress
    }

    /// `(finished, winner)` for the current board
    #[must_use]
    pub fn is_over(&self) -> (bool, Option<Color>) {
        let result = self.outcome();
        (result.is_over(), result.winner())
    }
}
