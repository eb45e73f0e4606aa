//! Error types for board operations.

use std::fmt;

use super::{Color, Move, MoveList, Square};

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for malformed move input such as `"a3,b4"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Nothing was entered
    Empty,
    /// Input must name exactly two squares separated by a comma
    WrongTokenCount { found: usize },
    /// A square token is not exactly two characters
    InvalidLength { token: String },
    /// Column letter outside a-h
    InvalidColumn { char: char },
    /// Row digit outside 1-8
    InvalidRow { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::Empty => write!(f, "Invalid input: no move entered"),
            MoveParseError::WrongTokenCount { found } => {
                write!(f, "Invalid input: move must include 2 positions, found {found}")
            }
            MoveParseError::InvalidLength { token } => {
                write!(f, "Invalid input: position '{token}' must be in format XY (e.g., a3)")
            }
            MoveParseError::InvalidColumn { char } => {
                write!(f, "Invalid input: column '{char}' must be between 'a' and 'h'")
            }
            MoveParseError::InvalidRow { char } => {
                write!(f, "Invalid input: row '{char}' must be between 1 and 8")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Why an otherwise well-formed move is not legal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// The origin square does not hold one of the mover's pieces
    NotOwnPiece,
    /// The destination square is occupied
    DestinationOccupied,
    /// The move is not along a diagonal
    NotDiagonal,
    /// A man may only step a single square unless it captures
    ManMustStepOne,
    /// A man never moves towards its own side
    ManMustMoveForward,
    /// A king must move at least one square
    KingMustMove,
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            IllegalMoveReason::NotOwnPiece => "You can only move your own piece",
            IllegalMoveReason::DestinationOccupied => "End field must be empty",
            IllegalMoveReason::NotDiagonal => "Move must be diagonal",
            IllegalMoveReason::ManMustStepOne => {
                "Man can only move one square diagonally unless jumping"
            }
            IllegalMoveReason::ManMustMoveForward => "Man can only move forward",
            IllegalMoveReason::KingMustMove => "King must move at least one square diagonally",
        };
        f.write_str(text)
    }
}

/// Error type for rejected moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move breaks a movement rule; the board is unchanged
    Illegal { mv: Move, reason: IllegalMoveReason },
    /// A capture was available but not played. The piece that should have
    /// captured has been removed from the board.
    ForcedCaptureSkipped { removed: Square, required: Move },
    /// A multi-jump is in progress and the move is not one of its continuations
    ContinuationRequired { from: Square, options: MoveList },
    /// The game has already been decided
    GameFinished { winner: Color },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Illegal { mv, reason } => write!(f, "Invalid move {mv}: {reason}"),
            MoveError::ForcedCaptureSkipped { removed, required } => {
                write!(
                    f,
                    "You failed to jump ({required})! The piece at {removed} has been removed"
                )
            }
            MoveError::ContinuationRequired { from, options } => {
                let listed: Vec<String> = options.iter().map(Move::to_string).collect();
                write!(
                    f,
                    "Invalid continuation of jump from {from}, expected one of: {}",
                    listed.join(" ")
                )
            }
            MoveError::GameFinished { winner } => write!(f, "Game is over, {winner} won"),
        }
    }
}

impl std::error::Error for MoveError {}
