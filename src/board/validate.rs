//! Move validation, including the forced-capture penalty.

use super::{Board, Cell, Color, IllegalMoveReason, Move, MoveError, Square};

/// How an accepted move is to be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Ordinary diagonal move onto an empty square
    Step,
    /// Two-square hop removing the piece on `captured`
    Capture { captured: Square },
}

impl Board {
    /// Decide whether `color` may play `mv`.
    ///
    /// Checks run in a fixed order:
    /// 1. a capture is accepted straight away;
    /// 2. if any capture was available instead, the piece making the first
    ///    one (in [`Board::available_jumps`] order) is taken off the board and
    ///    the move is rejected with [`MoveError::ForcedCaptureSkipped`];
    /// 3. the origin must hold one of the mover's pieces;
    /// 4. the destination must be empty;
    /// 5. the move must be diagonal;
    /// 6. a man steps exactly one square forward, a king at least one square.
    ///
    /// The penalty in step 2 is the only way this mutates the board.
    pub fn validate(&mut self, mv: Move, color: Color) -> Result<MoveKind, MoveError> {
        if self.is_capture(mv, color) {
            return Ok(MoveKind::Capture {
                captured: mv.midpoint(),
            });
        }

        // Every listed jump would have passed the capture check, so `mv` is
        // not among them.
        if let Some(&required) = self.available_jumps(color).first() {
            self.set(required.from, Cell::Empty);
            log::warn!(
                "{color} skipped the jump {required}; the piece at {} has been removed",
                required.from
            );
            return Err(MoveError::ForcedCaptureSkipped {
                removed: required.from,
                required,
            });
        }

        self.check_step(mv, color).map(|()| MoveKind::Step)
    }

    /// Checks 3-6 of [`Board::validate`] for a non-capturing move.
    fn check_step(&self, mv: Move, color: Color) -> Result<(), MoveError> {
        let illegal = |reason| MoveError::Illegal { mv, reason };

        let piece = self.get(mv.from);
        if !piece.is_color(color) {
            return Err(illegal(IllegalMoveReason::NotOwnPiece));
        }
        if !self.get(mv.to).is_empty() {
            return Err(illegal(IllegalMoveReason::DestinationOccupied));
        }
        if !mv.is_diagonal() {
            return Err(illegal(IllegalMoveReason::NotDiagonal));
        }

        match piece {
            Cell::Man(_) if mv.distance() != 1 => Err(illegal(IllegalMoveReason::ManMustStepOne)),
            Cell::Man(owner) if mv.row_delta() != owner.forward() => {
                Err(illegal(IllegalMoveReason::ManMustMoveForward))
            }
            // Kings have no upper bound on an ordinary move.
            Cell::King(_) if mv.distance() < 1 => Err(illegal(IllegalMoveReason::KingMustMove)),
            _ => Ok(()),
        }
    }
}
