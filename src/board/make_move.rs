//! Playing validated moves: piece transfer, capture removal, promotion and
//! multi-jump continuation.

use super::{Board, Cell, Color, Move, MoveList, Square};

/// Who moves after a move has been played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NextTurn {
    /// The turn is over and `Color` is now to move
    Pass(Color),
    /// The capturing piece landed on `from` and can jump again; `side` must
    /// play one of `jumps` before the turn ends
    Continue {
        side: Color,
        from: Square,
        jumps: MoveList,
    },
}

impl NextTurn {
    /// The side to move once this result is in effect
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        match self {
            NextTurn::Pass(color) => *color,
            NextTurn::Continue { side, .. } => *side,
        }
    }
}

/// Result of [`Board::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    /// Square of the piece removed by a capture
    pub captured: Option<Square>,
    /// Whether the moving man was crowned on landing
    pub promoted: bool,
    pub next: NextTurn,
}

impl Board {
    /// Play `mv` for `color`. The move must already have passed
    /// [`Board::validate`].
    ///
    /// After a capture the landed piece is checked for further jumps, even
    /// if it was just promoted; when there are any the same side keeps the
    /// move.
    pub fn apply(&mut self, mv: Move, color: Color) -> AppliedMove {
        let captured = self.is_capture(mv, color).then(|| mv.midpoint());

        let piece = self.get(mv.from);
        self.set(mv.to, piece);
        self.set(mv.from, Cell::Empty);
        log::debug!("{color} played {mv}");

        if let Some(square) = captured {
            self.set(square, Cell::Empty);
            log::debug!("captured piece removed from {square}");
        }

        let promoted = self.promote(mv.to);

        let next = match captured {
            Some(_) => {
                let jumps = self.jumps_from(color, mv.to);
                if jumps.is_empty() {
                    NextTurn::Pass(color.opponent())
                } else {
                    log::debug!("{color} must continue jumping from {}", mv.to);
                    NextTurn::Continue {
                        side: color,
                        from: mv.to,
                        jumps,
                    }
                }
            }
            None => NextTurn::Pass(color.opponent()),
        };

        AppliedMove {
            mv,
            captured,
            promoted,
            next,
        }
    }

    /// Crown a man standing on its promotion row. Returns true if it was crowned.
    pub fn promote(&mut self, square: Square) -> bool {
        match self.get(square) {
            man @ Cell::Man(color) if square.row() == color.promotion_row() => {
                self.set(square, man.promoted());
                log::debug!("piece at {square} promoted to {color} king");
                true
            }
            _ => false,
        }
    }
}
