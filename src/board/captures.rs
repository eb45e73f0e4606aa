//! Capture detection.
//!
//! Every piece captures by hopping exactly two squares along a diagonal over
//! an adjacent enemy piece onto an empty square. When listing jumps, kings
//! use all four diagonals and men only their two forward ones; a move typed
//! in by a player is accepted as a capture in any direction. Longer king
//! captures do not exist in this rule set.

use super::{Board, Color, Direction, Move, MoveList, Square};

impl Board {
    /// The jump from `from` in `dir`, if `color` could make it.
    ///
    /// Only looks at the squares passed over and landed on; the caller decides
    /// whether the piece on `from` may use `dir`.
    pub(crate) fn jump_in_direction(
        &self,
        color: Color,
        from: Square,
        dir: Direction,
    ) -> Option<Move> {
        let mid = from.offset(dir, 1)?;
        let end = from.offset(dir, 2)?;

        let jumped = self.get(mid);
        let landing = self.get(end);
        if jumped.is_color(color.opponent()) && landing.is_empty() {
            log::trace!("valid jump {from} -> {end} over {mid}");
            Some(Move::new(from, end))
        } else {
            log::trace!("no jump {from} -> {end} (middle: {jumped}, end: {landing})");
            None
        }
    }

    /// Every immediate jump available to `color`.
    ///
    /// Pieces are visited in row-major order and each piece's directions in
    /// their fixed order, so the first entry is deterministic. The forced
    /// capture penalty relies on that.
    #[must_use]
    pub fn available_jumps(&self, color: Color) -> MoveList {
        let mut jumps = MoveList::new();
        for (square, cell) in self.pieces(color) {
            for &dir in cell.directions() {
                if let Some(jump) = self.jump_in_direction(color, square, dir) {
                    jumps.push(jump);
                }
            }
        }
        log::debug!("{color} has {} jump(s) available", jumps.len());
        jumps
    }

    /// Jumps `color` can make with the piece on `square`.
    ///
    /// Empty when the square does not hold a piece of `color`.
    #[must_use]
    pub fn jumps_from(&self, color: Color, square: Square) -> MoveList {
        let cell = self.get(square);
        if !cell.is_color(color) {
            return MoveList::new();
        }
        cell.directions()
            .iter()
            .filter_map(|&dir| self.jump_in_direction(color, square, dir))
            .collect()
    }

    /// True when `mv` captures for `color`: the mover's own piece hops
    /// exactly two squares diagonally over an enemy piece onto an empty
    /// square.
    ///
    /// Unlike [`Board::available_jumps`], the direction is not checked, so a
    /// man played backwards over an enemy still captures.
    #[must_use]
    pub fn is_capture(&self, mv: Move, color: Color) -> bool {
        if !mv.is_jump_shaped() || !self.get(mv.from).is_color(color) {
            return false;
        }
        let dir = (mv.row_delta() / 2, mv.col_delta() / 2);
        self.jump_in_direction(color, mv.from, dir) == Some(mv)
    }
}
