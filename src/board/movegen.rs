use super::{Board, Cell, Color, Move, MoveList, Square};

impl Board {
    /// Moves `color` can play without forfeiting a piece.
    ///
    /// When any capture exists only the captures are listed, in
    /// [`Board::available_jumps`] order. Otherwise men step one square
    /// forward and kings slide along a diagonal until the next occupied
    /// square.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let jumps = self.available_jumps(color);
        if !jumps.is_empty() {
            return jumps;
        }

        let mut moves = MoveList::new();
        for (from, cell) in self.pieces(color) {
            self.generate_steps(from, cell, &mut moves);
        }
        moves
    }

    fn generate_steps(&self, from: Square, cell: Cell, moves: &mut MoveList) {
        let max_steps = if cell.is_king() { 7 } else { 1 };
        for &dir in cell.directions() {
            for steps in 1..=max_steps {
                match from.offset(dir, steps) {
                    Some(to) if self.get(to).is_empty() => moves.push(Move::new(from, to)),
                    _ => break,
                }
            }
        }
    }
}
