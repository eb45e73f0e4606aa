use super::{Cell, Color, Square, BOARD_SIZE};

/// Rows holding White's men at the start of a game.
const WHITE_START_ROWS: [usize; 3] = [0, 1, 2];
/// Rows holding Black's men at the start of a game.
const BLACK_START_ROWS: [usize; 3] = [5, 6, 7];

/// The 8x8 grid of cells.
///
/// Squares are addressed as `(row, col)`; row 0 is White's home edge and
/// row 7 is Black's. The board is a plain value: cells are copied, never
/// shared between squares.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// The standard starting position: three ranks of men per side on
    /// alternating squares.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (color, rows) in [
            (Color::White, WHITE_START_ROWS),
            (Color::Black, BLACK_START_ROWS),
        ] {
            for row in rows {
                for col in (0..BOARD_SIZE).filter(|col| (row + col) % 2 == 0) {
                    board.set(Square(row, col), Cell::Man(color));
                }
            }
        }
        board
    }

    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Read a cell. The square is in range by construction.
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.0][square.1]
    }

    #[inline]
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.0][square.1] = cell;
    }

    /// Read-only access by raw coordinates, for renderers.
    ///
    /// # Panics
    /// When `row` or `col` is 8 or larger; callers check bounds first.
    #[inline]
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True iff `(row, col)` lies on the board
    #[inline]
    #[must_use]
    pub const fn is_on_board(row: isize, col: isize) -> bool {
        super::is_on_board(row, col)
    }

    /// Squares and cells holding pieces of `color`, in row-major order
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all()
            .map(|sq| (sq, self.get(sq)))
            .filter(move |(_, cell)| cell.is_color(color))
    }

    /// Number of pieces (men and kings) of `color`
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces(color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
