use chess::Piece;

pub mod chess;

pub const ROWS: usize = 8;
pub const COLS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareColor {
    Light,
    Dark,
}

impl SquareColor {
    pub fn at(row: usize, col: usize) -> Self {
        if (row + col) % 2 == 0 {
            SquareColor::Light
        } else {
            SquareColor::Dark
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    row: usize,
    col: usize,
    piece: Option<Piece>,
    color: SquareColor,
}

impl Square {
    fn new(row: usize, col: usize, piece: Option<Piece>) -> Self {
        debug_assert!(row < ROWS);
        debug_assert!(col < COLS);
        Self {
            row,
            col,
            piece,
            color: SquareColor::at(row, col),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    pub fn color(&self) -> SquareColor {
        self.color
    }
}

/// An 8x8 grid of squares. Row 0 is the far (black) rank, row 7 the near
/// (white) rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; COLS]; ROWS],
}

impl Board {
    pub fn from_fn(mut piece_at: impl FnMut(usize, usize) -> Option<Piece>) -> Self {
        Self {
            squares: std::array::from_fn(|row| {
                std::array::from_fn(|col| Square::new(row, col, piece_at(row, col)))
            }),
        }
    }

    pub fn empty() -> Self {
        Self::from_fn(|_, _| None)
    }

    #[cfg(test)]
    pub fn square(&self, row: usize, col: usize) -> &Square {
        &self.squares[row][col]
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flatten()
    }
}
