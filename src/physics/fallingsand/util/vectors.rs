use derive_more::{Add, Sub};

/// My personal coordinate type
/// col is the horizontal axis, 0 on the left
/// row is the vertical axis, 0 at the top and increasing in the direction grains fall
///
/// Signed so that positions just outside the grid (a brush hanging off the edge,
/// the cell below the bottom row) can be represented and then rejected by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Add, Sub)]
pub struct CellVector {
    pub col: isize,
    pub row: isize,
}

/// Convienient constants
impl CellVector {
    pub const ZERO: Self = Self { col: 0, row: 0 };
}

impl CellVector {
    pub const fn new(col: isize, row: isize) -> Self {
        Self { col, row }
    }

    /// The cell directly beneath this one
    pub fn below(&self) -> Self {
        *self + CellVector::new(0, 1)
    }

    /// Moves sideways by some number of columns
    pub fn shift_cols(&self, by: isize) -> Self {
        *self + CellVector::new(by, 0)
    }

    /// Squared euclidean distance, exact for integer coordinates
    pub fn distance_squared(&self, other: CellVector) -> isize {
        let delta = *self - other;
        delta.col * delta.col + delta.row * delta.row
    }
}

impl From<(usize, usize)> for CellVector {
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col as isize, row as isize)
    }
}
