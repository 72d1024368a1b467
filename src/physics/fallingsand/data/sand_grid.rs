use std::fmt;

use rand::Rng;
use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::physics::fallingsand::brush::{Brush, BrushPaint};
use crate::physics::fallingsand::elements::cell::{Cell, CellState};
use crate::physics::fallingsand::elements::hue::Hue;
use crate::physics::fallingsand::util::grid::Grid;
use crate::physics::fallingsand::util::image::RawImage;
use crate::physics::fallingsand::util::vectors::CellVector;

/// Raised when asked for a grid with a negative side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensionError {
    pub num_cols: isize,
    pub num_rows: isize,
}

impl fmt::Display for GridDimensionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "cannot create a {}x{} sand grid, dimensions must not be negative",
            self.num_cols, self.num_rows
        )
    }
}
impl std::error::Error for GridDimensionError {}

/// A sand grid is a fixed size 2D grid of cells, each empty or holding one grain.
/// Its size never changes, a differently sized canvas gets a new grid.
#[derive(Clone, Debug, PartialEq)]
pub struct SandGrid {
    grid: Grid<Cell>,
}

/* Initialization */
impl SandGrid {
    /// Creates a new grid where every cell is empty
    pub fn new(num_cols: usize, num_rows: usize) -> Self {
        Self {
            grid: Grid::new_empty(num_cols, num_rows),
        }
    }

    /// Like new, but for dimensions that came out of signed pixel math
    pub fn try_new(num_cols: isize, num_rows: isize) -> Result<Self, GridDimensionError> {
        if num_cols < 0 || num_rows < 0 {
            return Err(GridDimensionError { num_cols, num_rows });
        }
        Ok(Self::new(num_cols as usize, num_rows as usize))
    }
}

/* Getters & Setters */
impl SandGrid {
    pub fn get_num_cols(&self) -> usize {
        self.grid.get_num_cols()
    }
    pub fn get_num_rows(&self) -> usize {
        self.grid.get_num_rows()
    }
    pub fn get_grid(&self) -> &Grid<Cell> {
        &self.grid
    }
    pub fn is_valid_col(&self, col: isize) -> bool {
        col >= 0 && (col as usize) < self.get_num_cols()
    }
    pub fn is_valid_row(&self, row: isize) -> bool {
        row >= 0 && (row as usize) < self.get_num_rows()
    }
    pub fn is_valid(&self, pos: CellVector) -> bool {
        self.is_valid_col(pos.col) && self.is_valid_row(pos.row)
    }

    /// Never fails, coordinates off the grid read as [`CellState::OutOfBounds`]
    pub fn get(&self, pos: CellVector) -> CellState {
        match self.grid.checked_get(pos) {
            Ok(cell) => (*cell).into(),
            Err(_) => CellState::OutOfBounds,
        }
    }

    /// Writes a cell, silently ignoring coordinates off the grid
    pub fn set(&mut self, pos: CellVector, cell: Cell) {
        if let Ok(slot) = self.grid.checked_get_mut(pos) {
            *slot = cell;
        }
    }

    /// Number of occupied cells, counted a column at a time in parallel
    pub fn count_grains(&self) -> usize {
        (0..self.get_num_cols())
            .into_par_iter()
            .map(|col| {
                (0..self.get_num_rows())
                    .filter(|&row| self.get(CellVector::from((col, row))).is_occupied())
                    .count()
            })
            .sum()
    }

    /// Every grain and where it is, column by column
    pub fn iter_grains(&self) -> impl Iterator<Item = (CellVector, Hue)> + '_ {
        self.grid
            .indexed_iter()
            .filter_map(|(pos, cell)| cell.get_hue().map(|hue| (pos, hue)))
    }
}

/* Painting */
impl SandGrid {
    /// Applies a brush to this grid in place and returns how many cells changed.
    ///
    /// Erasing empties every cell under the brush. Painting only fills empty cells,
    /// grains already on the grid are never painted over.
    /// Parts of the brush hanging off the grid are ignored.
    pub fn paint_brush(&mut self, brush: &Brush, paint: &BrushPaint, rng: &mut impl Rng) -> usize {
        let mut changed = 0;
        for pos in brush.positions() {
            let new_cell = match (self.get(pos), paint) {
                (CellState::OutOfBounds, _) => continue,
                (CellState::Occupied(_), BrushPaint::Erase) => Cell::Empty,
                (CellState::Empty, BrushPaint::Erase) => continue,
                (CellState::Occupied(_), _) => continue,
                (CellState::Empty, paint) => match paint.pick_hue(rng) {
                    Some(hue) => Cell::Grain(hue),
                    None => continue,
                },
            };
            self.set(pos, new_cell);
            changed += 1;
        }
        changed
    }
}

/* Drawing */
impl SandGrid {
    /// Draw the texture as the color of each grain, one pixel per cell
    pub fn get_texture(&self, background: [u8; 4]) -> RawImage {
        let mut out = RawImage::new_fill(self.get_num_cols(), self.get_num_rows(), background);
        for (pos, hue) in self.iter_grains() {
            out.set_pixel(pos.col as usize, pos.row as usize, hue.color().as_rgba_u8());
        }
        out
    }
}
