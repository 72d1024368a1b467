//! A simple 2d grid type
//! Backed by ndarray, addressed by column then row so that a column of the grid
//! is contiguous in memory, which is the order the simulation walks it in.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt;

use super::vectors::CellVector;

/// A simple 2d grid type
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T>(ndarray::Array2<T>);

/* =================
 * Initialization
 * ================= */
impl<T> Grid<T> {
    /// Create a new grid filled with one value
    pub fn new_fill(num_cols: usize, num_rows: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self(ndarray::Array2::from_elem((num_cols, num_rows), value))
    }
    /// Create a new grid with the given dimensions, and fill it with default values
    pub fn new_empty(num_cols: usize, num_rows: usize) -> Self
    where
        T: Default,
    {
        Self(ndarray::Array2::default((num_cols, num_rows)))
    }
}

/* ======================================
 * Simple Getters
 * Access basic attributes of the struct
 * ====================================== */
impl<T> Grid<T> {
    /// Get the number of columns in the grid
    pub fn get_num_cols(&self) -> usize {
        self.0.shape()[0]
    }
    /// Get the number of rows in the grid
    pub fn get_num_rows(&self) -> usize {
        self.0.shape()[1]
    }
    /// Get the total size of the grid
    pub fn total_size(&self) -> usize {
        self.0.len()
    }
    /// Get the data as an ndarray
    pub fn get_data(&self) -> &ndarray::Array2<T> {
        &self.0
    }
}

/// Defines when the user has simply exceeded the bounds of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOutOfBoundsError(pub CellVector);
impl fmt::Display for GridOutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} went outside the constraints of grid", self.0)
    }
}
impl std::error::Error for GridOutOfBoundsError {}

/* ======================================
 * Position Based Getters
 * Access data at a position
 * ====================================== */
impl<T> Grid<T> {
    /// True if the coordinate addresses a cell of this grid
    pub fn contains(&self, idx: CellVector) -> bool {
        self.to_ndarray_idx(idx).is_ok()
    }
    /// Gets the value at the given coordinate, or returns an error if the coordinate is out of bounds
    pub fn checked_get(&self, idx: CellVector) -> Result<&T, GridOutOfBoundsError> {
        let idx = self.to_ndarray_idx(idx)?;
        Ok(&self.0[idx])
    }
    /// Gets the value at the given coordinate mutably, or returns an error if out of bounds
    pub fn checked_get_mut(&mut self, idx: CellVector) -> Result<&mut T, GridOutOfBoundsError> {
        let idx = self.to_ndarray_idx(idx)?;
        Ok(&mut self.0[idx])
    }
    /// Replaces the value at the given coordinate and gives you ownership of the original value
    pub fn replace(&mut self, idx: CellVector, replacement: T) -> Result<T, GridOutOfBoundsError> {
        let slot = self.checked_get_mut(idx)?;
        Ok(std::mem::replace(slot, replacement))
    }
    /// Transforms the coordinate to the ndarray coordinate system, rejecting anything off the grid
    fn to_ndarray_idx(&self, idx: CellVector) -> Result<[usize; 2], GridOutOfBoundsError> {
        if idx.col < 0 || idx.row < 0 {
            return Err(GridOutOfBoundsError(idx));
        }
        let (col, row) = (idx.col as usize, idx.row as usize);
        if col >= self.get_num_cols() || row >= self.get_num_rows() {
            return Err(GridOutOfBoundsError(idx));
        }
        Ok([col, row])
    }
}

/// Iteration
impl<T> Grid<T> {
    /// Get an iterator over the grid, column by column
    pub fn iter(&self) -> ndarray::iter::Iter<'_, T, ndarray::Ix2> {
        self.0.iter()
    }

    /// Iterate over every cell along with its coordinate, column by column
    pub fn indexed_iter(&self) -> impl Iterator<Item = (CellVector, &T)> + '_ {
        self.0
            .indexed_iter()
            .map(|((col, row), value)| (CellVector::from((col, row)), value))
    }
}
