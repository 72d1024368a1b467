//! Advancing the sand grid by one generation.

use bevy::log::trace;
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::data::sand_grid::SandGrid;
use super::elements::cell::{Cell, CellState};
use super::elements::movement::solid::{solid_destination, FallDirection};
use super::util::vectors::CellVector;

/// Computes the next generation of a sand grid.
/// The only state it keeps is its source of randomness, so it can be seeded for testing.
pub struct Simulator<R: Rng> {
    rng: R,
}

impl Simulator<StdRng> {
    /// A simulator whose coin flips repeat for the same seed
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Simulator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Do one generation and return it as a new grid, leaving `current` untouched.
    ///
    /// Every grain decides where to go by looking only at `current`, so nothing moves
    /// twice in one step. Destinations are written into the fresh grid in scan order
    /// (column by column, top to bottom within a column). Two grains can pick the same
    /// empty cell, in which case the one scanned later wins and the other is lost.
    pub fn step(&mut self, current: &SandGrid) -> SandGrid {
        let mut next = SandGrid::new(current.get_num_cols(), current.get_num_rows());
        for col in 0..current.get_num_cols() {
            for row in 0..current.get_num_rows() {
                let pos = CellVector::from((col, row));
                let hue = match current.get(pos) {
                    CellState::Occupied(hue) => hue,
                    _ => continue,
                };
                let direction = FallDirection::random(&mut self.rng);
                let destination = solid_destination(current, pos, direction);
                debug_assert!(next.is_valid(destination), "grain left the grid");
                next.set(destination, Cell::Grain(hue));
            }
        }
        trace!("Stepped sand grid, {} grains", next.count_grains());
        next
    }
}
