use rand::Rng;
use strum_macros::EnumIter;

use crate::physics::fallingsand::{data::sand_grid::SandGrid, util::vectors::CellVector};

/// The diagonal a grain tries first when the cell below it is taken.
/// The other diagonal is tried second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum FallDirection {
    /// Towards column 0
    Left,
    /// Towards the last column
    Right,
}

impl FallDirection {
    /// The column offset of the preferred diagonal
    pub fn offset(self) -> isize {
        match self {
            FallDirection::Left => -1,
            FallDirection::Right => 1,
        }
    }

    /// A fair coin flip between the two diagonals
    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            FallDirection::Right
        } else {
            FallDirection::Left
        }
    }
}

/// Default solid element behavior
/// Decides where the grain at `pos` ends up in the next generation, reading only `grid`.
///
/// In order, the first empty cell wins:
/// straight down, down the preferred diagonal, down the other diagonal.
/// If none are empty the grain stays where it is.
/// Anything off the grid reads as [`CellState::OutOfBounds`](crate::physics::fallingsand::elements::cell::CellState),
/// so grains on the bottom row or against a wall are blocked on that side.
pub fn solid_destination(grid: &SandGrid, pos: CellVector, direction: FallDirection) -> CellVector {
    let below = pos.below();
    let preferred = below.shift_cols(direction.offset());
    let other = below.shift_cols(-direction.offset());
    [below, preferred, other]
        .into_iter()
        .find(|target| grid.get(*target).is_empty())
        .unwrap_or(pos)
}
