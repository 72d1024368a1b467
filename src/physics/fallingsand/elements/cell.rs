use super::hue::Hue;

/// What a single cell of the sand grid holds
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum Cell {
    /// Literally nothing
    #[default]
    Empty,
    Grain(Hue),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
    pub fn get_hue(&self) -> Option<Hue> {
        match self {
            Cell::Empty => None,
            Cell::Grain(hue) => Some(*hue),
        }
    }
}

/// The answer to looking up a coordinate on the sand grid
/// Looking outside the grid is not an error, it answers with its own state
/// which is never empty, so the edges of the grid behave like walls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellState {
    Empty,
    Occupied(Hue),
    OutOfBounds,
}

impl CellState {
    /// Only a real, empty cell can be moved into
    pub fn is_empty(&self) -> bool {
        matches!(self, CellState::Empty)
    }
    pub fn is_occupied(&self) -> bool {
        matches!(self, CellState::Occupied(_))
    }
    pub fn get_hue(&self) -> Option<Hue> {
        match self {
            CellState::Occupied(hue) => Some(*hue),
            _ => None,
        }
    }
}

impl From<Cell> for CellState {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => CellState::Empty,
            Cell::Grain(hue) => CellState::Occupied(hue),
        }
    }
}
