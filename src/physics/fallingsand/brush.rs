//! The brush is a circle of cells painted or erased by one pointer drag event.

use std::ops::Range;

use itertools::iproduct;
use rand::Rng;

use super::elements::hue::Hue;
use super::util::vectors::CellVector;

/// How big a brush is when nobody says otherwise, in cells
pub const DEFAULT_BRUSH_RADIUS: u32 = 5;

/// Hues grains get when painted without color cycling
pub const DEFAULT_RANDOM_HUE_RANGE: Range<f32> = 30.0..50.0;

/// The circular footprint of one paint or erase interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brush {
    center: CellVector,
    radius: u32,
}

impl Brush {
    pub fn new(center: CellVector, radius: u32) -> Self {
        Self { center, radius }
    }

    pub fn get_center(&self) -> CellVector {
        self.center
    }

    pub fn get_radius(&self) -> u32 {
        self.radius
    }

    /// Every cell whose distance from the center is at most the radius, column by column.
    /// Not clipped to any grid, positions may be negative.
    pub fn positions(&self) -> impl Iterator<Item = CellVector> {
        let center = self.center;
        let radius = self.radius as isize;
        iproduct!(-radius..=radius, -radius..=radius)
            .map(move |(dcol, drow)| center + CellVector::new(dcol, drow))
            .filter(move |pos| pos.distance_squared(center) <= radius * radius)
    }
}

/// What a brush leaves behind in the cells it touches
#[derive(Debug, Clone, PartialEq)]
pub enum BrushPaint {
    /// Clears every cell, occupied or not
    Erase,
    /// Every new grain gets this hue
    Fixed(Hue),
    /// Every new grain gets its own hue drawn from the range
    Random(Range<f32>),
}

impl BrushPaint {
    /// The hue for the next painted grain, None when erasing
    pub fn pick_hue(&self, rng: &mut impl Rng) -> Option<Hue> {
        match self {
            BrushPaint::Erase => None,
            BrushPaint::Fixed(hue) => Some(*hue),
            BrushPaint::Random(range) => Some(Hue(rng.gen_range(range.clone()))),
        }
    }
}
