use std::ops::Range;

use bevy::log::debug;
use strum_macros::{Display, EnumIter};

use crate::physics::fallingsand::brush::{BrushPaint, DEFAULT_RANDOM_HUE_RANGE};
use crate::physics::fallingsand::elements::hue::{Hue, HUE_MODULUS, START_HUE};

/// What dragging the brush across the canvas does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, Display)]
pub enum PaintMode {
    /// Sand in a narrow band of random warm hues
    #[default]
    Normal,
    /// Every stroke paints one shared hue, which shifts a little after each stroke
    #[strum(serialize = "Color Mode")]
    ColorCycle,
    /// Clears the cells under the brush
    Erase,
}

/// Keeps track of the selected paint mode and the color cycle hue
#[derive(Debug, Clone, PartialEq)]
pub struct PaintModeController {
    mode: PaintMode,
    hue: Hue,
    hue_modulus: f32,
    random_hue_range: Range<f32>,
}

impl Default for PaintModeController {
    fn default() -> Self {
        Self::new(START_HUE, HUE_MODULUS, DEFAULT_RANDOM_HUE_RANGE)
    }
}

impl PaintModeController {
    pub fn new(start_hue: Hue, hue_modulus: f32, random_hue_range: Range<f32>) -> Self {
        Self {
            mode: PaintMode::Normal,
            hue: start_hue,
            hue_modulus,
            random_hue_range,
        }
    }

    pub fn get_mode(&self) -> PaintMode {
        self.mode
    }

    pub fn get_hue(&self) -> Hue {
        self.hue
    }

    /// Selecting the mode that is already active turns it off again.
    /// Color cycling and erasing shut each other off.
    pub fn toggle(&mut self, mode: PaintMode) {
        self.mode = if mode == self.mode {
            PaintMode::Normal
        } else {
            mode
        };
        debug!("Paint mode is now {}", self.mode);
    }

    /// What the brush should leave behind in the current mode
    pub fn brush_paint(&self) -> BrushPaint {
        match self.mode {
            PaintMode::Normal => BrushPaint::Random(self.random_hue_range.clone()),
            PaintMode::ColorCycle => BrushPaint::Fixed(self.hue),
            PaintMode::Erase => BrushPaint::Erase,
        }
    }

    /// Called once after every brush stroke, moves the color cycle along
    pub fn finish_stroke(&mut self) {
        if self.mode == PaintMode::ColorCycle {
            self.hue = self.hue.advance(1.0, self.hue_modulus);
        }
    }

    /// The hue the controls should be tinted with, none outside of color cycling
    pub fn accent_hue(&self) -> Option<Hue> {
        match self.mode {
            PaintMode::ColorCycle => Some(self.hue),
            _ => None,
        }
    }
}
