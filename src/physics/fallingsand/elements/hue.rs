#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use bevy::render::color::Color;
use derive_more::{Add, AddAssign, From, Into, Sub, SubAssign};

use crate::physics::fallingsand::util::color::hsb_color;

/// The hue of a grain, in degrees around the color wheel.
/// It is the grain's whole payload, carried unchanged when the grain moves.
#[derive(
    Default, Clone, Copy, Debug, PartialEq, PartialOrd, Add, Sub, AddAssign, SubAssign, From, Into,
)]
pub struct Hue(pub f32);

impl Hue {
    /// Advances the hue by some degrees, wrapping around the modulus.
    pub fn advance(self, by: f32, modulus: f32) -> Hue {
        debug_assert!(modulus > 0.0, "hue modulus must be positive");
        Hue((self.0 + by).rem_euclid(modulus))
    }

    /// The fully saturated, fully bright color of this hue.
    pub fn color(&self) -> Color {
        hsb_color(self.0, 1.0, 1.0)
    }
}

/// Where the color cycle starts.
pub const START_HUE: Hue = Hue(200.0);

/// How many degrees make a full turn of the color cycle.
pub const HUE_MODULUS: f32 = 360.0;
