//! Color helpers
//! Grain colors are described in hue, saturation and brightness like a paint program,
//! bevy speaks hue, saturation and lightness, so we convert between the two here.

use bevy::render::color::Color;

/// Creates a color from hue (degrees), saturation and brightness (both 0 to 1)
pub fn hsb_color(hue: f32, saturation: f32, brightness: f32) -> Color {
    let lightness = brightness * (1.0 - saturation / 2.0);
    let hsl_saturation = if lightness <= 0.0 || lightness >= 1.0 {
        0.0
    } else {
        (brightness - lightness) / lightness.min(1.0 - lightness)
    };
    Color::hsl(hue, hsl_saturation, lightness)
}

/// The lavender the canvas is painted before any grains are drawn
pub fn canvas_background() -> [u8; 4] {
    hsb_color(225.0, 150.0 / 255.0, 1.0).as_rgba_u8()
}
