//! Image utilities
//! Keeps us from having to use specific bevy types in the physics engine

use bevy::render::{
    render_resource::{Extent3d, TextureDimension, TextureFormat},
    texture::Image,
};

/// Representing a raw RGBA image
/// Game engine agnostic, full ownership, no lifetimes, not a component
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl RawImage {
    /// An image where every pixel is the same color
    pub fn new_fill(width: usize, height: usize, color: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width * height * 4);
        for _ in 0..width * height {
            pixels.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Pixels are stored row by row from the top left
    fn pixel_offset(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) * 4)
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        let offset = self.pixel_offset(x, y)?;
        let mut out = [0; 4];
        out.copy_from_slice(&self.pixels[offset..offset + 4]);
        Some(out)
    }

    /// Writes one pixel, ignoring anything outside the image
    pub fn set_pixel(&mut self, x: usize, y: usize, color: [u8; 4]) {
        if let Some(offset) = self.pixel_offset(x, y) {
            self.pixels[offset..offset + 4].copy_from_slice(&color);
        }
    }

    /// Convert to a bevy image
    /// Load this into the image assets to get a texture like the following
    /// ```ignore
    /// let image: RawImage = RawImage::default();
    /// let image_handle: Handle<Image> = images.add(image.to_bevy_image());
    /// ```
    /// Textures can't have a zero sized side, so an empty image becomes one transparent pixel.
    pub fn to_bevy_image(self) -> Image {
        let (width, height, pixels) = if self.width == 0 || self.height == 0 {
            (1, 1, vec![0, 0, 0, 0])
        } else {
            (self.width, self.height, self.pixels)
        };
        let size = Extent3d {
            width: width as u32,
            height: height as u32,
            depth_or_array_layers: 1,
        };

        Image::new(
            size,
            TextureDimension::D2,
            pixels,
            TextureFormat::Rgba8UnormSrgb,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fill() {
        let image = RawImage::new_fill(3, 2, [1, 2, 3, 4]);
        assert_eq!(image.pixels.len(), 3 * 2 * 4);
        assert_eq!(image.get_pixel(2, 1), Some([1, 2, 3, 4]));
        assert_eq!(image.get_pixel(3, 0), None);
    }

    #[test]
    fn test_set_pixel_is_row_major() {
        let mut image = RawImage::new_fill(2, 2, [0, 0, 0, 255]);
        image.set_pixel(1, 0, [9, 9, 9, 255]);
        assert_eq!(&image.pixels[4..8], &[9, 9, 9, 255]);
        image.set_pixel(5, 5, [1, 1, 1, 1]);
        assert_eq!(image.pixels.iter().filter(|&&p| p == 1).count(), 0);
    }

    #[test]
    fn test_empty_image_becomes_single_pixel_texture() {
        let image = RawImage::new_fill(0, 10, [0, 0, 0, 255]).to_bevy_image();
        assert_eq!(image.texture_descriptor.size.width, 1);
        assert_eq!(image.texture_descriptor.size.height, 1);
    }
}
