//! Fixed-size RGBA pixel surfaces.

use image::{Rgba, RgbaImage};

use crate::error::{PickerError, Result};
use crate::types::{quantize, Colour};

/// A fixed-size pixel grid owned by a single widget.
///
/// Created once with its final dimensions and never resized; every render
/// mutates it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSurface {
    image: RgbaImage,
}

impl RenderSurface {
    /// Create a fully transparent surface.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(PickerError::EmptySurface { width, height });
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
        })
    }

    /// Wrap an existing image, e.g. one loaded from disk.
    pub fn from_image(image: RgbaImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(PickerError::EmptySurface {
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Raw pixel at a position, including its alpha.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        self.image.get_pixel_checked(x, y).map(|p| {
            let [r, g, b, a] = p.0;
            Colour::new(r, g, b, a)
        })
    }

    /// Borrow the underlying image (for PNG output).
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Overwrite every pixel with one colour.
    pub(crate) fn fill(&mut self, colour: Colour) {
        let rgba = Rgba(colour.to_rgba());
        for pixel in self.image.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Blend straight-alpha channels (each in `[0, 255]`) over the pixel at
    /// `(x, y)` with source-over compositing, scaled by `coverage`.
    ///
    /// Positions outside the surface are ignored.
    pub(crate) fn blend(&mut self, x: u32, y: u32, src: [f64; 4], coverage: f64) {
        let Some(pixel) = self.image.get_pixel_mut_checked(x, y) else {
            return;
        };

        let src_a = (src[3] / 255.0) * coverage.clamp(0.0, 1.0);
        if src_a <= 0.0 {
            return;
        }

        let [dr, dg, db, da] = pixel.0;
        let dst_a = da as f64 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);

        let mix = |s: f64, d: u8| (s * src_a + d as f64 * dst_a * (1.0 - src_a)) / out_a;

        pixel.0 = [
            quantize(mix(src[0], dr)),
            quantize(mix(src[1], dg)),
            quantize(mix(src[2], db)),
            quantize(out_a * 255.0),
        ];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let surface = RenderSurface::new(3, 2).unwrap();
        assert_eq!(surface.size(), (3, 2));
        assert_eq!(surface.pixel(2, 1), Some(Colour::TRANSPARENT));
        assert_eq!(surface.pixel(3, 0), None);
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            RenderSurface::new(0, 10),
            Err(PickerError::EmptySurface { width: 0, height: 10 })
        ));
        assert!(RenderSurface::from_image(RgbaImage::new(4, 0)).is_err());
    }

    #[test]
    fn test_blend_over_opaque() {
        let mut surface = RenderSurface::new(1, 1).unwrap();
        surface.fill(Colour::RED);
        surface.blend(0, 0, [255.0, 255.0, 255.0, 127.5], 1.0);
        assert_eq!(surface.pixel(0, 0), Some(Colour::rgb(255, 128, 128)));
    }

    #[test]
    fn test_blend_over_transparent_copies_source() {
        let mut surface = RenderSurface::new(1, 1).unwrap();
        surface.blend(0, 0, [10.0, 20.0, 30.0, 255.0], 1.0);
        assert_eq!(surface.pixel(0, 0), Some(Colour::rgb(10, 20, 30)));
    }

    #[test]
    fn test_blend_transparent_source_is_noop() {
        let mut surface = RenderSurface::new(1, 1).unwrap();
        surface.fill(Colour::BLUE);
        surface.blend(0, 0, [0.0, 0.0, 0.0, 0.0], 1.0);
        surface.blend(0, 0, [255.0, 255.0, 255.0, 255.0], 0.0);
        assert_eq!(surface.pixel(0, 0), Some(Colour::BLUE));
    }

    #[test]
    fn test_blend_out_of_bounds_ignored() {
        let mut surface = RenderSurface::new(1, 1).unwrap();
        surface.blend(5, 5, [255.0, 0.0, 0.0, 255.0], 1.0);
        assert_eq!(surface.pixel(0, 0), Some(Colour::TRANSPARENT));
    }
}
