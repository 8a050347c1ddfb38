//! Colour sampling from rendered surfaces.

use crate::error::{PickerError, Result};
use crate::types::Colour;

use super::RenderSurface;

/// Read the colour at `(x, y)`, reported as fully opaque.
///
/// Fails with [`PickerError::OutOfBounds`] outside `[0, width) x [0, height)`.
pub fn sample_at(surface: &RenderSurface, x: u32, y: u32) -> Result<Colour> {
    surface
        .pixel(x, y)
        .map(Colour::opaque)
        .ok_or(PickerError::OutOfBounds {
            x,
            y,
            width: surface.width(),
            height: surface.height(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{composite_linear_gradient, render_hue_continuum};
    use crate::types::LinearGradient;

    #[test]
    fn test_sample_forces_opaque() {
        let mut surface = RenderSurface::new(10, 10).unwrap();
        composite_linear_gradient(&mut surface, &LinearGradient::black_fade());
        let raw = surface.pixel(0, 5).unwrap();
        assert!(!raw.is_opaque());

        let sampled = sample_at(&surface, 0, 5).unwrap();
        assert_eq!(sampled, Colour::BLACK);
    }

    #[test]
    fn test_sample_matches_hue_table_for_every_row() {
        let height = 150;
        let mut surface = RenderSurface::new(8, height).unwrap();
        render_hue_continuum(&mut surface);

        let hue = LinearGradient::hue();
        for y in 0..height {
            let expected = hue.colour_at(y as f64 / height as f64);
            assert_eq!(sample_at(&surface, 5, y).unwrap(), expected, "row {y}");
        }
    }

    #[test]
    fn test_sample_out_of_bounds() {
        let surface = RenderSurface::new(10, 5).unwrap();
        let err = sample_at(&surface, 10, 0).unwrap_err();
        assert!(matches!(
            err,
            PickerError::OutOfBounds {
                x: 10,
                y: 0,
                width: 10,
                height: 5
            }
        ));
        assert!(sample_at(&surface, 0, 5).is_err());
    }
}
