//! Gradient rendering onto pixel surfaces.
//!
//! Gradients are evaluated once per row (vertical) or column (horizontal)
//! at offset `index / extent` and composited over the existing contents.

use crate::types::{Colour, Direction, LinearGradient};

use super::RenderSurface;

/// Overwrite the whole surface with one opaque colour.
pub fn fill_solid(surface: &mut RenderSurface, colour: Colour) {
    surface.fill(colour.opaque());
}

/// Draw a gradient over the existing surface contents.
///
/// Uses source-over blending: opaque regions replace what is underneath,
/// transparent regions let the earlier layers show through.
pub fn composite_linear_gradient(surface: &mut RenderSurface, gradient: &LinearGradient) {
    let (width, height) = surface.size();

    match gradient.direction() {
        Direction::Vertical => {
            for y in 0..height {
                let channels = gradient.channels_at(y as f64 / height as f64);
                for x in 0..width {
                    surface.blend(x, y, channels, 1.0);
                }
            }
        }
        Direction::Horizontal => {
            for x in 0..width {
                let channels = gradient.channels_at(x as f64 / width as f64);
                for y in 0..height {
                    surface.blend(x, y, channels, 1.0);
                }
            }
        }
    }
}

/// Render the vertical hue continuum as a single opaque layer.
pub fn render_hue_continuum(surface: &mut RenderSurface) {
    log::trace!("rendering hue continuum {}x{}", surface.width(), surface.height());
    surface.fill(Colour::TRANSPARENT);
    composite_linear_gradient(surface, &LinearGradient::hue());
}

/// Render the saturation/lightness plane tinted by `base_hue`.
///
/// Layer order matters: the hue fill first, then the white fade left to
/// right, then the black fade top to bottom, so the hue shows through the
/// transparent ends of both fades.
pub fn render_shade_plane(surface: &mut RenderSurface, base_hue: Colour) {
    log::trace!(
        "rendering shade plane {}x{} with base hue {}",
        surface.width(),
        surface.height(),
        base_hue
    );
    fill_solid(surface, base_hue);
    composite_linear_gradient(surface, &LinearGradient::white_fade());
    composite_linear_gradient(surface, &LinearGradient::black_fade());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GradientStop;

    #[test]
    fn test_fill_solid_is_opaque() {
        let mut surface = RenderSurface::new(2, 2).unwrap();
        fill_solid(&mut surface, Colour::new(10, 20, 30, 0));
        assert_eq!(surface.pixel(1, 1), Some(Colour::rgb(10, 20, 30)));
    }

    #[test]
    fn test_hue_continuum_rows() {
        let mut surface = RenderSurface::new(4, 100).unwrap();
        render_hue_continuum(&mut surface);

        assert_eq!(surface.pixel(0, 0), Some(Colour::RED));
        assert_eq!(surface.pixel(3, 17), Some(Colour::YELLOW));
        assert_eq!(surface.pixel(1, 34), Some(Colour::GREEN));
        assert_eq!(surface.pixel(2, 51), Some(Colour::CYAN));
        assert_eq!(surface.pixel(0, 68), Some(Colour::BLUE));
        assert_eq!(surface.pixel(3, 85), Some(Colour::MAGENTA));
    }

    #[test]
    fn test_hue_continuum_is_opaque_everywhere() {
        let mut surface = RenderSurface::new(3, 40).unwrap();
        render_hue_continuum(&mut surface);
        assert!(surface.image().pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_shade_plane_corners() {
        let mut surface = RenderSurface::new(100, 100).unwrap();
        render_shade_plane(&mut surface, Colour::RED);

        // White fully opaque, black fully transparent.
        assert_eq!(surface.pixel(0, 0), Some(Colour::WHITE));

        // White nearly gone, black nearly opaque.
        let c = surface.pixel(99, 99).unwrap();
        assert!(c.r <= 3 && c.g <= 3 && c.b <= 3, "{c}");
        assert!(c.is_opaque());

        // Top-right keeps most of the hue.
        let c = surface.pixel(99, 0).unwrap();
        assert_eq!(c.r, 255);
        assert!(c.g <= 3 && c.b <= 3, "{c}");
    }

    #[test]
    fn test_shade_plane_opaque_everywhere() {
        let mut surface = RenderSurface::new(20, 20).unwrap();
        render_shade_plane(&mut surface, Colour::rgb(12, 200, 99));
        assert!(surface.image().pixels().all(|p| p.0[3] == 255));
    }

    #[test]
    fn test_transparent_gradient_shows_prior_layer() {
        let mut surface = RenderSurface::new(4, 4).unwrap();
        fill_solid(&mut surface, Colour::GREEN);
        let clear = LinearGradient::new(
            Direction::Horizontal,
            vec![
                GradientStop::new(0.0, Colour::TRANSPARENT),
                GradientStop::new(1.0, Colour::TRANSPARENT),
            ],
        )
        .unwrap();
        composite_linear_gradient(&mut surface, &clear);
        assert!(surface.image().pixels().all(|p| p.0 == [0, 255, 0, 255]));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let mut first = RenderSurface::new(30, 30).unwrap();
        let mut second = RenderSurface::new(30, 30).unwrap();
        render_shade_plane(&mut first, Colour::BLUE);
        render_shade_plane(&mut second, Colour::BLUE);
        render_shade_plane(&mut second, Colour::BLUE);
        assert_eq!(first, second);
    }
}
