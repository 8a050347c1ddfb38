//! Selection marker strokes.
//!
//! Coordinates are in surface space where pixel `(x, y)` covers the square
//! `[x, x + 1) x [y, y + 1)`; strokes are centred on the outline.

use crate::types::Colour;

use super::RenderSurface;

/// An axis-aligned rectangle in surface space. May extend past the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    fn inflate(&self, amount: f64) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }
}

/// Stroke the outline of `rect` with a line `line_width` wide.
///
/// A pixel is painted when its centre falls inside the stroke band.
pub fn stroke_rect(surface: &mut RenderSurface, rect: Rect, line_width: f64, colour: Colour) {
    let half = line_width / 2.0;
    let outer = rect.inflate(half);
    let inner = rect.inflate(-half);
    let src = channels(colour);

    let Some((x0, x1)) = pixel_span(outer.x, outer.x + outer.width, surface.width()) else {
        return;
    };
    let Some((y0, y1)) = pixel_span(outer.y, outer.y + outer.height, surface.height()) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let (cx, cy) = (x as f64 + 0.5, y as f64 + 0.5);
            let in_inner = inner.width > 0.0 && inner.height > 0.0 && inner.contains(cx, cy);
            if outer.contains(cx, cy) && !in_inner {
                surface.blend(x, y, src, 1.0);
            }
        }
    }
}

/// Stroke a circle outline with anti-aliased edges.
pub fn stroke_circle(
    surface: &mut RenderSurface,
    centre: (f64, f64),
    radius: f64,
    line_width: f64,
    colour: Colour,
) {
    let half = line_width / 2.0;
    let reach = radius + half + 1.0;
    let src = channels(colour);

    let Some((x0, x1)) = pixel_span(centre.0 - reach, centre.0 + reach, surface.width()) else {
        return;
    };
    let Some((y0, y1)) = pixel_span(centre.1 - reach, centre.1 + reach, surface.height()) else {
        return;
    };

    for y in y0..y1 {
        for x in x0..x1 {
            let dx = x as f64 + 0.5 - centre.0;
            let dy = y as f64 + 0.5 - centre.1;
            let distance = (dx * dx + dy * dy).sqrt();
            let coverage = (half + 0.5 - (distance - radius).abs()).clamp(0.0, 1.0);
            if coverage > 0.0 {
                surface.blend(x, y, src, coverage);
            }
        }
    }
}

fn channels(colour: Colour) -> [f64; 4] {
    [
        colour.r as f64,
        colour.g as f64,
        colour.b as f64,
        colour.a as f64,
    ]
}

/// Pixel index range `[start, end)` overlapping `[lo, hi)`, clipped to `extent`.
fn pixel_span(lo: f64, hi: f64, extent: u32) -> Option<(u32, u32)> {
    let start = lo.floor().max(0.0);
    let end = hi.ceil().min(extent as f64);
    if end <= start {
        return None;
    }
    Some((start as u32, end as u32))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fill_solid;

    #[test]
    fn test_stroke_rect_leaves_interior() {
        let mut surface = RenderSurface::new(20, 20).unwrap();
        fill_solid(&mut surface, Colour::BLACK);
        stroke_rect(&mut surface, Rect::new(4.0, 4.0, 10.0, 10.0), 2.0, Colour::WHITE);

        assert_eq!(surface.pixel(4, 9), Some(Colour::WHITE));
        assert_eq!(surface.pixel(3, 9), Some(Colour::WHITE));
        assert_eq!(surface.pixel(9, 9), Some(Colour::BLACK));
        assert_eq!(surface.pixel(0, 0), Some(Colour::BLACK));
    }

    #[test]
    fn test_stroke_rect_clipped_to_surface() {
        let mut surface = RenderSurface::new(5, 5).unwrap();
        fill_solid(&mut surface, Colour::BLACK);
        stroke_rect(&mut surface, Rect::new(-10.0, -10.0, 40.0, 40.0), 2.0, Colour::WHITE);
        assert!(surface.image().pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn test_stroke_circle_ring() {
        let mut surface = RenderSurface::new(40, 40).unwrap();
        fill_solid(&mut surface, Colour::BLACK);
        stroke_circle(&mut surface, (20.5, 20.5), 8.0, 3.0, Colour::WHITE);

        // Centre untouched, ring painted, outside untouched.
        assert_eq!(surface.pixel(20, 20), Some(Colour::BLACK));
        assert_eq!(surface.pixel(28, 20), Some(Colour::WHITE));
        assert_eq!(surface.pixel(20, 12), Some(Colour::WHITE));
        assert_eq!(surface.pixel(33, 20), Some(Colour::BLACK));
    }

    #[test]
    fn test_stroke_circle_off_surface() {
        let mut surface = RenderSurface::new(4, 4).unwrap();
        stroke_circle(&mut surface, (-50.0, -50.0), 8.0, 3.0, Colour::WHITE);
        assert!(surface.image().pixels().all(|p| p.0[3] == 0));
    }
}
