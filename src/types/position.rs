//! Pixel positions inside a surface.

use std::fmt;

/// An integer pixel coordinate inside a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Convert a host pointer coordinate to a pixel inside a `width` x `height`
    /// surface.
    ///
    /// Fractional coordinates select the pixel they fall in; anything outside
    /// the surface (including non-finite input) is clamped to the nearest edge
    /// pixel, so the result always satisfies `x < width` and `y < height`.
    pub fn clamped(x: f64, y: f64, width: u32, height: u32) -> Self {
        Self {
            x: clamp_axis(x, width),
            y: clamp_axis(y, height),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn clamp_axis(v: f64, extent: u32) -> u32 {
    let max = extent.saturating_sub(1);
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    if v >= max as f64 {
        return max;
    }
    v.floor() as u32
}
