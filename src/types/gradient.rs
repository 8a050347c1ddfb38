//! Linear gradient definitions.
//!
//! A gradient is an ordered list of colour stops spanning a surface's full
//! extent in one direction. Colours between stops are interpolated in
//! premultiplied RGBA, so a fade between opaque and transparent white stays
//! white all the way across.

use crate::error::{PickerError, Result};

use super::Colour;

/// Axis a linear gradient runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// An anchor colour at an offset in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub colour: Colour,
}

impl GradientStop {
    pub const fn new(offset: f64, colour: Colour) -> Self {
        Self { offset, colour }
    }
}

/// Stops of the hue continuum, top to bottom.
///
/// The offsets are not evenly spaced; the rendered spectrum is defined by
/// this exact table.
pub const HUE_STOPS: [GradientStop; 7] = [
    GradientStop::new(0.0, Colour::RED),
    GradientStop::new(0.17, Colour::YELLOW),
    GradientStop::new(0.34, Colour::GREEN),
    GradientStop::new(0.51, Colour::CYAN),
    GradientStop::new(0.68, Colour::BLUE),
    GradientStop::new(0.85, Colour::MAGENTA),
    GradientStop::new(1.0, Colour::RED),
];

/// A validated linear gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    direction: Direction,
    stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Build a gradient, rejecting fewer than two stops and offsets that are
    /// out of range or decreasing.
    pub fn new(direction: Direction, stops: Vec<GradientStop>) -> Result<Self> {
        if stops.len() < 2 {
            return Err(PickerError::InvalidGradient {
                message: format!("expected at least 2 stops, got {}", stops.len()),
            });
        }

        for stop in &stops {
            if !(0.0..=1.0).contains(&stop.offset) {
                return Err(PickerError::InvalidGradient {
                    message: format!("stop offset {} is outside [0, 1]", stop.offset),
                });
            }
        }

        if stops.windows(2).any(|w| w[1].offset < w[0].offset) {
            return Err(PickerError::InvalidGradient {
                message: "stop offsets must be non-decreasing".to_string(),
            });
        }

        Ok(Self { direction, stops })
    }

    /// The vertical hue continuum.
    pub fn hue() -> Self {
        Self {
            direction: Direction::Vertical,
            stops: HUE_STOPS.to_vec(),
        }
    }

    /// Opaque white on the left fading to transparent white on the right.
    pub fn white_fade() -> Self {
        Self {
            direction: Direction::Horizontal,
            stops: vec![
                GradientStop::new(0.0, Colour::WHITE),
                GradientStop::new(1.0, Colour::new(255, 255, 255, 0)),
            ],
        }
    }

    /// Transparent black at the top fading to opaque black at the bottom.
    pub fn black_fade() -> Self {
        Self {
            direction: Direction::Vertical,
            stops: vec![
                GradientStop::new(0.0, Colour::TRANSPARENT),
                GradientStop::new(1.0, Colour::BLACK),
            ],
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Interpolated straight-alpha channels at offset `t`, each in `[0, 255]`.
    ///
    /// Offsets before the first stop take the first colour, offsets past the
    /// last stop take the last colour.
    pub fn channels_at(&self, t: f64) -> [f64; 4] {
        let first = self.stops[0];
        let last = self.stops[self.stops.len() - 1];

        if t <= first.offset {
            return straight(first.colour);
        }
        if t >= last.offset {
            return straight(last.colour);
        }

        // Last segment whose start is at or before t; coincident stops resolve
        // to the later one.
        let index = self
            .stops
            .windows(2)
            .rposition(|w| w[0].offset <= t && t <= w[1].offset)
            .unwrap_or(0);
        let from = self.stops[index];
        let to = self.stops[index + 1];

        let span = to.offset - from.offset;
        if span <= 0.0 {
            return straight(to.colour);
        }
        let f = (t - from.offset) / span;

        let a = premultiplied(from.colour);
        let b = premultiplied(to.colour);
        let mixed: [f64; 4] = std::array::from_fn(|i| a[i] + (b[i] - a[i]) * f);

        unpremultiply(mixed)
    }

    /// Interpolated colour at offset `t`, rounded to whole channels.
    pub fn colour_at(&self, t: f64) -> Colour {
        let [r, g, b, a] = self.channels_at(t);
        Colour::new(quantize(r), quantize(g), quantize(b), quantize(a))
    }
}

pub(crate) fn quantize(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn straight(c: Colour) -> [f64; 4] {
    [c.r as f64, c.g as f64, c.b as f64, c.a as f64]
}

fn premultiplied(c: Colour) -> [f64; 4] {
    let alpha = c.a as f64 / 255.0;
    [
        c.r as f64 * alpha,
        c.g as f64 * alpha,
        c.b as f64 * alpha,
        c.a as f64,
    ]
}

fn unpremultiply(c: [f64; 4]) -> [f64; 4] {
    let alpha = c[3] / 255.0;
    if alpha <= 0.0 {
        return [0.0, 0.0, 0.0, 0.0];
    }
    [c[0] / alpha, c[1] / alpha, c[2] / alpha, c[3]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hue_stops_exact() {
        let hue = LinearGradient::hue();
        assert_eq!(hue.colour_at(0.0), Colour::RED);
        assert_eq!(hue.colour_at(0.17), Colour::YELLOW);
        assert_eq!(hue.colour_at(0.34), Colour::GREEN);
        assert_eq!(hue.colour_at(0.51), Colour::CYAN);
        assert_eq!(hue.colour_at(0.68), Colour::BLUE);
        assert_eq!(hue.colour_at(0.85), Colour::MAGENTA);
        assert_eq!(hue.colour_at(1.0), Colour::RED);
    }

    #[test]
    fn test_hue_between_blue_and_magenta() {
        let c = LinearGradient::hue().colour_at(110.0 / 150.0);
        assert!((c.r as i32 - 80).abs() <= 1, "red channel was {}", c.r);
        assert_eq!((c.g, c.b, c.a), (0, 255, 255));
    }

    #[test]
    fn test_fade_keeps_colour() {
        let fade = LinearGradient::white_fade();
        let c = fade.colour_at(0.5);
        assert_eq!((c.r, c.g, c.b), (255, 255, 255));
        assert!((c.a as i32 - 128).abs() <= 1);

        let c = LinearGradient::black_fade().colour_at(0.25);
        assert_eq!((c.r, c.g, c.b), (0, 0, 0));
        assert!((c.a as i32 - 64).abs() <= 1);
    }

    #[test]
    fn test_clamps_outside_range() {
        let hue = LinearGradient::hue();
        assert_eq!(hue.colour_at(-1.0), Colour::RED);
        assert_eq!(hue.colour_at(2.0), Colour::RED);
    }

    #[test]
    fn test_coincident_stops_take_later_colour() {
        let g = LinearGradient::new(
            Direction::Horizontal,
            vec![
                GradientStop::new(0.0, Colour::BLACK),
                GradientStop::new(0.5, Colour::BLACK),
                GradientStop::new(0.5, Colour::WHITE),
                GradientStop::new(1.0, Colour::WHITE),
            ],
        )
        .unwrap();
        assert_eq!(g.colour_at(0.25), Colour::BLACK);
        assert_eq!(g.colour_at(0.5), Colour::WHITE);
        assert_eq!(g.colour_at(0.75), Colour::WHITE);
    }

    #[test]
    fn test_new_rejects_bad_stops() {
        assert!(LinearGradient::new(
            Direction::Vertical,
            vec![GradientStop::new(0.0, Colour::RED)]
        )
        .is_err());

        assert!(LinearGradient::new(
            Direction::Vertical,
            vec![
                GradientStop::new(0.0, Colour::RED),
                GradientStop::new(1.5, Colour::BLUE),
            ]
        )
        .is_err());

        assert!(LinearGradient::new(
            Direction::Vertical,
            vec![
                GradientStop::new(0.6, Colour::RED),
                GradientStop::new(0.4, Colour::BLUE),
            ]
        )
        .is_err());
    }
}
