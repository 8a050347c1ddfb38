//! Colour type and parsing.
//!
//! The textual form used at every widget boundary is `rgba(R, G, B, A)`,
//! with R, G, B as decimal integers and A as a decimal fraction
//! (`1` for opaque).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PickerError, Result};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);
        let digits: Vec<char> = hex.chars().collect();

        match digits.len() {
            3 | 4 => {
                let mut channels = [255u8; 4];
                for (channel, c) in channels.iter_mut().zip(&digits) {
                    let d = parse_hex_digit(*c)?;
                    *channel = d << 4 | d;
                }
                Ok(Self::new(channels[0], channels[1], channels[2], channels[3]))
            }
            6 | 8 if hex.is_ascii() => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    parse_hex_byte(&hex[6..8])?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(PickerError::Parse {
                message: format!("Invalid hex colour: {}", s),
                help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
            }),
        }
    }

    /// Parse the `rgba(R, G, B, A)` / `rgb(R, G, B)` boundary form.
    pub fn from_rgba_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || PickerError::Parse {
            message: format!("Invalid rgba colour: {}", s),
            help: Some("Use rgba(R, G, B, A) with R, G, B in 0-255 and A in 0-1".to_string()),
        };

        let (body, with_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if with_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }

        let mut rgb = [0u8; 3];
        for (channel, part) in rgb.iter_mut().zip(&parts) {
            *channel = part.parse::<u8>().map_err(|_| invalid())?;
        }

        let a = if with_alpha {
            let alpha: f64 = parts[3].parse().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(invalid());
            }
            (alpha * 255.0).round() as u8
        } else {
            255
        };

        Ok(Self::new(rgb[0], rgb[1], rgb[2], a))
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The same colour with alpha forced to fully opaque.
    pub fn opaque(self) -> Self {
        Self { a: 255, ..self }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
    pub fn to_hsl(self) -> (f32, f32, f32) {
        use palette::{Hsl, IntoColor, Srgb};

        let rgb: Srgb<f32> = Srgb::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        );
        let hsl: Hsl = rgb.into_color();

        (
            hsl.hue.into_positive_degrees(),
            hsl.saturation,
            hsl.lightness,
        )
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim_start().starts_with("rgb") {
            Self::from_rgba_str(s)
        } else {
            Self::from_hex(s)
        }
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            format_alpha(self.a)
        )
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Alpha as a trimmed decimal: `1`, `0`, `0.5`.
fn format_alpha(a: u8) -> String {
    match a {
        255 => "1".to_string(),
        0 => "0".to_string(),
        _ => {
            let s = format!("{:.3}", a as f64 / 255.0);
            s.trim_end_matches('0').to_string()
        }
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| PickerError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| PickerError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
