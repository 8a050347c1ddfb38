//! Core value types for huepick.
//!
//! This module contains the plain values passed between components:
//! - `Colour` - RGBA colour values
//! - `LinearGradient` - Ordered colour stops along one axis
//! - `Position` - Pixel coordinates inside a surface

mod colour;
mod gradient;
mod position;

pub use colour::Colour;
pub(crate) use gradient::quantize;
pub use gradient::{Direction, GradientStop, LinearGradient, HUE_STOPS};
pub use position::Position;
