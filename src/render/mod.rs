//! Rendering module for huepick.
//!
//! This module owns the pixel surfaces, draws gradients and selection
//! markers onto them, and reads colours back out.

mod gradient;
mod marker;
mod png;
mod sample;
mod surface;

pub use gradient::{composite_linear_gradient, fill_solid, render_hue_continuum, render_shade_plane};
pub use marker::{stroke_circle, stroke_rect, Rect};
pub use png::{read_png, scale_image, scaled_size, write_png};
pub use sample::sample_at;
pub use surface::RenderSurface;
