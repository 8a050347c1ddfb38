//! Pointer-driven, pixel-rendered picker widgets.
//!
//! Each widget creates and first-renders its surface in its constructor, so
//! no pointer handler can ever run against a missing surface. Pointer
//! coordinates are widget-local and clamped to the surface before sampling.

mod emitter;
mod hue_slider;
mod palette_plane;

pub use emitter::Emitter;
pub use hue_slider::HueSlider;
pub use palette_plane::PalettePlane;

use crate::error::Result;
use crate::input::DragState;
use crate::render::RenderSurface;
use crate::types::{Colour, Position};

/// Behaviour shared by the hue slider and the palette.
pub trait Widget {
    /// The widget's surface as last rendered.
    fn surface(&self) -> &RenderSurface;

    /// Redraw the full surface for the current state, marker included.
    fn render(&mut self);

    /// Current selection, if any pointer has selected a position yet.
    fn selection(&self) -> Option<Position>;

    fn drag_state(&self) -> DragState;

    /// Pointer pressed inside the widget. Always selects and emits.
    fn pointer_down(&mut self, x: f64, y: f64) -> Result<Colour>;

    /// Pointer moved inside the widget. Emits only while dragging and only
    /// when the selection actually changed.
    fn pointer_move(&mut self, x: f64, y: f64) -> Result<Option<Colour>>;

    /// Pointer released anywhere on the host. Ends any drag.
    fn pointer_up(&mut self);

    fn width(&self) -> u32 {
        self.surface().width()
    }

    fn height(&self) -> u32 {
        self.surface().height()
    }
}
