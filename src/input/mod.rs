//! Pointer input handling.

mod drag;

use serde::{Deserialize, Serialize};

pub use drag::{Axis, DragState, DragTracker};

/// A pointer event in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum PointerEvent {
    /// Primary button pressed.
    Down { x: f64, y: f64 },
    /// Pointer moved.
    Move { x: f64, y: f64 },
    /// Primary button released. Observed globally, so no position is needed.
    Up,
}
