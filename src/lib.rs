//! huepick - Pixel-rendered colour picker
//!
//! A hue slider and a saturation/lightness palette, each rendered onto its
//! own pixel surface and sampled under the pointer. The picker relays the
//! slider's hue into the palette and exposes the palette's colour as the
//! final selection.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod picker;
pub mod render;
pub mod script;
pub mod types;
pub mod widgets;

pub use config::{Config, SurfaceConfig, CONFIG_FILENAME};
pub use error::{PickerError, Result};
pub use input::{Axis, DragState, DragTracker, PointerEvent};
pub use picker::{Bounds, Emission, Layout, Picker, Source};
pub use render::{
    composite_linear_gradient, fill_solid, read_png, render_hue_continuum, render_shade_plane,
    sample_at, write_png, RenderSurface,
};
pub use script::{find_scripts, load_script, parse_script, replay, ReplayReport, Step};
pub use types::{Colour, Direction, GradientStop, LinearGradient, Position, HUE_STOPS};
pub use widgets::{Emitter, HueSlider, PalettePlane, Widget};
