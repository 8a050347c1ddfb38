//! Saturation/lightness palette tinted by a base hue.
//!
//! The selected position persists across hue changes: a new hue redraws the
//! plane underneath the same point and re-emits whatever colour is there now.

use crate::error::Result;
use crate::input::{Axis, DragState, DragTracker};
use crate::render::{render_shade_plane, sample_at, stroke_circle, RenderSurface};
use crate::types::{Colour, Position};

use super::{Emitter, Widget};

const MARKER_RADIUS: f64 = 8.0;
const MARKER_LINE_WIDTH: f64 = 3.0;

#[derive(Debug)]
pub struct PalettePlane {
    surface: RenderSurface,
    tracker: DragTracker,
    base_hue: Colour,
    selected: Option<Position>,
    emitter: Emitter,
}

impl PalettePlane {
    /// Create the palette with the default opaque white base hue.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_base_hue(width, height, Colour::WHITE)
    }

    /// Create the palette and render it with an initial base hue.
    pub fn with_base_hue(width: u32, height: u32, base_hue: Colour) -> Result<Self> {
        let mut palette = Self {
            surface: RenderSurface::new(width, height)?,
            tracker: DragTracker::new(Axis::Point),
            base_hue: base_hue.opaque(),
            selected: None,
            emitter: Emitter::new(),
        };
        palette.render();
        log::debug!(
            "palette initialized ({}x{}) with base hue {}",
            width,
            height,
            palette.base_hue
        );
        Ok(palette)
    }

    /// Register a listener for selected colours.
    pub fn subscribe(&mut self, listener: impl FnMut(Colour) + 'static) {
        self.emitter.subscribe(listener);
    }

    pub fn base_hue(&self) -> Colour {
        self.base_hue
    }

    /// Change the base hue.
    ///
    /// Redraws the plane; if a position was already selected, redraws the
    /// marker there and re-emits the colour now under it. Setting the hue it
    /// already has is not a change and does nothing.
    pub fn set_base_hue(&mut self, hue: Colour) -> Result<Option<Colour>> {
        let hue = hue.opaque();
        if hue == self.base_hue {
            return Ok(None);
        }

        log::debug!("palette base hue {} -> {}", self.base_hue, hue);
        self.base_hue = hue;
        self.render();

        match self.selected {
            Some(pos) => self.sample_and_emit(pos).map(Some),
            None => Ok(None),
        }
    }

    /// Select a point without a pointer, e.g. to restore a previous choice.
    pub fn select(&mut self, x: u32, y: u32) -> Result<Colour> {
        let pos = Position::clamped(x as f64, y as f64, self.width(), self.height());
        self.apply(pos)
    }

    fn apply(&mut self, pos: Position) -> Result<Colour> {
        self.selected = Some(pos);
        self.render();
        self.sample_and_emit(pos)
    }

    fn sample_and_emit(&mut self, pos: Position) -> Result<Colour> {
        let colour = sample_at(&self.surface, pos.x, pos.y)?;
        log::debug!("palette selected {} -> {}", pos, colour);
        Ok(self.emitter.emit(colour))
    }
}

impl Widget for PalettePlane {
    fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    fn render(&mut self) {
        render_shade_plane(&mut self.surface, self.base_hue);
        if let Some(pos) = self.selected {
            let centre = (pos.x as f64 + 0.5, pos.y as f64 + 0.5);
            stroke_circle(
                &mut self.surface,
                centre,
                MARKER_RADIUS,
                MARKER_LINE_WIDTH,
                Colour::WHITE,
            );
        }
    }

    fn selection(&self) -> Option<Position> {
        self.selected
    }

    fn drag_state(&self) -> DragState {
        self.tracker.state()
    }

    fn pointer_down(&mut self, x: f64, y: f64) -> Result<Colour> {
        let pos = Position::clamped(x, y, self.width(), self.height());
        let pos = self.tracker.pointer_down(pos);
        self.apply(pos)
    }

    fn pointer_move(&mut self, x: f64, y: f64) -> Result<Option<Colour>> {
        let pos = Position::clamped(x, y, self.width(), self.height());
        match self.tracker.pointer_move(pos, self.selected) {
            Some(pos) => self.apply(pos).map(Some),
            None => Ok(None),
        }
    }

    fn pointer_up(&mut self) {
        if self.tracker.pointer_up() {
            log::debug!("palette drag ended");
        }
    }
}
