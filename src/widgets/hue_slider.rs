//! Vertical hue slider.
//!
//! A pure hue source: renders the hue continuum, tracks the selected row and
//! emits the colour under it. It has no external inputs.

use crate::error::Result;
use crate::input::{Axis, DragState, DragTracker};
use crate::render::{render_hue_continuum, sample_at, stroke_rect, Rect, RenderSurface};
use crate::types::{Colour, Position};

use super::{Emitter, Widget};

/// Outline width of the selection band.
const MARKER_LINE_WIDTH: f64 = 4.0;

/// Height of the selection band, centred on the selected row.
const MARKER_HEIGHT: f64 = 10.0;

/// How far the band overhangs the left and right edges, so only its top and
/// bottom strokes are visible.
const MARKER_OVERHANG: f64 = 2.0;

#[derive(Debug)]
pub struct HueSlider {
    surface: RenderSurface,
    tracker: DragTracker,
    selected: Option<Position>,
    emitter: Emitter,
}

impl HueSlider {
    /// Create the slider surface and render the hue continuum.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mut slider = Self {
            surface: RenderSurface::new(width, height)?,
            tracker: DragTracker::new(Axis::Row),
            selected: None,
            emitter: Emitter::new(),
        };
        slider.render();
        log::debug!("hue slider initialized ({}x{})", width, height);
        Ok(slider)
    }

    /// Register a listener for selected hue colours.
    pub fn subscribe(&mut self, listener: impl FnMut(Colour) + 'static) {
        self.emitter.subscribe(listener);
    }

    pub fn selected_row(&self) -> Option<u32> {
        self.selected.map(|p| p.y)
    }

    /// Select a row without a pointer, e.g. to restore a previous choice.
    pub fn select_row(&mut self, row: u32) -> Result<Colour> {
        let x = self.width() / 2;
        let pos = Position::clamped(x as f64, row as f64, self.width(), self.height());
        self.apply(pos)
    }

    /// Record the selection, redraw, then sample and emit.
    fn apply(&mut self, pos: Position) -> Result<Colour> {
        self.selected = Some(pos);
        self.render();
        let colour = sample_at(&self.surface, pos.x, pos.y)?;
        log::debug!("hue slider selected row {} -> {}", pos.y, colour);
        Ok(self.emitter.emit(colour))
    }

    fn draw_marker(&mut self, row: u32) {
        let centre = row as f64 + 0.5;
        let band = Rect::new(
            -MARKER_OVERHANG,
            centre - MARKER_HEIGHT / 2.0,
            self.surface.width() as f64 + 2.0 * MARKER_OVERHANG,
            MARKER_HEIGHT,
        );
        stroke_rect(&mut self.surface, band, MARKER_LINE_WIDTH, Colour::WHITE);
    }
}

impl Widget for HueSlider {
    fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    fn render(&mut self) {
        render_hue_continuum(&mut self.surface);
        if let Some(pos) = self.selected {
            self.draw_marker(pos.y);
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
            log::debug!("hue slider drag ended");
        }
    }
}
