//! Picker orchestration.
//!
//! Wires the hue slider's output into the palette's base hue and keeps the
//! palette's output as the final colour. Also places both widgets on a host
//! surface and routes host pointer events to them:
//!
//! - down and move go only to the widget under the pointer, in that
//!   widget's local coordinates;
//! - up goes to every widget wherever it happens, so a drag always ends
//!   even when released outside the widget that started it.
//!
//! The picker owns both widgets, so it subscribes to their `colorSelected`
//! output through handler return values rather than their `Emitter`s; the
//! emitters stay available to embedders that drive a widget on its own.

use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::input::PointerEvent;
use crate::types::Colour;
use crate::widgets::{Emitter, HueSlider, PalettePlane, Widget};

/// Which widget produced an emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Slider,
    Palette,
}

/// One `colorSelected` output observed while handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Emission {
    pub source: Source,
    pub colour: Colour,
}

/// A widget's placement on the host surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Translate a host point into local coordinates if it falls inside.
    pub fn local(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        let (lx, ly) = (x - self.x, y - self.y);
        let inside = lx >= 0.0 && ly >= 0.0 && lx < self.width && ly < self.height;
        inside.then_some((lx, ly))
    }
}

/// Host layout: palette at the origin, slider to its right after `gap`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub palette: Bounds,
    pub slider: Bounds,
}

impl Layout {
    pub fn new(palette: (u32, u32), slider: (u32, u32), gap: u32) -> Self {
        Self {
            palette: Bounds {
                x: 0.0,
                y: 0.0,
                width: palette.0 as f64,
                height: palette.1 as f64,
            },
            slider: Bounds {
                x: palette.0 as f64 + gap as f64,
                y: 0.0,
                width: slider.0 as f64,
                height: slider.1 as f64,
            },
        }
    }

}

/// The orchestrator: hue slider feeding a palette, palette feeding the final
/// colour.
#[derive(Debug)]
pub struct Picker {
    slider: HueSlider,
    palette: PalettePlane,
    layout: Layout,
    hue: Option<Colour>,
    final_colour: Option<Colour>,
    emitter: Emitter,
}

impl Picker {
    /// Create and first-render both widgets before any event can arrive.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let slider = HueSlider::new(config.slider.width, config.slider.height)?;
        let palette = match config.base_hue {
            Some(hue) => PalettePlane::with_base_hue(config.palette.width, config.palette.height, hue)?,
            None => PalettePlane::new(config.palette.width, config.palette.height)?,
        };
        let layout = Layout::new(
            (config.palette.width, config.palette.height),
            (config.slider.width, config.slider.height),
            config.gap,
        );

        Ok(Self {
            slider,
            palette,
            layout,
            hue: None,
            final_colour: None,
            emitter: Emitter::new(),
        })
    }

    /// Register a listener for final colour changes.
    pub fn subscribe(&mut self, listener: impl FnMut(Colour) + 'static) {
        self.emitter.subscribe(listener);
    }

    pub fn slider(&self) -> &HueSlider {
        &self.slider
    }

    pub fn palette(&self) -> &PalettePlane {
        &self.palette
    }

    /// Latest colour relayed from the slider.
    pub fn hue_colour(&self) -> Option<Colour> {
        self.hue
    }

    /// Latest colour chosen on the palette.
    pub fn final_colour(&self) -> Option<Colour> {
        self.final_colour
    }

    /// Store a hue and forward it to the palette's base hue input.
    ///
    /// Returns the palette's re-emitted colour when the hue change re-sampled
    /// an existing selection.
    pub fn on_hue_changed(&mut self, colour: Colour) -> Result<Option<Colour>> {
        self.hue = Some(colour);
        let reemitted = self.palette.set_base_hue(colour)?;
        if let Some(c) = reemitted {
            self.on_palette_colour_changed(c);
        }
        Ok(reemitted)
    }

    /// Store the palette's output as the final colour.
    pub fn on_palette_colour_changed(&mut self, colour: Colour) {
        log::debug!("final colour {}", colour);
        self.final_colour = Some(colour);
        self.emitter.emit(colour);
    }

    /// Select a slider row directly and relay the result.
    pub fn select_hue_row(&mut self, row: u32) -> Result<Vec<Emission>> {
        let hue = self.slider.select_row(row)?;
        self.relay_hue(hue)
    }

    /// Select a palette point directly and record the result.
    pub fn select_shade(&mut self, x: u32, y: u32) -> Result<Vec<Emission>> {
        let colour = self.palette.select(x, y)?;
        Ok(vec![self.relay_palette(colour)])
    }

    /// Route one host pointer event and return every emission it caused, in
    /// order.
    pub fn handle(&mut self, event: PointerEvent) -> Result<Vec<Emission>> {
        match event {
            PointerEvent::Down { x, y } => {
                if let Some((lx, ly)) = self.layout.slider.local(x, y) {
                    let hue = self.slider.pointer_down(lx, ly)?;
                    self.relay_hue(hue)
                } else if let Some((lx, ly)) = self.layout.palette.local(x, y) {
                    let colour = self.palette.pointer_down(lx, ly)?;
                    Ok(vec![self.relay_palette(colour)])
                } else {
                    Ok(Vec::new())
                }
            }
            PointerEvent::Move { x, y } => {
                if let Some((lx, ly)) = self.layout.slider.local(x, y) {
                    match self.slider.pointer_move(lx, ly)? {
                        Some(hue) => self.relay_hue(hue),
                        None => Ok(Vec::new()),
                    }
                } else if let Some((lx, ly)) = self.layout.palette.local(x, y) {
                    match self.palette.pointer_move(lx, ly)? {
                        Some(colour) => Ok(vec![self.relay_palette(colour)]),
                        None => Ok(Vec::new()),
                    }
                } else {
                    Ok(Vec::new())
                }
            }
            PointerEvent::Up => {
                self.slider.pointer_up();
                self.palette.pointer_up();
                Ok(Vec::new())
            }
        }
    }

    fn relay_hue(&mut self, hue: Colour) -> Result<Vec<Emission>> {
        let mut emissions = vec![Emission {
            source: Source::Slider,
            colour: hue,
        }];
        if let Some(colour) = self.on_hue_changed(hue)? {
            emissions.push(Emission {
                source: Source::Palette,
                colour,
            });
        }
        Ok(emissions)
    }

    fn relay_palette(&mut self, colour: Colour) -> Emission {
        self.on_palette_colour_changed(colour);
        Emission {
            source: Source::Palette,
            colour,
        }
    }
}
