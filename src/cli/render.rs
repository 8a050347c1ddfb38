//! Render command implementation.
//!
//! Builds a picker from the config, applies optional selections, and writes
//! both widget surfaces as PNG files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{PickerError, Result};
use crate::output::{describe_colour, display_path, Printer};
use crate::picker::Picker;
use crate::render::write_png;
use crate::widgets::Widget;

/// Render the slider and palette to PNG files
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Config file (default: ./huepick.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Select this slider row before rendering
    #[arg(long)]
    pub hue_row: Option<u32>,

    /// Select this palette point before rendering, as X,Y
    #[arg(long, value_parser = parse_point)]
    pub select: Option<(u32, u32)>,

    /// Output directory (default: from config)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let output = super::output_dir(args.output.as_ref(), &config);
    let scale = args.scale.unwrap_or(config.scale);
    config.validate_scale(scale)?;

    let mut picker = Picker::new(&config)?;

    if let Some(row) = args.hue_row {
        picker.select_hue_row(row)?;
    }
    if let Some((x, y)) = args.select {
        picker.select_shade(x, y)?;
    }

    write_surfaces(&picker, &output, scale, "", printer)?;

    if let Some(hue) = picker.hue_colour() {
        println!("hue: {}", hue);
        printer.info("Hue", &describe_colour(hue));
    }
    if let Some(colour) = picker.final_colour() {
        println!("colour: {}", colour);
        printer.info("Colour", &describe_colour(colour));
    }

    Ok(())
}

/// Write `{prefix}slider.png` and `{prefix}palette.png` into `dir`.
pub(crate) fn write_surfaces(
    picker: &Picker,
    dir: &Path,
    scale: u32,
    prefix: &str,
    printer: &Printer,
) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| PickerError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let widgets: [(&str, &dyn Widget); 2] = [
        ("slider", picker.slider()),
        ("palette", picker.palette()),
    ];

    for (name, widget) in widgets {
        let path = dir.join(format!("{}{}.png", prefix, name));
        let (width, height) = write_png(widget.surface(), &path, scale)?;
        printer.status(
            "Rendered",
            &format!("{} ({}x{})", display_path(&path), width, height),
        );
    }

    Ok(())
}

fn parse_point(s: &str) -> std::result::Result<(u32, u32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x coordinate '{}'", x))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y coordinate '{}'", y))?;
    Ok((x, y))
}
