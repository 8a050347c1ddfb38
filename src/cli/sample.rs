use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::{describe_colour, display_path, Printer};
use crate::render::{read_png, sample_at};

/// Read the colour at a pixel of a PNG file
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// PNG file to sample
    #[arg(required = true)]
    pub file: PathBuf,

    /// Column
    pub x: u32,

    /// Row
    pub y: u32,
}

pub fn run(args: SampleArgs, printer: &Printer) -> Result<()> {
    let surface = read_png(&args.file)?;
    let colour = sample_at(&surface, args.x, args.y)?;

    printer.status(
        "Sampled",
        &format!("({}, {}) from {}", args.x, args.y, display_path(&args.file)),
    );
    printer.info("Colour", &describe_colour(colour));
    println!("{}", colour);

    Ok(())
}
