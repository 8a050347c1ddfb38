pub mod completions;
pub mod init;
pub mod render;
pub mod replay;
pub mod sample;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;

/// huepick - Hue slider and saturation/lightness palette colour picker
#[derive(Parser, Debug)]
#[command(name = "huepick")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default huepick.yaml
    Init(init::InitArgs),

    /// Render the slider and palette to PNG files
    Render(render::RenderArgs),

    /// Replay pointer event scripts through the picker
    Replay(replay::ReplayArgs),

    /// Read the colour at a pixel of a PNG file
    Sample(sample::SampleArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load an explicit config file, or discover one in the current directory.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::discover(Path::new(".")),
    }
}

/// Output directory from the command line, falling back to the config.
pub(crate) fn output_dir(arg: Option<&PathBuf>, config: &Config) -> PathBuf {
    arg.cloned().unwrap_or_else(|| config.output.clone())
}
