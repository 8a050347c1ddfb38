use miette::Diagnostic;
use thiserror::Error;

/// Main error type for huepick operations
#[derive(Error, Diagnostic, Debug)]
pub enum PickerError {
    #[error("IO error: {0}")]
    #[diagnostic(code(huepick::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(huepick::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(huepick::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(huepick::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Surface must have a non-zero size, got {width}x{height}")]
    #[diagnostic(code(huepick::surface))]
    EmptySurface { width: u32, height: u32 },

    #[error("Sample at ({x}, {y}) is outside the {width}x{height} surface")]
    #[diagnostic(
        code(huepick::sample),
        help("Clamp pointer coordinates to the surface bounds before sampling")
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid gradient: {message}")]
    #[diagnostic(code(huepick::gradient))]
    InvalidGradient { message: String },
}

pub type Result<T> = std::result::Result<T, PickerError>;
