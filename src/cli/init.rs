//! Init command implementation.
//!
//! Writes a `huepick.yaml` with every setting at its default.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{PickerError, Result};
use crate::output::{display_path, Printer};

/// Write a default huepick.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write into (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing huepick.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(PickerError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| PickerError::Io {
            path: args.path.clone(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }

    let yaml = Config::default().to_yaml()?;
    fs::write(&config_path, yaml).map_err(|e| PickerError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_default_config() {
        let dir = tempdir().unwrap();
        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::new()).unwrap();

        let config = Config::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "scale: 4\n").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };
        assert!(run(args, &Printer::new()).is_err());

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };
        run(args, &Printer::new()).unwrap();
        let config = Config::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert_eq!(config.scale, 1);
    }
}
