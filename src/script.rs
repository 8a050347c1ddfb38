//! Pointer event scripts.
//!
//! A script is a YAML list of host pointer events, replayed in order through
//! a fresh picker:
//!
//! ```yaml
//! - { event: down, x: 165, y: 110 }
//! - { event: move, x: 165, y: 112 }
//! - { event: up }
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{PickerError, Result};
use crate::input::PointerEvent;
use crate::picker::{Emission, Picker};
use crate::types::Colour;

/// File suffix for event scripts.
pub const SCRIPT_SUFFIX: &str = ".events.yaml";

/// Parse a script from YAML.
pub fn parse_script(content: &str) -> Result<Vec<PointerEvent>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(content).map_err(|e| PickerError::Parse {
        message: format!("Invalid event script: {}", e),
        help: Some("Each entry needs `event: down|move|up`, plus `x` and `y` for down and move".to_string()),
    })
}

/// Load a script file.
pub fn load_script(path: &Path) -> Result<Vec<PointerEvent>> {
    let content = std::fs::read_to_string(path).map_err(|e| PickerError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read script: {}", e),
    })?;
    parse_script(&content)
}

/// Expand files and directories into a sorted list of script files.
///
/// Files given explicitly are kept whatever their name; directories are
/// scanned recursively for `*.events.yaml`.
pub fn find_scripts(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut scripts = Vec::new();

    for path in paths {
        if path.is_dir() {
            let found = WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .filter(|e| e.file_name().to_string_lossy().ends_with(SCRIPT_SUFFIX))
                .map(|e| e.into_path());
            scripts.extend(found);
        } else {
            scripts.push(path.clone());
        }
    }

    scripts.sort();
    scripts.dedup();
    scripts
}

/// One replayed event and what it emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub index: usize,
    pub event: PointerEvent,
    pub emissions: Vec<Emission>,
}

/// Result of replaying a script.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<Step>,
    pub hue: Option<Colour>,
    pub final_colour: Option<Colour>,
}

impl ReplayReport {
    /// Total number of emissions across all steps.
    pub fn emission_count(&self) -> usize {
        self.steps.iter().map(|s| s.emissions.len()).sum()
    }
}

/// Feed every event to the picker in order.
pub fn replay(picker: &mut Picker, events: &[PointerEvent]) -> Result<ReplayReport> {
    let mut steps = Vec::with_capacity(events.len());

    for (index, event) in events.iter().enumerate() {
        let emissions = picker.handle(*event)?;
        steps.push(Step {
            index,
            event: *event,
            emissions,
        });
    }

    Ok(ReplayReport {
        steps,
        hue: picker.hue_colour(),
        final_colour: picker.final_colour(),
    })
}
