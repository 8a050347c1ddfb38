//! Replay command implementation.
//!
//! Runs each event script through a fresh picker and prints what was
//! emitted, as text or as a JSON report.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::error::{PickerError, Result};
use crate::output::{display_path, plural, Printer};
use crate::picker::{Picker, Source};
use crate::script::{find_scripts, load_script, replay, ReplayReport, SCRIPT_SUFFIX};

/// Replay pointer event scripts through the picker
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Script files or directories containing *.events.yaml
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Config file (default: ./huepick.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Also write the final surfaces of each script to this directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ScriptReport<'a> {
    script: String,
    #[serde(flatten)]
    report: &'a ReplayReport,
}

pub fn run(args: ReplayArgs, printer: &Printer) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let scripts = find_scripts(&args.paths);

    if scripts.is_empty() {
        printer.warning("Skipping", "no event scripts found");
        return Ok(());
    }

    let mut reports = Vec::with_capacity(scripts.len());
    for script in &scripts {
        let events = load_script(script)?;
        let mut picker = Picker::new(&config)?;
        let report = replay(&mut picker, &events)?;

        printer.status(
            "Replayed",
            &format!(
                "{} ({}, {})",
                display_path(script),
                plural(events.len(), "event", "events"),
                plural(report.emission_count(), "emission", "emissions")
            ),
        );

        if let Some(dir) = &args.output {
            let prefix = format!("{}-", script_stem(script));
            super::render::write_surfaces(&picker, dir, config.scale, &prefix, printer)?;
        }

        reports.push((display_path(script), report));
    }

    if args.json {
        let body: Vec<ScriptReport> = reports
            .iter()
            .map(|(script, report)| ScriptReport {
                script: script.clone(),
                report,
            })
            .collect();
        let json = serde_json::to_string_pretty(&body).map_err(|e| PickerError::Parse {
            message: format!("Failed to serialize report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        for (script, report) in &reports {
            if reports.len() > 1 {
                println!("{}", printer.dim(&format!("# {}", script)));
            }
            print!("{}", format_report(report));
        }
    }

    Ok(())
}

/// One line per emission, then the final colour.
pub fn format_report(report: &ReplayReport) -> String {
    let mut out = String::new();
    for step in &report.steps {
        for emission in &step.emissions {
            let source = match emission.source {
                Source::Slider => "slider",
                Source::Palette => "palette",
            };
            let _ = writeln!(out, "{:<4}{:<8}{}", step.index, source, emission.colour);
        }
    }
    match report.final_colour {
        Some(colour) => {
            let _ = writeln!(out, "final {}", colour);
        }
        None => {
            let _ = writeln!(out, "final none");
        }
    }
    out
}

/// `drag.events.yaml` -> `drag`
fn script_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.strip_suffix(SCRIPT_SUFFIX)
        .or_else(|| name.rsplit_once('.').map(|(stem, _)| stem))
        .unwrap_or(&name)
        .to_string()
}
