// File: crates/dashboard/src/cli.rs
// Summary: Command-line arguments; every flag is optional so the settings file and defaults can fill the gaps.

use std::path::PathBuf;

use clap::Parser;

use crate::settings::OutputFormat;

#[derive(Parser, Debug, Default)]
#[command(name = "ev-dashboard")]
#[command(about = "Render the electric vehicle battery telemetry dashboard")]
pub struct Args {
    /// Dataset location: an http(s) URL or a local .json/.csv file
    pub source: Option<String>,

    /// TOML settings file layered under the command-line flags
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory receiving index.html and the per-chart files
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Per-chart image format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Offset for the time labels, e.g. `+05:30` or `Z`; defaults to the host offset
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset: Option<String>,

    /// Chart width in pixels
    #[arg(long)]
    pub width: Option<i32>,

    /// Chart height in pixels
    #[arg(long)]
    pub height: Option<i32>,

    /// Theme preset (light, dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
