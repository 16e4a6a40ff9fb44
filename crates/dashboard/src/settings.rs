// File: crates/dashboard/src/settings.rs
// Summary: Effective run settings layered from built-in defaults, an optional TOML file and CLI flags.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chart_core::types::{HEIGHT, WIDTH};
use chart_core::{theme, RenderOptions, TimeFormatter};
use serde::Deserialize;
use tracing::warn;

use crate::cli::Args;

/// Where the dataset is looked for when nothing else is configured.
pub const DEFAULT_SOURCE: &str = "public/battery_data.json";
pub const DEFAULT_OUT_DIR: &str = "dashboard";

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Svg,
    Png,
    Both,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Both => "both",
        }
    }

    pub fn svg(self) -> bool {
        matches!(self, OutputFormat::Svg | OutputFormat::Both)
    }

    pub fn png(self) -> bool {
        matches!(self, OutputFormat::Png | OutputFormat::Both)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub source: String,
    pub out_dir: PathBuf,
    pub format: OutputFormat,
    /// `None` means the host offset captured at startup.
    #[serde(default)]
    pub utc_offset: Option<String>,
    pub width: i32,
    pub height: i32,
    pub theme: String,
    /// Emit per-slot hover regions (native tooltips) into the inline SVGs.
    pub hover_regions: bool,
}

impl Settings {
    /// Defaults, then the settings file named by `--config`, then the flags.
    pub fn load(args: &Args) -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("source", DEFAULT_SOURCE)?
            .set_default("out_dir", DEFAULT_OUT_DIR)?
            .set_default("format", OutputFormat::Svg.as_str())?
            .set_default("width", i64::from(WIDTH))?
            .set_default("height", i64::from(HEIGHT))?
            .set_default("theme", "light")?
            .set_default("hover_regions", true)?;

        if let Some(path) = &args.config {
            builder = builder.add_source(config::File::from(path.as_path()).required(true));
        }

        let settings: Settings = builder
            .set_override_option("source", args.source.clone())?
            .set_override_option("out_dir", args.out_dir.as_ref().map(|p| p.to_string_lossy().into_owned()))?
            .set_override_option("format", args.format.map(OutputFormat::as_str))?
            .set_override_option("utc_offset", args.utc_offset.clone())?
            .set_override_option("width", args.width.map(i64::from))?
            .set_override_option("height", args.height.map(i64::from))?
            .set_override_option("theme", args.theme.clone())?
            .build()
            .context("reading settings")?
            .try_deserialize()
            .context("invalid settings")?;

        if settings.width <= 0 || settings.height <= 0 {
            anyhow::bail!("chart size must be positive, got {}x{}", settings.width, settings.height);
        }
        Ok(settings)
    }

    pub fn time_formatter(&self) -> Result<TimeFormatter> {
        match &self.utc_offset {
            Some(s) => TimeFormatter::with_offset_str(s).context("invalid utc_offset"),
            None => Ok(TimeFormatter::local()),
        }
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        if !theme::presets().iter().any(|t| t.name.eq_ignore_ascii_case(&self.theme)) {
            warn!(theme = %self.theme, "unknown theme, using light");
        }
        Ok(RenderOptions {
            width: self.width,
            height: self.height,
            theme: theme::find(&self.theme),
            time: self.time_formatter()?,
            hover_regions: self.hover_regions,
            ..RenderOptions::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_without_file_or_flags() {
        let s = Settings::load(&Args::default()).unwrap();
        assert_eq!(s.source, DEFAULT_SOURCE);
        assert_eq!(s.out_dir, PathBuf::from(DEFAULT_OUT_DIR));
        assert_eq!(s.format, OutputFormat::Svg);
        assert_eq!((s.width, s.height), (WIDTH, HEIGHT));
        assert_eq!(s.utc_offset, None);
        assert!(s.hover_regions);
    }

    #[test]
    fn flags_override_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "source = \"data/battery.csv\"\nformat = \"png\"\nwidth = 900\nutc_offset = \"+05:30\"\nhover_regions = false"
        )
        .unwrap();
        let args = Args {
            config: Some(file.path().to_path_buf()),
            width: Some(1200),
            ..Args::default()
        };
        let s = Settings::load(&args).unwrap();
        assert_eq!(s.source, "data/battery.csv");
        assert_eq!(s.format, OutputFormat::Png);
        assert_eq!(s.width, 1200);
        assert_eq!(s.height, HEIGHT);
        assert!(!s.hover_regions);

        let opts = s.render_options().unwrap();
        assert_eq!(opts.time, TimeFormatter::with_offset_str("+05:30").unwrap());
        assert_eq!(opts.width, 1200);
    }

    #[test]
    fn rejects_bad_offset_and_size() {
        let args = Args { utc_offset: Some("+25:00".into()), ..Args::default() };
        let s = Settings::load(&args).unwrap();
        assert!(s.render_options().is_err());

        let args = Args { height: Some(0), ..Args::default() };
        assert!(Settings::load(&args).is_err());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let args = Args { config: Some(PathBuf::from("does/not/exist.toml")), ..Args::default() };
        assert!(Settings::load(&args).is_err());
    }

    #[test]
    fn format_flags() {
        assert!(OutputFormat::Both.svg() && OutputFormat::Both.png());
        assert!(OutputFormat::Svg.svg() && !OutputFormat::Svg.png());
    }
}
