// File: crates/chart-core/src/series.rs
// Summary: Static series descriptor (which field to plot, how it is named, colored and unit-tagged).

use crate::color::Rgba;
use crate::error::ChartError;

/// Line color used when a series does not specify one.
pub const DEFAULT_SERIES_COLOR: Rgba = Rgba::rgb(0x88, 0x84, 0xd8);

/// One named, colored, unit-tagged measurement track.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub key: String,
    pub name: String,
    pub color: Rgba,
    pub unit: Option<String>,
}

impl Series {
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self { key: key.into(), name: name.into(), color: DEFAULT_SERIES_COLOR, unit: None }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Hex color, e.g. `"#10B981"`.
    pub fn with_hex(self, hex: &str) -> Result<Self, ChartError> {
        Ok(self.with_color(Rgba::from_hex(hex)?))
    }

    /// Unit suffix appended verbatim to values, e.g. `"%"` or `" km/h"`.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        let unit = unit.into();
        self.unit = if unit.is_empty() { None } else { Some(unit) };
        self
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }
}
