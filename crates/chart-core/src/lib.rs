// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the telemetry data model, formatter, chart derivation and SVG output.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod color;
pub mod error;
pub mod record;
pub mod format;
pub mod legend;
pub mod tooltip;
pub mod surface;
pub mod svg;

pub use chart::{Chart, ChartView, RenderOptions, SeriesLine};
pub use series::Series;
pub use axis::{Axis, Tick};
pub use view::y_domain;
pub use theme::Theme;
pub use color::Rgba;
pub use error::{ChartError, DatasetError};
pub use record::{Dataset, FieldValue, Record};
pub use format::{display_records, format_value, DisplayRecord, TimeFormatter, FORMATTED_TIME_KEY, INVALID_DATE};
pub use legend::LegendItem;
pub use tooltip::{Tooltip, TooltipEntry};
pub use surface::{Anchor, Stroke, Surface, TextStyle};
pub use svg::SvgSurface;
