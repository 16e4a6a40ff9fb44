// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, band heights).

/// Default surface width in pixels.
pub const WIDTH: i32 = 640;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 360;

/// Height reserved above the plot for the chart title.
pub const TITLE_BAND: u32 = 36;
/// Height reserved below the x axis for tick labels.
pub const X_AXIS_BAND: u32 = 30;
/// Width reserved left of the plot for y tick labels.
pub const Y_AXIS_BAND: u32 = 60;
/// Height reserved at the bottom for the legend.
pub const LEGEND_BAND: u32 = 32;

/// Tick/legend font size in pixels.
pub const FONT_SIZE: f32 = 12.0;
pub const TITLE_FONT_SIZE: f32 = 20.0;
pub const LEGEND_FONT_SIZE: f32 = 14.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    /// Outer card padding plus the chart margin.
    fn default() -> Self {
        Self::new(20, 50, 20, 20)
    }
}
