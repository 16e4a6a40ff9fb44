// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub title: Rgba,
    pub grid: Rgba,
    /// Dash pattern `[on, off]` for grid lines.
    pub grid_dash: [f32; 2],
    pub axis_line: Rgba,
    pub tick: Rgba,
    pub legend_text: Rgba,
    pub cursor: Rgba,
    pub dot_fill: Rgba,
    pub tooltip_background: Rgba,
    pub tooltip_border: Rgba,
    pub tooltip_text: Rgba,
}

impl Theme {
    /// White card look used by the dashboard page.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::WHITE,
            title: Rgba::rgb(0x1f, 0x29, 0x37),
            grid: Rgba::rgb(0xe5, 0xe7, 0xeb),
            grid_dash: [3.0, 3.0],
            axis_line: Rgba::rgb(0xd1, 0xd5, 0xdb),
            tick: Rgba::rgb(0x6b, 0x72, 0x80),
            legend_text: Rgba::rgb(0x4b, 0x55, 0x63),
            cursor: Rgba::rgb(0xcc, 0xcc, 0xcc),
            dot_fill: Rgba::WHITE,
            tooltip_background: Rgba::WHITE,
            tooltip_border: Rgba::rgb(0xe5, 0xe7, 0xeb),
            tooltip_text: Rgba::rgb(0x1f, 0x29, 0x37),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_argb(255, 18, 18, 20),
            title: Rgba::from_argb(255, 235, 235, 245),
            grid: Rgba::from_argb(255, 40, 40, 45),
            grid_dash: [3.0, 3.0],
            axis_line: Rgba::from_argb(255, 180, 180, 190),
            tick: Rgba::from_argb(255, 150, 150, 160),
            legend_text: Rgba::from_argb(255, 210, 210, 220),
            cursor: Rgba::from_argb(255, 255, 230, 70),
            dot_fill: Rgba::from_argb(255, 18, 18, 20),
            tooltip_background: Rgba::from_argb(240, 30, 30, 34),
            tooltip_border: Rgba::from_argb(255, 70, 70, 80),
            tooltip_text: Rgba::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
