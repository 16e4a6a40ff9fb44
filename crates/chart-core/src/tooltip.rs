// File: crates/chart-core/src/tooltip.rs
// Summary: Tooltip content for one focused record slot and its on-canvas box layout.

use crate::color::Rgba;
use crate::format::format_value;
use crate::geometry::{estimate_text_width, Point, Rect};
use crate::series::Series;

pub const TOOLTIP_FONT_SIZE: f32 = 13.0;
const PADDING: f32 = 10.0;
const LINE_HEIGHT: f32 = 20.0;
/// Horizontal distance between the cursor and the box.
const OFFSET: f32 = 12.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry {
    pub name: String,
    pub value: String,
    pub color: Rgba,
}

impl TooltipEntry {
    /// `"Name : 87.46%"`
    pub fn text(&self) -> String {
        format!("{} : {}", self.name, self.value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub index: usize,
    /// `"Time: HH:MM:SS"`
    pub label: String,
    pub entries: Vec<TooltipEntry>,
}

impl Tooltip {
    /// Entries follow `series` order; series without a numeric value at this
    /// slot are left out.
    pub fn build(index: usize, time_label: &str, series: &[Series], values: &[Option<f64>]) -> Self {
        let entries = series
            .iter()
            .zip(values)
            .filter_map(|(s, v)| {
                v.map(|v| TooltipEntry { name: s.name.clone(), value: format_value(v, s.unit()), color: s.color })
            })
            .collect();
        Self { index, label: format!("Time: {time_label}"), entries }
    }

    /// Label line followed by one line per entry.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.label.clone()).chain(self.entries.iter().map(TooltipEntry::text)).collect()
    }

    /// Box beside the cursor at `x`, flipped to the left when it would leave `bounds`.
    pub fn layout(&self, x: f32, bounds: Rect) -> Rect {
        let width = self
            .lines()
            .iter()
            .map(|l| estimate_text_width(l, TOOLTIP_FONT_SIZE))
            .fold(0.0f32, f32::max)
            + PADDING * 2.0;
        let height = LINE_HEIGHT * (1 + self.entries.len()) as f32 + PADDING;
        let left = if x + OFFSET + width <= bounds.right { x + OFFSET } else { (x - OFFSET - width).max(bounds.left) };
        Rect::from_ltwh(left, bounds.top + PADDING, width, height)
    }

    /// Baseline of the `line`-th text row inside `rect` (row 0 is the label).
    pub fn line_origin(rect: &Rect, line: usize) -> Point {
        Point::new(rect.left + PADDING, rect.top + PADDING + LINE_HEIGHT * line as f32 + TOOLTIP_FONT_SIZE * 0.4)
    }
}
