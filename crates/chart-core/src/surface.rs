// File: crates/chart-core/src/surface.rs
// Summary: Drawing capability interface implemented by every rendering backend.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f32,
    /// `[on, off]` dash lengths; solid when `None`.
    pub dash: Option<[f32; 2]>,
}

impl Stroke {
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Rgba, width: f32, dash: [f32; 2]) -> Self {
        Self { color, width, dash: Some(dash) }
    }
}

/// Horizontal alignment of text relative to its anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Rgba,
    pub anchor: Anchor,
    pub bold: bool,
}

impl TextStyle {
    pub fn new(size: f32, color: Rgba) -> Self {
        Self { size, color, anchor: Anchor::Start, bold: false }
    }

    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Primitive drawing operations. Text positions are baseline anchor points.
pub trait Surface {
    fn clear(&mut self, color: Rgba);
    fn line(&mut self, from: Point, to: Point, stroke: &Stroke);
    fn polyline(&mut self, points: &[Point], stroke: &Stroke);
    fn circle(&mut self, center: Point, radius: f32, fill: Rgba, stroke: Option<&Stroke>);
    fn rect(&mut self, rect: Rect, corner_radius: f32, fill: Option<Rgba>, stroke: Option<&Stroke>);
    fn text(&mut self, text: &str, at: Point, style: &TextStyle);

    /// Interactive region showing `lines` on hover. Raster backends ignore it.
    fn hover_region(&mut self, _rect: Rect, _lines: &[String]) {}
}
