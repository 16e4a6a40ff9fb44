// File: crates/chart-core/src/svg.rs
// Summary: SVG backend; accumulates drawing calls into a standalone <svg> document.

use std::fmt::Write as _;

use crate::color::Rgba;
use crate::geometry::{Point, Rect};
use crate::surface::{Anchor, Stroke, Surface, TextStyle};

const FONT_FAMILY: &str = "Segoe UI, Arial, Helvetica, Roboto, DejaVu Sans, sans-serif";

pub struct SvgSurface {
    width: i32,
    height: i32,
    body: String,
}

impl SvgSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, body: String::new() }
    }

    /// Close the document and return its text.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"{FONT_FAMILY}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    fn push(&mut self, element: std::fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = self.body.write_fmt(element);
        self.body.push('\n');
    }
}

fn paint_attr(name: &str, color: Rgba) -> String {
    if color.is_opaque() {
        format!("{name}=\"{}\"", color.to_hex())
    } else {
        format!("{name}=\"{}\" {name}-opacity=\"{:.3}\"", color.to_hex(), color.opacity())
    }
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut s = format!("{} stroke-width=\"{}\"", paint_attr("stroke", stroke.color), stroke.width);
    if let Some([on, off]) = stroke.dash {
        let _ = write!(s, " stroke-dasharray=\"{on} {off}\"");
    }
    s
}

/// Escape text for element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

impl Surface for SvgSurface {
    fn clear(&mut self, color: Rgba) {
        self.body.clear();
        let (w, h) = (self.width, self.height);
        self.push(format_args!("<rect x=\"0\" y=\"0\" width=\"{w}\" height=\"{h}\" {}/>", paint_attr("fill", color)));
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.push(format_args!(
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" {}/>",
            from.x, from.y, to.x, to.y, stroke_attrs(stroke)
        ));
    }

    fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        if points.len() < 2 {
            return;
        }
        let mut coords = String::with_capacity(points.len() * 16);
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                coords.push(' ');
            }
            let _ = write!(coords, "{:.2},{:.2}", p.x, p.y);
        }
        self.push(format_args!(
            "<polyline points=\"{coords}\" fill=\"none\" stroke-linejoin=\"round\" stroke-linecap=\"round\" {}/>",
            stroke_attrs(stroke)
        ));
    }

    fn circle(&mut self, center: Point, radius: f32, fill: Rgba, stroke: Option<&Stroke>) {
        let stroke = stroke.map(stroke_attrs).unwrap_or_default();
        self.push(format_args!(
            "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" {} {stroke}/>",
            center.x, center.y, radius, paint_attr("fill", fill)
        ));
    }

    fn rect(&mut self, rect: Rect, corner_radius: f32, fill: Option<Rgba>, stroke: Option<&Stroke>) {
        let fill = fill.map(|c| paint_attr("fill", c)).unwrap_or_else(|| "fill=\"none\"".to_string());
        let stroke = stroke.map(stroke_attrs).unwrap_or_default();
        self.push(format_args!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{}\" {fill} {stroke}/>",
            rect.left, rect.top, rect.width(), rect.height(), corner_radius
        ));
    }

    fn text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let anchor = match style.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        let weight = if style.bold { " font-weight=\"600\"" } else { "" };
        self.push(format_args!(
            "<text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" text-anchor=\"{anchor}\"{weight} {}>{}</text>",
            at.x, at.y, style.size, paint_attr("fill", style.color), escape(text)
        ));
    }

    fn hover_region(&mut self, rect: Rect, lines: &[String]) {
        let title = escape(&lines.join("\n"));
        self.push(format_args!(
            "<rect class=\"hover\" x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"transparent\"><title>{title}</title></rect>",
            rect.left, rect.top, rect.width(), rect.height()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn document_wraps_elements() {
        let mut s = SvgSurface::new(10, 20);
        s.clear(Rgba::WHITE);
        s.polyline(&[Point::new(0.0, 0.0)], &Stroke::solid(Rgba::WHITE, 1.0));
        s.text("°C", Point::new(1.0, 2.0), &TextStyle::new(12.0, Rgba::rgb(0, 0, 0)));
        let doc = s.finish();
        assert!(doc.starts_with("<svg "));
        assert!(doc.contains("viewBox=\"0 0 10 20\""));
        assert!(!doc.contains("<polyline"), "single point polyline is skipped");
        assert!(doc.contains(">°C</text>"));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn translucent_colors_emit_opacity() {
        let mut s = SvgSurface::new(1, 1);
        s.circle(Point::new(0.0, 0.0), 2.0, Rgba::from_argb(128, 0, 0, 0), None);
        assert!(s.finish().contains("fill-opacity=\"0.502\""));
    }
}
