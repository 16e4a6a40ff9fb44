// File: crates/chart-render-skia/src/text.rs
// Summary: Skia textlayout shaping for chart labels: one paragraph per label, anchored on its baseline.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};

use chart_core::Anchor;

/// Matches the `font-family` list of the SVG output.
const SANS_FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const MAX_LINE_WIDTH: f32 = 10_000.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fonts = FontCollection::new();
        fonts.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts }
    }

    fn style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(SANS_FAMILIES);
        if bold {
            style.set_font_style(skia::FontStyle::bold());
        }
        style
    }

    /// Single-line paragraph, laid out and ready to paint.
    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut paragraph_style = ParagraphStyle::new();
        paragraph_style.set_text_align(TextAlign::Left);
        paragraph_style.set_max_lines(1);
        let mut builder = ParagraphBuilder::new(&paragraph_style, &self.fonts);
        builder.push_style(&Self::style(size, color, bold));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(MAX_LINE_WIDTH);
        paragraph
    }

    /// Paint `text` with its baseline at `y`; `anchor` says which end of the
    /// run sits at `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        size: f32,
        color: skia::Color,
        bold: bool,
    ) {
        let paragraph = self.layout(text, size, color, bold);
        let width = paragraph.longest_line();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - width * 0.5,
            Anchor::End => x - width,
        };
        paragraph.paint(canvas, (left, y - paragraph.alphabetic_baseline()));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
