// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate. Hosts the CPU raster Surface, text shaping, and PNG/RGBA output for charts.

pub mod text;

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use chart_core::geometry::{Point, Rect};
use chart_core::{Chart, Dataset, RenderOptions, Rgba, Stroke, Surface, TextStyle};

pub use text::TextShaper;

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(stroke: &Stroke) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(stroke.width);
    paint.set_color(color(stroke.color));
    if let Some([on, off]) = stroke.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
    }
    paint
}

fn fill_paint(c: Rgba) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color(c));
    paint
}

/// `chart_core::Surface` over a Skia CPU raster surface.
pub struct SkiaSurface<'a> {
    surface: skia::Surface,
    text: &'a TextShaper,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(width: i32, height: i32, text: &'a TextShaper) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        Ok(Self { surface, text })
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA8 pixels: `(pixels, width, height, stride)`.
    pub fn read_rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let (w, h) = (self.surface.width(), self.surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading raster pixels failed");
        }
        Ok((pixels, w as u32, h as u32, stride))
    }
}

impl Surface for SkiaSurface<'_> {
    fn clear(&mut self, c: Rgba) {
        self.surface.canvas().clear(color(c));
    }

    fn line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let paint = stroke_paint(stroke);
        self.surface.canvas().draw_line((from.x, from.y), (to.x, to.y), &paint);
    }

    fn polyline(&mut self, points: &[Point], stroke: &Stroke) {
        let Some((first, rest)) = points.split_first() else { return };
        if rest.is_empty() {
            return;
        }
        let mut path = skia::Path::new();
        path.move_to((first.x, first.y));
        for p in rest {
            path.line_to((p.x, p.y));
        }
        let mut paint = stroke_paint(stroke);
        paint.set_stroke_join(skia::paint::Join::Round);
        paint.set_stroke_cap(skia::paint::Cap::Round);
        self.surface.canvas().draw_path(&path, &paint);
    }

    fn circle(&mut self, center: Point, radius: f32, fill: Rgba, stroke: Option<&Stroke>) {
        let canvas = self.surface.canvas();
        canvas.draw_circle((center.x, center.y), radius, &fill_paint(fill));
        if let Some(stroke) = stroke {
            canvas.draw_circle((center.x, center.y), radius, &stroke_paint(stroke));
        }
    }

    fn rect(&mut self, rect: Rect, corner_radius: f32, fill: Option<Rgba>, stroke: Option<&Stroke>) {
        let r = skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom);
        let canvas = self.surface.canvas();
        if let Some(fill) = fill {
            canvas.draw_round_rect(r, corner_radius, corner_radius, &fill_paint(fill));
        }
        if let Some(stroke) = stroke {
            canvas.draw_round_rect(r, corner_radius, corner_radius, &stroke_paint(stroke));
        }
    }

    fn text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let shaper = self.text;
        shaper.draw(
            self.surface.canvas(),
            text,
            at.x,
            at.y,
            style.anchor,
            style.size,
            color(style.color),
            style.bold,
        );
    }
}

/// Reusable renderer; keeps one font collection for many charts.
pub struct SkiaRenderer {
    text: TextShaper,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    fn draw(&self, chart: &Chart, dataset: &Dataset, opts: &RenderOptions) -> Result<SkiaSurface<'_>> {
        let mut surface = SkiaSurface::new(opts.width, opts.height, &self.text)?;
        let view = chart.render(dataset, opts, &mut surface);
        debug!(title = %chart.title, rows = view.len(), "rasterized chart");
        Ok(surface)
    }

    pub fn render_to_png_bytes(&self, chart: &Chart, dataset: &Dataset, opts: &RenderOptions) -> Result<Vec<u8>> {
        self.draw(chart, dataset, opts)?.encode_png()
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    pub fn render_to_png(
        &self,
        chart: &Chart,
        dataset: &Dataset,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let data = self.render_to_png_bytes(chart, dataset, opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, data)?;
        Ok(())
    }

    pub fn render_to_rgba8(&self, chart: &Chart, dataset: &Dataset, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        self.draw(chart, dataset, opts)?.read_rgba8()
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}
