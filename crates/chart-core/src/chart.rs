// File: crates/chart-core/src/chart.rs
// Summary: Chart descriptor and the pure derivation/drawing pipeline (view -> Surface), plus SVG output.

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::axis::Axis;
use crate::error::ChartError;
use crate::format::{display_records, TimeFormatter, INVALID_DATE};
use crate::geometry::{Point, Rect};
use crate::legend::{self, LegendItem};
use crate::record::Dataset;
use crate::scale::{PointScale, ValueScale};
use crate::series::Series;
use crate::surface::{Anchor, Stroke, Surface, TextStyle};
use crate::svg::SvgSurface;
use crate::theme::Theme;
use crate::tooltip::{Tooltip, TOOLTIP_FONT_SIZE};
use crate::types::{
    Insets, FONT_SIZE, HEIGHT, LEGEND_BAND, LEGEND_FONT_SIZE, TITLE_BAND, TITLE_FONT_SIZE, WIDTH,
    X_AXIS_BAND, Y_AXIS_BAND,
};
use crate::view::y_domain;

const LINE_WIDTH: f32 = 2.0;
const DOT_RADIUS: f32 = 3.0;
const ACTIVE_DOT_RADIUS: f32 = 6.0;
const TICK_SIZE: f32 = 6.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Offset used for the `HH:MM:SS` time labels.
    pub time: TimeFormatter,
    /// Text on/off; pixel snapshots turn it off to avoid font variance.
    pub draw_labels: bool,
    /// Dot marker on every present value. Isolated values always get one.
    pub dots: bool,
    /// Slot rendered in the hovered state (cursor, active dots, tooltip box).
    pub focus: Option<usize>,
    /// Per-slot hover regions carrying tooltip text (SVG only).
    pub hover_regions: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            time: TimeFormatter::utc(),
            draw_labels: true,
            dots: true,
            focus: None,
            hover_regions: false,
        }
    }
}

/// A titled set of series plotted against one time field. A single-series
/// chart is simply a chart with one series.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub title: String,
    pub x_key: String,
    pub series: Vec<Series>,
}

impl Chart {
    pub fn new(title: impl Into<String>, x_key: impl Into<String>) -> Self {
        Self { title: title.into(), x_key: x_key.into(), series: Vec::new() }
    }

    /// One-series chart; the series is named after the chart title.
    pub fn single(
        title: impl Into<String>,
        x_key: impl Into<String>,
        y_key: impl Into<String>,
        color: &str,
        unit: &str,
    ) -> Result<Self, ChartError> {
        let title = title.into();
        let series = Series::new(y_key, title.clone()).with_hex(color)?.with_unit(unit);
        Ok(Self::new(title, x_key).with_series(series))
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.add_series(series);
        self
    }

    /// Unit shown on the y axis: only for a one-series chart that has a unit.
    pub fn axis_unit(&self) -> Option<&str> {
        match self.series.as_slice() {
            [only] => only.unit(),
            _ => None,
        }
    }

    /// Derive everything needed to draw this chart from `dataset`. Pure: the
    /// same inputs always give an equal view.
    pub fn view(&self, dataset: &Dataset, opts: &RenderOptions) -> ChartView {
        let mut labels = Vec::with_capacity(dataset.len());
        let mut columns: Vec<Vec<Option<f64>>> =
            self.series.iter().map(|_| Vec::with_capacity(dataset.len())).collect();
        for row in display_records(dataset, &self.x_key, opts.time) {
            for (column, s) in columns.iter_mut().zip(&self.series) {
                column.push(row.number(&s.key));
            }
            labels.push(row.time_label);
        }
        let invalid = labels.iter().filter(|l| l.as_str() == INVALID_DATE).count();
        if invalid > 0 {
            trace!(title = %self.title, invalid, "records with unparseable timestamps");
        }

        let outer = Rect::from_ltrb(
            opts.insets.left as f32,
            opts.insets.top as f32,
            (opts.width - opts.insets.right as i32) as f32,
            (opts.height - opts.insets.bottom as i32) as f32,
        );
        let plot = Rect::from_ltrb(
            outer.left + Y_AXIS_BAND as f32,
            outer.top + TITLE_BAND as f32,
            outer.right,
            (outer.bottom - (LEGEND_BAND + X_AXIS_BAND) as f32).max(outer.top + TITLE_BAND as f32 + 1.0),
        );

        let (y_min, y_max) = y_domain(&columns);
        let x_scale = PointScale::new(plot.left, plot.right, labels.len());
        let x_axis = Axis::time(&labels, &x_scale, FONT_SIZE);
        let (y_axis, y_scale) = Axis::value(y_min, y_max, plot.top, plot.bottom, self.axis_unit());

        let lines = self
            .series
            .iter()
            .zip(&columns)
            .map(|(s, column)| SeriesLine {
                color: s.color,
                points: column
                    .iter()
                    .enumerate()
                    .map(|(i, v)| v.map(|v| Point::new(x_scale.to_px(i), y_scale.to_px(v))))
                    .collect(),
            })
            .collect();

        let legend = legend::layout(
            &self.series,
            (plot.left + plot.right) * 0.5,
            outer.bottom - LEGEND_BAND as f32 * 0.5,
            LEGEND_FONT_SIZE,
        );

        debug!(title = %self.title, rows = labels.len(), series = self.series.len(), y_min = y_axis.min, y_max = y_axis.max, "chart view");

        ChartView {
            title: self.title.clone(),
            series: self.series.clone(),
            outer,
            plot,
            labels,
            columns,
            x_scale,
            y_scale,
            x_axis,
            y_axis,
            lines,
            legend,
            options: opts.clone(),
        }
    }

    /// Derive the view and draw it onto `surface`.
    pub fn render(&self, dataset: &Dataset, opts: &RenderOptions, surface: &mut dyn Surface) -> ChartView {
        let view = self.view(dataset, opts);
        view.draw(surface);
        view
    }

    pub fn render_to_svg_string(&self, dataset: &Dataset, opts: &RenderOptions) -> String {
        let mut surface = SvgSurface::new(opts.width, opts.height);
        self.render(dataset, opts, &mut surface);
        surface.finish()
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(
        &self,
        dataset: &Dataset,
        opts: &RenderOptions,
        output_svg_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let path = output_svg_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render_to_svg_string(dataset, opts))
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

/// One series in pixel space; `None` marks a gap.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesLine {
    pub color: crate::color::Rgba,
    pub points: Vec<Option<Point>>,
}

impl SeriesLine {
    /// Maximal runs of consecutive present points. A gap always splits the line.
    pub fn segments(&self) -> Vec<Vec<Point>> {
        self.points
            .split(Option::is_none)
            .filter(|run| !run.is_empty())
            .map(|run| run.iter().flatten().copied().collect())
            .collect()
    }
}

/// Everything derived for one chart render; drawing only reads from it.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartView {
    pub title: String,
    pub series: Vec<Series>,
    pub outer: Rect,
    pub plot: Rect,
    /// Time label per record slot.
    pub labels: Vec<String>,
    /// Per series, the numeric value at each slot.
    pub columns: Vec<Vec<Option<f64>>>,
    pub x_scale: PointScale,
    pub y_scale: ValueScale,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub lines: Vec<SeriesLine>,
    pub legend: Vec<LegendItem>,
    pub options: RenderOptions,
}

impl ChartView {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Record slot under a pointer position, if the pointer is over the plot.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        if !self.plot.contains(x, y) {
            return None;
        }
        self.x_scale.nearest(x)
    }

    pub fn tooltip(&self, index: usize) -> Option<Tooltip> {
        let label = self.labels.get(index)?;
        let values: Vec<Option<f64>> = self.columns.iter().map(|c| c[index]).collect();
        Some(Tooltip::build(index, label, &self.series, &values))
    }

    /// Tooltip for a pointer position; combines [`hit_test`](Self::hit_test) and
    /// [`tooltip`](Self::tooltip).
    pub fn tooltip_at(&self, x: f32, y: f32) -> Option<Tooltip> {
        self.hit_test(x, y).and_then(|i| self.tooltip(i))
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(self.options.theme.background);
        self.draw_title(surface);
        self.draw_grid(surface);
        self.draw_axes(surface);
        self.draw_series(surface);
        self.draw_legend(surface);
        if let Some(index) = self.options.focus {
            self.draw_focus(surface, index);
        }
        if self.options.hover_regions {
            self.draw_hover_regions(surface);
        }
    }

    fn draw_title(&self, surface: &mut dyn Surface) {
        if !self.options.draw_labels {
            return;
        }
        let style = TextStyle::new(TITLE_FONT_SIZE, self.options.theme.title).bold();
        surface.text(&self.title, Point::new(self.outer.left, self.outer.top + TITLE_FONT_SIZE), &style);
    }

    fn draw_grid(&self, surface: &mut dyn Surface) {
        let theme = &self.options.theme;
        let stroke = Stroke::dashed(theme.grid, 1.0, theme.grid_dash);
        let p = &self.plot;
        for t in &self.y_axis.ticks {
            surface.line(Point::new(p.left, t.pos), Point::new(p.right, t.pos), &stroke);
        }
        for t in &self.x_axis.ticks {
            surface.line(Point::new(t.pos, p.top), Point::new(t.pos, p.bottom), &stroke);
        }
    }

    /// Axis lines, tick marks and tick labels.
    pub fn draw_axes(&self, surface: &mut dyn Surface) {
        let theme = &self.options.theme;
        let stroke = Stroke::solid(theme.axis_line, 1.0);
        let p = &self.plot;
        surface.line(Point::new(p.left, p.bottom), Point::new(p.right, p.bottom), &stroke);
        surface.line(Point::new(p.left, p.top), Point::new(p.left, p.bottom), &stroke);

        let x_style = TextStyle::new(FONT_SIZE, theme.tick).anchored(Anchor::Middle);
        for t in &self.x_axis.ticks {
            surface.line(Point::new(t.pos, p.bottom), Point::new(t.pos, p.bottom + TICK_SIZE), &stroke);
            if self.options.draw_labels {
                surface.text(&t.label, Point::new(t.pos, p.bottom + TICK_SIZE + FONT_SIZE + 2.0), &x_style);
            }
        }
        let y_style = TextStyle::new(FONT_SIZE, theme.tick).anchored(Anchor::End);
        for t in &self.y_axis.ticks {
            surface.line(Point::new(p.left - TICK_SIZE, t.pos), Point::new(p.left, t.pos), &stroke);
            if self.options.draw_labels {
                surface.text(&t.label, Point::new(p.left - TICK_SIZE - 2.0, t.pos + FONT_SIZE * 0.35), &y_style);
            }
        }
    }

    /// One polyline per contiguous run, plus dot markers.
    pub fn draw_series(&self, surface: &mut dyn Surface) {
        let dot_fill = self.options.theme.dot_fill;
        for line in &self.lines {
            let stroke = Stroke::solid(line.color, LINE_WIDTH);
            for segment in line.segments() {
                if segment.len() > 1 {
                    surface.polyline(&segment, &stroke);
                }
                if self.options.dots || segment.len() == 1 {
                    for p in &segment {
                        surface.circle(*p, DOT_RADIUS, dot_fill, Some(&stroke));
                    }
                }
            }
        }
    }

    pub fn draw_legend(&self, surface: &mut dyn Surface) {
        let text = TextStyle::new(LEGEND_FONT_SIZE, self.options.theme.legend_text);
        for item in &self.legend {
            let s = LegendItem::SWATCH;
            let swatch = Rect::from_ltwh(item.origin.x, item.origin.y - s * 0.5, s, s);
            surface.rect(swatch, 2.0, Some(item.color), None);
            if self.options.draw_labels {
                surface.text(&item.name, item.text_origin(LEGEND_FONT_SIZE), &text);
            }
        }
    }

    fn draw_focus(&self, surface: &mut dyn Surface, index: usize) {
        let Some(tooltip) = self.tooltip(index) else {
            return;
        };
        let theme = &self.options.theme;
        let x = self.x_scale.to_px(index);
        let p = &self.plot;
        surface.line(Point::new(x, p.top), Point::new(x, p.bottom), &Stroke::solid(theme.cursor, 1.0));

        let ring = Stroke::solid(theme.background, 2.0);
        for line in &self.lines {
            if let Some(Some(pt)) = line.points.get(index) {
                surface.circle(*pt, ACTIVE_DOT_RADIUS, line.color, Some(&ring));
            }
        }

        let rect = tooltip.layout(x, *p);
        surface.rect(rect, 8.0, Some(theme.tooltip_background), Some(&Stroke::solid(theme.tooltip_border, 1.0)));
        if self.options.draw_labels {
            let style = TextStyle::new(TOOLTIP_FONT_SIZE, theme.tooltip_text);
            surface.text(&tooltip.label, Tooltip::line_origin(&rect, 0), &style);
            for (i, entry) in tooltip.entries.iter().enumerate() {
                let style = TextStyle::new(TOOLTIP_FONT_SIZE, entry.color);
                surface.text(&entry.text(), Tooltip::line_origin(&rect, i + 1), &style);
            }
        }
    }

    fn draw_hover_regions(&self, surface: &mut dyn Surface) {
        let half = self.x_scale.step() * 0.5;
        let p = &self.plot;
        for index in 0..self.len() {
            let Some(tooltip) = self.tooltip(index) else { continue };
            let x = self.x_scale.to_px(index);
            let rect = Rect::from_ltrb((x - half).max(p.left), p.top, (x + half).min(p.right), p.bottom);
            surface.hover_region(rect, &tooltip.lines());
        }
    }
}
