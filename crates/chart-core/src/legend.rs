// File: crates/chart-core/src/legend.rs
// Summary: Legend items (one per series, descriptor order) laid out as a centred row.

use crate::color::Rgba;
use crate::geometry::{estimate_text_width, Point};
use crate::series::Series;

const SWATCH: f32 = 14.0;
const SWATCH_GAP: f32 = 4.0;
const ITEM_GAP: f32 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    pub name: String,
    pub color: Rgba,
    /// Left edge of the swatch.
    pub origin: Point,
}

impl LegendItem {
    pub const SWATCH: f32 = SWATCH;

    /// Baseline origin for the item's label.
    pub fn text_origin(&self, font_size: f32) -> Point {
        Point::new(self.origin.x + SWATCH + SWATCH_GAP, self.origin.y + font_size * 0.35)
    }
}

/// Lay out legend items centred on `center_x`, vertically centred on `y`.
pub fn layout(series: &[Series], center_x: f32, y: f32, font_size: f32) -> Vec<LegendItem> {
    let widths: Vec<f32> = series
        .iter()
        .map(|s| SWATCH + SWATCH_GAP + estimate_text_width(&s.name, font_size))
        .collect();
    let total = widths.iter().sum::<f32>() + ITEM_GAP * widths.len().saturating_sub(1) as f32;
    let mut x = center_x - total * 0.5;
    series
        .iter()
        .zip(widths)
        .map(|(s, w)| {
            let item = LegendItem { name: s.name.clone(), color: s.color, origin: Point::new(x, y) };
            x += w + ITEM_GAP;
            item
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_descriptor_order_left_to_right() {
        let series = vec![Series::new("AccelerationX", "X-Axis"), Series::new("AccelerationY", "Y-Axis"), Series::new("AccelerationZ", "Z-Axis")];
        let items = layout(&series, 300.0, 10.0, 14.0);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["X-Axis", "Y-Axis", "Z-Axis"]);
        assert!(items.windows(2).all(|w| w[0].origin.x < w[1].origin.x));
        let last = items.last().unwrap();
        let right = last.text_origin(14.0).x + estimate_text_width(&last.name, 14.0);
        assert!(((items[0].origin.x + right) * 0.5 - 300.0).abs() < 1e-3);
    }
}
