// File: crates/chart-core/src/axis.rs
// Summary: Axis model with tick positions and labels (time categories on X, nice values on Y).

use crate::geometry::estimate_text_width;
use crate::grid::{nice_ticks, step_decimals};
use crate::scale::{PointScale, ValueScale};

/// Minimum horizontal gap between neighbouring x tick labels.
const X_LABEL_GAP: f32 = 8.0;
/// Target number of y ticks.
const Y_TICK_COUNT: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Pixel position along the axis (x for the time axis, y for the value axis).
    pub pos: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Time axis: one slot per label, thinned so labels do not overlap. The last
    /// label is always kept.
    pub fn time(labels: &[String], scale: &PointScale, font_size: f32) -> Self {
        let n = labels.len();
        let widest = labels
            .iter()
            .map(|l| estimate_text_width(l, font_size))
            .fold(0.0f32, f32::max);
        let every = if n < 2 {
            1
        } else {
            ((widest + X_LABEL_GAP) / scale.step().max(1e-3)).ceil().max(1.0) as usize
        };
        let ticks = labels
            .iter()
            .enumerate()
            .filter(|(i, _)| (n - 1 - i) % every == 0)
            .map(|(i, label)| Tick { pos: scale.to_px(i), label: label.clone() })
            .collect();
        Self { min: 0.0, max: n.saturating_sub(1) as f64, ticks }
    }

    /// Value axis over `[lo, hi]`, widened to nice tick boundaries. `unit` is
    /// appended to every tick label.
    pub fn value(lo: f64, hi: f64, top_px: f32, bottom_px: f32, unit: Option<&str>) -> (Self, ValueScale) {
        let (values, step) = nice_ticks(lo, hi, Y_TICK_COUNT);
        let min = values.first().copied().unwrap_or(lo);
        let max = values.last().copied().unwrap_or(hi);
        let scale = ValueScale::new_linear(top_px, bottom_px, min, max);
        let decimals = step_decimals(step);
        let ticks = values
            .iter()
            .map(|&v| Tick { pos: scale.to_px(v), label: tick_label(v, decimals, unit) })
            .collect();
        (Self { min, max, ticks }, scale)
    }
}

fn tick_label(v: f64, decimals: usize, unit: Option<&str>) -> String {
    // avoid "-0"
    let v = if v.abs() < 1e-12 { 0.0 } else { v };
    format!("{:.*}{}", decimals, v, unit.unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_labels_all_shown() {
        let labels: Vec<String> = ["10:00:00", "10:00:01", "10:00:02"].iter().map(|s| s.to_string()).collect();
        let axis = Axis::time(&labels, &PointScale::new(0.0, 400.0, 3), 12.0);
        assert_eq!(axis.ticks.len(), 3);
        assert_eq!(axis.ticks[2].pos, 400.0);
    }

    #[test]
    fn dense_labels_thinned_keeping_last() {
        let labels: Vec<String> = (0..100).map(|i| format!("10:{:02}:{:02}", i / 60, i % 60)).collect();
        let axis = Axis::time(&labels, &PointScale::new(0.0, 495.0, 100), 12.0);
        assert!(axis.ticks.len() < 20);
        assert_eq!(axis.ticks.last().map(|t| t.label.as_str()), Some("10:01:39"));
        for pair in axis.ticks.windows(2) {
            assert!(pair[1].pos - pair[0].pos >= estimate_text_width("10:00:00", 12.0));
        }
    }

    #[test]
    fn value_ticks_carry_unit() {
        let (axis, scale) = Axis::value(81.2, 97.9, 0.0, 200.0, Some("%"));
        let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["80%", "85%", "90%", "95%", "100%"]);
        assert_eq!(scale.to_px(80.0), 200.0);
        assert_eq!(scale.to_px(100.0), 0.0);
    }

    #[test]
    fn fractional_steps_print_decimals() {
        let (axis, _) = Axis::value(3.61, 3.64, 0.0, 100.0, None);
        assert!(axis.ticks.iter().all(|t| t.label.contains('.')));
    }
}
