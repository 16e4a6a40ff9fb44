// File: crates/chart-core/src/scale.rs
// Summary: Category (X, one slot per record) and Value (Y) scale transforms.

/// Value Y coordinate (e.g. volts).
pub type Value = f64;

/// Horizontal point scale over record indices: index 0 at the left edge, the
/// last index at the right edge. A single slot is centred.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl PointScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    /// Pixel distance between neighbouring slots (the full width for 0 or 1 slots).
    #[inline]
    pub fn step(&self) -> f32 {
        let span = self.right_px - self.left_px;
        if self.count < 2 { span } else { span / (self.count - 1) as f32 }
    }

    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        if self.count < 2 {
            return (self.left_px + self.right_px) * 0.5;
        }
        self.left_px + index as f32 * self.step()
    }

    /// Nearest slot to a pixel column; `None` when there are no slots.
    pub fn nearest(&self, px: f32) -> Option<usize> {
        match self.count {
            0 => None,
            1 => Some(0),
            n => {
                let raw = ((px - self.left_px) / self.step()).round();
                Some(raw.clamp(0.0, (n - 1) as f32) as usize)
            }
        }
    }
}

/// Vertical linear scale mapping a value range to [top, bottom] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, y: Value) -> f32 {
        // Halved operands: same ratio, no overflow near f64::MAX.
        let half_span = (self.vmax * 0.5 - self.vmin * 0.5).max(1e-12);
        self.bottom_px - ((y * 0.5 - self.vmin * 0.5) / half_span) as f32 * (self.bottom_px - self.top_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_scale_spans_edges() {
        let s = PointScale::new(100.0, 500.0, 5);
        assert_eq!(s.to_px(0), 100.0);
        assert_eq!(s.to_px(4), 500.0);
        assert_eq!(s.nearest(240.0), Some(1));
        assert_eq!(s.nearest(-50.0), Some(0));
        assert_eq!(s.nearest(9000.0), Some(4));
    }

    #[test]
    fn single_slot_is_centred() {
        let s = PointScale::new(100.0, 500.0, 1);
        assert_eq!(s.to_px(0), 300.0);
        assert_eq!(s.nearest(120.0), Some(0));
        assert_eq!(PointScale::new(0.0, 1.0, 0).nearest(0.5), None);
    }

    #[test]
    fn value_scale_maps_range_to_pixels() {
        let s = ValueScale::new_linear(10.0, 210.0, 0.0, 100.0);
        assert_eq!(s.to_px(0.0), 210.0);
        assert_eq!(s.to_px(100.0), 10.0);
        assert_eq!(s.to_px(50.0), 110.0);
    }

    #[test]
    fn value_scale_survives_span_beyond_f64_max() {
        let s = ValueScale::new_linear(0.0, 100.0, -1e308, 1e308);
        assert_eq!(s.to_px(0.0), 50.0);
        assert_eq!(s.to_px(1e308), 0.0);
    }
}
