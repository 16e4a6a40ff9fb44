// File: crates/chart-core/src/view.rs
// Y domain: the value range a chart needs to show every present value.

/// Min/max over every present value of every column. Falls back to `[0, 1]`
/// when nothing is numeric; a flat range is padded around its value.
pub fn y_domain(columns: &[Vec<Option<f64>>]) -> (f64, f64) {
    let Some((lo, hi)) = value_range(columns) else {
        return (0.0, 1.0);
    };
    if hi - lo < 1e-9 {
        let pad = (lo.abs() * 0.1).max(1.0);
        ((lo - pad).max(f64::MIN), (hi + pad).min(f64::MAX))
    } else {
        (lo, hi)
    }
}

pub fn value_range(columns: &[Vec<Option<f64>>]) -> Option<(f64, f64)> {
    columns
        .iter()
        .flat_map(|column| column.iter().flatten().copied())
        .fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((f64::min(lo, y), f64::max(hi, y))),
        })
}
