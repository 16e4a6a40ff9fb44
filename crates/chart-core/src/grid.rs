// File: crates/chart-core/src/grid.rs
// Summary: "Nice" value ticks for the y axis (1/2/2.5/5 steps) and their label precision.

/// Round a raw step up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Upper bound on generated ticks; anything past it falls back to the bare range.
pub const MAX_TICKS: usize = 1000;

/// Tick values covering `[min, max]`, aligned to a nice step, roughly `count` of them.
/// Returns `(ticks, step)`; the first and last tick bound the input range.
pub fn nice_ticks(min: f64, max: f64, count: usize) -> (Vec<f64>, f64) {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    if !(min.is_finite() && max.is_finite()) {
        return (vec![0.0, 1.0], 1.0);
    }
    let intervals = count.max(2) - 1;
    // Halves keep the span finite for ranges wider than f64::MAX.
    let step = nice_step((max * 0.5 - min * 0.5) / intervals as f64 * 2.0);
    let first = (min / step).floor();
    let last = (max / step).ceil();
    let n = last - first;
    if !n.is_finite() || n > MAX_TICKS as f64 {
        return (vec![min, max], max * 0.5 - min * 0.5);
    }
    let ticks = (0..=(n as usize).max(1))
        .map(|i| ((first + i as f64) * step).clamp(f64::MIN, f64::MAX))
        .collect();
    (ticks, step)
}

/// Decimal places needed to print multiples of `step` without noise.
pub fn step_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return if step.fract().abs() > 1e-9 { 1 } else { 0 };
    }
    let mut decimals = 0;
    let mut scaled = step;
    while decimals < 10 && (scaled - scaled.round()).abs() > 1e-9 {
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}
