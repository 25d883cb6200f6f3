pub const AXIS_X_TARGET_SPACING_PX: f64 = 110.0;
pub const AXIS_Y_TARGET_SPACING_PX: f64 = 70.0;

const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

pub fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}

/// Picks a 1/2/2.5/5 x 10^n step so roughly `tick_count` ticks cover `range`.
#[must_use]
pub fn nice_step(range: (f64, f64), tick_count: usize) -> f64 {
    let span = (range.1 - range.0).abs();
    if !span.is_finite() || span == 0.0 {
        return 0.0;
    }

    let intervals = tick_count.saturating_sub(1).max(1) as f64;
    let raw = span / intervals;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = NICE_STEPS
        .iter()
        .copied()
        .find(|candidate| *candidate >= residual - 1e-9)
        .unwrap_or(10.0);
    nice * magnitude
}

/// Multiples of `nice_step` inside `range`, ascending.
#[must_use]
pub fn nice_ticks(range: (f64, f64), tick_count: usize) -> Vec<f64> {
    let (low, high) = if range.0 <= range.1 {
        range
    } else {
        (range.1, range.0)
    };
    let step = nice_step((low, high), tick_count);
    if step <= 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let tolerance = step * 1e-9;
    let first = (low / step - 1e-9).ceil() as i64;
    let last = (high / step + 1e-9).floor() as i64;
    (first..=last)
        .map(|index| index as f64 * step)
        .filter(|value| *value >= low - tolerance && *value <= high + tolerance)
        .map(|value| if value == 0.0 { 0.0 } else { value })
        .collect()
}

/// Formats a tick label with just enough decimals to distinguish `step`.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        let mut decimals = (-step.log10()).ceil() as usize;
        let scaled = step * 10f64.powi(decimals as i32);
        if (scaled - scaled.round()).abs() > 1e-6 {
            decimals += 1;
        }
        decimals.min(10)
    } else if (step - step.round()).abs() > 1e-9 {
        1
    } else {
        0
    };

    let formatted = format!("{value:.decimals$}");
    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_owned()
    } else {
        formatted
    }
}
