use crate::core::{DataPoint, LinearScale, PlotArea};
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Deterministic vertical bar geometry in pixel coordinates.
///
/// `(x, top)` is the upper-left corner; `height` is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Projects points into bars rising (or hanging) from `baseline`.
///
/// `bar_width` is expressed in x-domain units and centered on each point.
pub fn project_bars(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
    area: PlotArea,
    bar_width: f64,
    baseline: f64,
) -> ChartResult<Vec<BarGeometry>> {
    if !bar_width.is_finite() || bar_width <= 0.0 {
        return Err(ChartError::InvalidData(
            "bar width must be finite and > 0".to_owned(),
        ));
    }

    let half = bar_width * 0.5;
    let base_y = y_scale.domain_to_pixel(baseline, area.y_span())?;
    let mut projected = Vec::with_capacity(points.len());
    for point in points {
        let left = x_scale.domain_to_pixel(point.x - half, area.x_span())?;
        let right = x_scale.domain_to_pixel(point.x + half, area.x_span())?;
        let value_y = y_scale.domain_to_pixel(point.y, area.y_span())?;

        projected.push(BarGeometry {
            x: left.min(right),
            top: value_y.min(base_y),
            width: (right - left).abs(),
            height: (base_y - value_y).abs(),
        });
    }

    Ok(projected)
}
