use crate::core::{DataPoint, LinearScale, PlotArea};
use crate::error::ChartResult;
use serde::{Deserialize, Serialize};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Projects points into pixel space inside `area`.
pub fn project_points(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
    area: PlotArea,
) -> ChartResult<Vec<(f64, f64)>> {
    let mut mapped = Vec::with_capacity(points.len());
    for point in points {
        let x = x_scale.domain_to_pixel(point.x, area.x_span())?;
        let y = y_scale.domain_to_pixel(point.y, area.y_span())?;
        mapped.push((x, y));
    }
    Ok(mapped)
}

/// Projects line-series points into adjacent line segments.
///
/// The function is deterministic and side-effect free so both rendering and
/// tests can consume the exact same geometry output.
pub fn project_line_segments(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
    area: PlotArea,
) -> ChartResult<Vec<LineSegment>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    let mapped = project_points(points, x_scale, y_scale, area)?;
    Ok(mapped
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].0,
            y1: pair[0].1,
            x2: pair[1].0,
            y2: pair[1].1,
        })
        .collect())
}
