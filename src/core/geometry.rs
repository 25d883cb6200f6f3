//! Pure turtle-space geometry: y grows upward and headings are degrees
//! counter-clockwise from east.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Samples the parametric ellipse `(cx + a cos t, cy + b sin t)`.
///
/// Returns `steps + 1` points; the last repeats the first so the outline closes.
#[must_use]
pub fn sample_ellipse(center: Point, a: f64, b: f64, steps: usize) -> Vec<Point> {
    (0..=steps)
        .map(|index| {
            let theta = TAU * index as f64 / steps.max(1) as f64;
            Point::new(center.x + a * theta.cos(), center.y + b * theta.sin())
        })
        .collect()
}

/// Heading in `[0, 360)` degrees pointing from `from` to `to`.
#[must_use]
pub fn heading_towards(from: Point, to: Point) -> f64 {
    (to.y - from.y)
        .atan2(to.x - from.x)
        .to_degrees()
        .rem_euclid(360.0)
}

/// Triangle `[tip, left, right]` for an arrowhead pointing along `heading_deg`.
///
/// The base corners sit `head_len` behind the tip, rotated by
/// `-half_angle_deg` and `+half_angle_deg` around the heading.
#[must_use]
pub fn spear_head(tip: Point, heading_deg: f64, head_len: f64, half_angle_deg: f64) -> [Point; 3] {
    let heading = heading_deg.to_radians();
    let half_angle = half_angle_deg.to_radians();
    let left = Point::new(
        tip.x - head_len * (heading - half_angle).cos(),
        tip.y - head_len * (heading - half_angle).sin(),
    );
    let right = Point::new(
        tip.x - head_len * (heading + half_angle).cos(),
        tip.y - head_len * (heading + half_angle).sin(),
    );
    [tip, left, right]
}

/// Segment count a turtle uses to approximate a full circle of `radius`.
#[must_use]
pub fn circle_step_count(radius: f64) -> usize {
    1 + (11.0 + radius.abs() / 6.0).min(59.0) as usize
}
