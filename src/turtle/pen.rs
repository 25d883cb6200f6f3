use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Point, circle_step_count, heading_towards};
use crate::render::Color;

/// Turtle-space output of the pen, in emission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Stroke {
        from: Point,
        to: Point,
        width: f64,
        color: Color,
    },
    Fill {
        points: Vec<Point>,
        color: Color,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct FillPath {
    points: Vec<Point>,
    /// Shape index the polygon is inserted at, beneath strokes drawn while filling.
    insert_at: usize,
}

/// Explicit drawing context: position, heading and fill state travel with
/// the value instead of living in global state.
///
/// Headings are degrees counter-clockwise from east, like a standard-mode
/// turtle. The pen starts at the origin, heading east, pen down.
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    position: Point,
    heading: f64,
    down: bool,
    size: f64,
    pen_color: Color,
    fill_color: Color,
    fill: Option<FillPath>,
    shapes: Vec<Shape>,
}

impl Default for Pen {
    fn default() -> Self {
        Self::new()
    }
}

impl Pen {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Point::new(0.0, 0.0),
            heading: 0.0,
            down: true,
            size: 1.0,
            pen_color: Color::BLACK,
            fill_color: Color::BLACK,
            fill: None,
            shapes: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    #[must_use]
    pub fn heading(&self) -> f64 {
        self.heading
    }

    #[must_use]
    pub fn is_down(&self) -> bool {
        self.down
    }

    #[must_use]
    pub fn pen_size(&self) -> f64 {
        self.size
    }

    #[must_use]
    pub fn pen_color(&self) -> Color {
        self.pen_color
    }

    #[must_use]
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    #[must_use]
    pub fn is_filling(&self) -> bool {
        self.fill.is_some()
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn up(&mut self) {
        self.down = false;
    }

    pub fn down(&mut self) {
        self.down = true;
    }

    pub fn set_pen_size(&mut self, size: f64) {
        self.size = size;
    }

    pub fn set_pen_color(&mut self, color: Color) {
        self.pen_color = color;
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn set_heading(&mut self, heading: f64) {
        self.heading = heading.rem_euclid(360.0);
    }

    pub fn left(&mut self, degrees: f64) {
        self.set_heading(self.heading + degrees);
    }

    pub fn right(&mut self, degrees: f64) {
        self.set_heading(self.heading - degrees);
    }

    /// Heading that would point the pen at `(x, y)`.
    #[must_use]
    pub fn towards(&self, x: f64, y: f64) -> f64 {
        heading_towards(self.position, Point::new(x, y))
    }

    pub fn forward(&mut self, distance: f64) {
        let radians = self.heading.to_radians();
        self.goto(
            self.position.x + distance * radians.cos(),
            self.position.y + distance * radians.sin(),
        );
    }

    /// Moves to `(x, y)`, stroking when the pen is down and extending the
    /// fill path when a fill is open. The heading is unchanged.
    pub fn goto(&mut self, x: f64, y: f64) {
        let target = Point::new(x, y);
        if self.down && self.size > 0.0 && target != self.position {
            self.shapes.push(Shape::Stroke {
                from: self.position,
                to: target,
                width: self.size,
                color: self.pen_color,
            });
        }
        if let Some(fill) = self.fill.as_mut() {
            fill.points.push(target);
        }
        self.position = target;
    }

    pub fn goto_point(&mut self, point: Point) {
        self.goto(point.x, point.y);
    }

    /// Opens a fill path at the current position, discarding any open one.
    pub fn begin_fill(&mut self) {
        self.fill = Some(FillPath {
            points: vec![self.position],
            insert_at: self.shapes.len(),
        });
    }

    /// Closes the fill path. Paths with fewer than three points draw nothing.
    pub fn end_fill(&mut self) {
        let Some(fill) = self.fill.take() else {
            return;
        };
        if fill.points.len() > 2 {
            trace!(vertices = fill.points.len(), "close fill");
            self.shapes.insert(
                fill.insert_at,
                Shape::Fill {
                    points: fill.points,
                    color: self.fill_color,
                },
            );
        }
    }

    /// Approximates a full circle with the center `radius` units to the left
    /// of the heading. The heading is restored afterwards.
    pub fn circle(&mut self, radius: f64) {
        let steps = circle_step_count(radius);
        let mut turn = 360.0 / steps as f64;
        let mut half_turn = turn / 2.0;
        let chord = 2.0 * radius.abs() * half_turn.to_radians().sin();
        if radius < 0.0 {
            turn = -turn;
            half_turn = -half_turn;
        }

        self.left(half_turn);
        for _ in 0..steps {
            self.forward(chord);
            self.left(turn);
        }
        self.right(half_turn);
    }
}
