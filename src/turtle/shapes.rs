use crate::core::{Point, sample_ellipse, spear_head};
use crate::render::Color;
use crate::turtle::Pen;

pub const ELLIPSE_STEPS: usize = 120;
pub const SPEAR_HEAD_LENGTH: f64 = 25.0;
pub const SPEAR_HEAD_HALF_ANGLE_DEG: f64 = 15.0;
pub const SPEAR_SHAFT_WIDTH: f64 = 6.0;

/// Filled `width` x `height` rectangle centered on `(cx, cy)`, traced
/// counter-clockwise from its lower-left corner.
pub fn draw_rect_center(pen: &mut Pen, cx: f64, cy: f64, width: f64, height: f64, color: Color) {
    pen.up();
    pen.goto(cx - width / 2.0, cy - height / 2.0);
    pen.set_heading(0.0);
    pen.down();
    pen.set_fill_color(color);
    pen.begin_fill();
    for _ in 0..2 {
        pen.forward(width);
        pen.left(90.0);
        pen.forward(height);
        pen.left(90.0);
    }
    pen.end_fill();
    pen.up();
}

/// Filled ellipse with horizontal radius `a` and vertical radius `b`,
/// approximated by `ELLIPSE_STEPS` segments.
pub fn draw_ellipse(
    pen: &mut Pen,
    cx: f64,
    cy: f64,
    a: f64,
    b: f64,
    color: Color,
    pen_width: f64,
) {
    pen.up();
    let points = sample_ellipse(Point::new(cx, cy), a, b, ELLIPSE_STEPS);
    let Some(first) = points.first().copied() else {
        return;
    };
    pen.goto_point(first);
    pen.down();
    pen.set_pen_size(pen_width);
    pen.set_fill_color(color);
    pen.begin_fill();
    for point in &points {
        pen.goto_point(*point);
    }
    pen.end_fill();
    pen.up();
}

/// Shaft from `(x1, y1)` to `(x2, y2)` with a filled triangular head at the
/// far end. Leaves the pen up at size 1, keeping `color` as pen color.
pub fn draw_spear(pen: &mut Pen, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) {
    pen.up();
    pen.goto(x1, y1);
    pen.down();
    pen.set_pen_size(SPEAR_SHAFT_WIDTH);
    pen.set_pen_color(color);
    let heading = pen.towards(x2, y2);
    pen.set_heading(heading);
    pen.goto(x2, y2);

    let [tip, left, right] = spear_head(
        Point::new(x2, y2),
        pen.heading(),
        SPEAR_HEAD_LENGTH,
        SPEAR_HEAD_HALF_ANGLE_DEG,
    );
    pen.up();
    pen.goto_point(tip);
    pen.down();
    pen.set_fill_color(color);
    pen.begin_fill();
    pen.goto_point(left);
    pen.goto_point(right);
    pen.goto_point(tip);
    pen.end_fill();
    pen.up();
    pen.set_pen_size(1.0);
}

/// Filled turtle circle of `radius` started at `(x, y)`; the center lies to
/// the left of the current heading.
pub fn draw_dot(pen: &mut Pen, x: f64, y: f64, radius: f64, color: Color) {
    pen.up();
    pen.goto(x, y);
    pen.down();
    pen.set_fill_color(color);
    pen.begin_fill();
    pen.circle(radius);
    pen.end_fill();
    pen.up();
}

/// Filled strip traced by pen moves: down `length` from `(x, y)`, turn
/// right, across `width`, turn right, back up `length`.
pub fn draw_traced_strip(pen: &mut Pen, x: f64, y: f64, length: f64, width: f64, color: Color) {
    pen.up();
    pen.goto(x, y);
    pen.down();
    pen.set_fill_color(color);
    pen.begin_fill();
    pen.set_heading(270.0);
    pen.forward(length);
    pen.right(90.0);
    pen.forward(width);
    pen.right(90.0);
    pen.forward(length);
    pen.end_fill();
    pen.up();
}
