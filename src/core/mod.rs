pub mod bar_series;
pub mod geometry;
pub mod line_series;
pub mod scale;
pub mod ticks;
pub mod types;

pub use bar_series::{BarGeometry, project_bars};
pub use geometry::{Point, circle_step_count, heading_towards, sample_ellipse, spear_head};
pub use line_series::{LineSegment, project_line_segments, project_points};
pub use scale::LinearScale;
pub use types::{DataPoint, PlotArea, Viewport};
