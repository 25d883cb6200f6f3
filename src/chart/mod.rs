//! Chart builders turning a filtered subset into ready-to-render figures.

pub mod bar_line;
pub mod figure;
pub mod scatter;

pub use bar_line::{BarLineChartOptions, build_bar_line_figure};
pub use figure::{ChartLabels, Figure, FigureCanvas, FigureStyle, LegendSwatch, cycle_color};
pub use scatter::{ScatterChartOptions, ScatterPresentation, build_scatter_figures};

pub const COMPARISON_TITLE: &str = "Ghana and Ivory Coast cocoa production Comparison";
