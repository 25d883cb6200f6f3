//! chart-sketch: FAOSTAT cocoa comparison charts and a pen-drawn Kenyan flag.
//!
//! Both pipelines end in a backend-agnostic `RenderFrame`. Data loading,
//! layout and drawing stay separate from the Cairo and GTK backends, which
//! are opt-in features.

pub mod chart;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod turtle;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use config::{CocoaChartConfig, FlagConfig, load_json_config};
pub use error::{ChartError, ChartResult};
