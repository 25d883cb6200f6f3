use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Figure size in inches at `dpi`, rounded to whole pixels.
    pub fn from_inches(width_in: f64, height_in: f64, dpi: f64) -> ChartResult<Self> {
        let to_px = |inches: f64| -> ChartResult<u32> {
            let px = (inches * dpi).round();
            if !px.is_finite() || px < 1.0 || px > f64::from(u16::MAX) {
                return Err(ChartError::InvalidData(format!(
                    "figure size {inches}in at {dpi} dpi is out of range"
                )));
            }
            Ok(px as u32)
        };
        Ok(Self::new(to_px(width_in)?, to_px(height_in)?))
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pixel rectangle occupied by the axes of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Insets `viewport` by fractional margins, matplotlib subplot style.
    pub fn inset(
        viewport: Viewport,
        left_ratio: f64,
        right_ratio: f64,
        top_ratio: f64,
        bottom_ratio: f64,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let area = Self {
            left: width * left_ratio,
            top: height * top_ratio,
            width: width * (1.0 - left_ratio - right_ratio),
            height: height * (1.0 - top_ratio - bottom_ratio),
        };
        if !area.width.is_finite()
            || !area.height.is_finite()
            || area.width <= 0.0
            || area.height <= 0.0
        {
            return Err(ChartError::InvalidData(
                "plot margins leave no drawable area".to_owned(),
            ));
        }
        Ok(area)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    /// Horizontal pixel span, left to right.
    #[must_use]
    pub fn x_span(self) -> (f64, f64) {
        (self.left, self.right())
    }

    /// Vertical pixel span, bottom to top, so larger values sit higher.
    #[must_use]
    pub fn y_span(self) -> (f64, f64) {
        (self.bottom(), self.top)
    }
}
