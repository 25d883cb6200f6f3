use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Fallback domain for axes without data, matching an empty matplotlib axes.
pub const EMPTY_DOMAIN: (f64, f64) = (0.0, 1.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Fits the finite `values` and pads both ends by `margin_ratio` of the span.
    ///
    /// No finite values yields `EMPTY_DOMAIN`. A single distinct value is
    /// widened by 5% of its magnitude (or 0.05 around zero) before padding.
    pub fn fit<I>(values: I, margin_ratio: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        if !margin_ratio.is_finite() || margin_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "scale margin ratio must be finite and >= 0".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values.into_iter().filter(|value| value.is_finite()) {
            min = min.min(value);
            max = max.max(value);
        }

        if !min.is_finite() || !max.is_finite() {
            return Self::new(EMPTY_DOMAIN.0, EMPTY_DOMAIN.1);
        }

        if min == max {
            let widen = if min == 0.0 { 0.05 } else { min.abs() * 0.05 };
            min -= widen;
            max += widen;
        }

        let pad = (max - min) * margin_ratio;
        Self::new(min - pad, max + pad)
    }

    /// Extends the domain so it contains `value`.
    #[must_use]
    pub fn including(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }
        let (start, end) = self.domain();
        if start <= end {
            Self {
                domain_start: start.min(value),
                domain_end: end.max(value),
            }
        } else {
            Self {
                domain_start: start.max(value),
                domain_end: end.min(value),
            }
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a domain value onto the pixel span `(start_px, end_px)`.
    pub fn domain_to_pixel(self, value: f64, span: (f64, f64)) -> ChartResult<f64> {
        validate_span(span)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(span.0 + normalized * (span.1 - span.0))
    }

    pub fn pixel_to_domain(self, pixel: f64, span: (f64, f64)) -> ChartResult<f64> {
        validate_span(span)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - span.0) / (span.1 - span.0);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

fn validate_span(span: (f64, f64)) -> ChartResult<()> {
    if !span.0.is_finite() || !span.1.is_finite() || span.0 == span.1 {
        return Err(ChartError::InvalidData(
            "pixel span must be finite and non-zero".to_owned(),
        ));
    }
    Ok(())
}
