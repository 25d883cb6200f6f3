use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::{BarLineChartOptions, ScatterChartOptions};
use crate::data::{CropFilter, DEFAULT_FAOSTAT_URL, DataSource};
use crate::error::{ChartError, ChartResult};
use crate::render::OutputFormat;
use crate::turtle::kenya::{FLAG_HEIGHT, FLAG_WIDTH};
use crate::turtle::{CANVAS_MARGIN, SCREEN_TITLE};

/// Settings for the cocoa comparison pipeline.
///
/// Every field has a default so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CocoaChartConfig {
    pub url: String,
    /// Local CSV file; takes precedence over `url` when set.
    pub input: Option<PathBuf>,
    pub fetch_timeout_secs: u64,
    pub filter: CropFilter,
    pub scatter: ScatterChartOptions,
    pub bar_line: BarLineChartOptions,
    pub output_dir: PathBuf,
    pub preview_rows: usize,
    pub wide_preview_rows: usize,
}

impl Default for CocoaChartConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_FAOSTAT_URL.to_owned(),
            input: None,
            fetch_timeout_secs: 30,
            filter: CropFilter::default(),
            scatter: ScatterChartOptions::default(),
            bar_line: BarLineChartOptions::default(),
            output_dir: PathBuf::from("."),
            preview_rows: 5,
            wide_preview_rows: 10,
        }
    }
}

impl CocoaChartConfig {
    #[must_use]
    pub fn data_source(&self) -> DataSource {
        match &self.input {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Url(self.url.clone()),
        }
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.fetch_timeout_secs == 0 {
            return Err(ChartError::Config(
                "fetch_timeout_secs must be > 0".to_owned(),
            ));
        }
        if self.filter.item.trim().is_empty() {
            return Err(ChartError::Config("filter item must not be empty".to_owned()));
        }
        if self.filter.areas.is_empty() {
            return Err(ChartError::Config(
                "filter needs at least one area".to_owned(),
            ));
        }
        if self.filter.areas.iter().any(|area| area.trim().is_empty()) {
            return Err(ChartError::Config(
                "filter areas must not be blank".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Config(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

/// Settings for the flag drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagConfig {
    /// Pixels added to the flag size on each axis.
    pub margin: u32,
    pub output: PathBuf,
    pub title: String,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            margin: CANVAS_MARGIN,
            output: PathBuf::from("kenyan-flag.png"),
            title: SCREEN_TITLE.to_owned(),
        }
    }
}

impl FlagConfig {
    /// Canvas size in pixels: the flag plus `margin` on each axis.
    pub fn canvas_size(&self) -> ChartResult<(u32, u32)> {
        let grow = |flag_px: f64| {
            (flag_px as u32).checked_add(self.margin).ok_or_else(|| {
                ChartError::Config(format!("flag margin {} is too large", self.margin))
            })
        };
        Ok((grow(FLAG_WIDTH)?, grow(FLAG_HEIGHT)?))
    }

    /// `output` with its extension switched to match `format`.
    #[must_use]
    pub fn output_for(&self, format: OutputFormat) -> PathBuf {
        self.output.with_extension(format.extension())
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.canvas_size()?;
        if self.output.as_os_str().is_empty() {
            return Err(ChartError::Config("flag output path must not be empty".to_owned()));
        }
        Ok(())
    }
}

/// Reads a JSON config file. Missing keys fall back to the type's defaults.
pub fn load_json_config<T: DeserializeOwned>(path: &Path) -> ChartResult<T> {
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "loaded config file");
    serde_json::from_str(&text)
        .map_err(|e| ChartError::Config(format!("{}: {e}", path.display())))
}
