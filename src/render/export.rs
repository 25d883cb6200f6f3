use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ChartResult;
use crate::render::RenderFrame;

/// File format for a saved frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Json,
}

impl OutputFormat {
    /// PNG when the Cairo backend is compiled in, JSON otherwise.
    #[must_use]
    pub fn preferred() -> Self {
        if cfg!(feature = "cairo-backend") {
            Self::Png
        } else {
            Self::Json
        }
    }

    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Json => "json",
        }
    }
}

/// Writes `frame` to `path`, creating parent directories as needed.
pub fn write_frame(frame: &RenderFrame, path: &Path, format: OutputFormat) -> ChartResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    match format {
        OutputFormat::Json => fs::write(path, frame.to_json_contract_v1_pretty()?)?,
        OutputFormat::Png => write_png(frame, path)?,
    }
    info!(path = %path.display(), items = frame.len(), "wrote frame");
    Ok(())
}

/// `dir/name.ext` for the given format.
#[must_use]
pub fn frame_path(dir: &Path, name: &str, format: OutputFormat) -> PathBuf {
    dir.join(format!("{name}.{}", format.extension()))
}

#[cfg(feature = "cairo-backend")]
fn write_png(frame: &RenderFrame, path: &Path) -> ChartResult<()> {
    use crate::render::{CairoRenderer, Renderer};

    let mut renderer = CairoRenderer::for_frame(frame)?;
    renderer.render(frame)?;
    renderer.write_png(path)
}

#[cfg(not(feature = "cairo-backend"))]
fn write_png(_frame: &RenderFrame, path: &Path) -> ChartResult<()> {
    Err(crate::error::ChartError::Backend(format!(
        "cannot write `{}`: built without the `cairo-backend` feature",
        path.display()
    )))
}
