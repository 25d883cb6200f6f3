use tracing::{debug, trace};

use crate::core::{Point, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, PolygonPrimitive, RenderFrame, Renderer};
use crate::turtle::{Pen, Shape};

/// Extra pixels around the drawing on each axis.
pub const CANVAS_MARGIN: u32 = 50;

/// Display driver for a `Pen`: owns the canvas size and the renderer that
/// receives projected frames.
///
/// Turtle space has its origin at the canvas center with y pointing up.
/// `tracer(0)` turns intermediate refreshes off so only `update` presents.
#[derive(Debug)]
pub struct Screen<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    title: String,
    background: Color,
    tracer: u32,
    pending_syncs: u32,
    refresh_count: usize,
}

impl<R: Renderer> Screen<R> {
    pub fn setup(
        renderer: R,
        width: u32,
        height: u32,
        title: impl Into<String>,
    ) -> ChartResult<Self> {
        let viewport = Viewport::new(width, height);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport { width, height });
        }
        let title = title.into();
        debug!(width, height, title = %title, "screen setup");
        Ok(Self {
            renderer,
            viewport,
            title,
            background: Color::WHITE,
            tracer: 1,
            pending_syncs: 0,
            refresh_count: 0,
        })
    }

    /// `0` disables incremental refresh; `n` presents every n-th `sync`.
    pub fn tracer(&mut self, every: u32) {
        self.tracer = every;
        self.pending_syncs = 0;
    }

    #[must_use]
    pub fn tracer_value(&self) -> u32 {
        self.tracer
    }

    /// Called after each drawing step; presents an intermediate frame when
    /// the tracer allows it.
    pub fn sync(&mut self, pen: &Pen) -> ChartResult<()> {
        if self.tracer == 0 {
            return Ok(());
        }
        self.pending_syncs += 1;
        if self.pending_syncs >= self.tracer {
            self.pending_syncs = 0;
            self.present(pen)?;
        }
        Ok(())
    }

    /// Explicit refresh, independent of the tracer setting.
    pub fn update(&mut self, pen: &Pen) -> ChartResult<()> {
        self.present(pen)
    }

    /// Projects every shape drawn so far into a pixel-space frame.
    pub fn frame(&self, pen: &Pen) -> RenderFrame {
        let mut frame = RenderFrame::new(self.viewport).with_background(self.background);
        for shape in pen.shapes() {
            match shape {
                Shape::Stroke {
                    from,
                    to,
                    width,
                    color,
                } => {
                    let (x1, y1) = self.to_pixel(*from);
                    let (x2, y2) = self.to_pixel(*to);
                    frame.push(LinePrimitive::new(x1, y1, x2, y2, *width, *color).into());
                }
                Shape::Fill { points, color } => {
                    let points = points.iter().map(|point| self.to_pixel(*point)).collect();
                    frame.push(PolygonPrimitive::new(points, *color).into());
                }
            }
        }
        frame
    }

    /// Turtle coordinates to canvas pixels.
    #[must_use]
    pub fn to_pixel(&self, point: Point) -> (f64, f64) {
        (
            point.x + f64::from(self.viewport.width) / 2.0,
            f64::from(self.viewport.height) / 2.0 - point.y,
        )
    }

    #[must_use]
    pub fn refresh_count(&self) -> usize {
        self.refresh_count
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn present(&mut self, pen: &Pen) -> ChartResult<()> {
        let frame = self.frame(pen);
        self.renderer.render(&frame)?;
        self.refresh_count += 1;
        trace!(refresh = self.refresh_count, items = frame.len(), "screen refresh");
        Ok(())
    }
}
