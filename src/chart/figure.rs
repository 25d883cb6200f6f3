use serde::{Deserialize, Serialize};

use crate::core::ticks::{
    AXIS_X_TARGET_SPACING_PX, AXIS_Y_TARGET_SPACING_PX, axis_tick_target_count, format_tick,
    nice_step, nice_ticks,
};
use crate::core::{LinearScale, PlotArea, Viewport};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame,
    TextHAlign, TextPrimitive,
};

const POINTS_PER_INCH: f64 = 72.0;

/// tab10 color cycle, `C0..C9`.
const TAB10: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

#[must_use]
pub fn cycle_color(index: usize) -> Color {
    let (red, green, blue) = TAB10[index % TAB10.len()];
    Color::from_rgb8(red, green, blue)
}

/// Title and axis captions of one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

/// Pixel sizes derived from point sizes at a figure DPI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureStyle {
    pub dpi: f64,
    pub tick_font_px: f64,
    pub label_font_px: f64,
    pub title_font_px: f64,
    pub tick_length_px: f64,
    pub marker_radius_px: f64,
    pub line_width_px: f64,
    pub grid_color: Color,
    pub text_color: Color,
}

impl FigureStyle {
    #[must_use]
    pub fn at_dpi(dpi: f64) -> Self {
        let px = |points: f64| points * dpi / POINTS_PER_INCH;
        Self {
            dpi,
            tick_font_px: px(10.0),
            label_font_px: px(10.0),
            title_font_px: px(12.0),
            tick_length_px: px(3.5),
            marker_radius_px: px(3.0),
            line_width_px: px(1.5),
            grid_color: Color::rgb(0.69, 0.69, 0.69),
            text_color: Color::BLACK,
        }
    }
}

/// Legend glyph drawn next to a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendSwatch {
    Marker,
    Bar,
    MarkedDashedLine,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub swatch: LegendSwatch,
}

/// A finished chart ready for any renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// File-system friendly identifier, e.g. `scatter-ghana`.
    pub name: String,
    pub title: String,
    pub frame: RenderFrame,
}

/// Axes under construction: background, grid and ticks are drawn on creation,
/// data marks are pushed by the caller, captions and legend on `finish`.
#[derive(Debug)]
pub struct FigureCanvas {
    frame: RenderFrame,
    area: PlotArea,
    x_scale: LinearScale,
    y_scale: LinearScale,
    style: FigureStyle,
    legend: Vec<LegendEntry>,
}

impl FigureCanvas {
    pub fn new(
        viewport: Viewport,
        x_scale: LinearScale,
        y_scale: LinearScale,
        style: FigureStyle,
    ) -> ChartResult<Self> {
        let area = PlotArea::inset(viewport, 0.125, 0.10, 0.12, 0.11)?;
        let mut canvas = Self {
            frame: RenderFrame::new(viewport),
            area,
            x_scale,
            y_scale,
            style,
            legend: Vec::new(),
        };
        canvas.draw_grid_and_ticks()?;
        Ok(canvas)
    }

    #[must_use]
    pub fn area(&self) -> PlotArea {
        self.area
    }

    pub fn frame_mut(&mut self) -> &mut RenderFrame {
        &mut self.frame
    }

    pub fn add_legend_entry(
        &mut self,
        label: impl Into<String>,
        color: Color,
        swatch: LegendSwatch,
    ) {
        self.legend.push(LegendEntry {
            label: label.into(),
            color,
            swatch,
        });
    }

    /// Draws spines, captions and the legend, then hands back the frame.
    #[must_use]
    pub fn finish(mut self, labels: &ChartLabels) -> RenderFrame {
        self.draw_spines();
        self.draw_captions(labels);
        self.draw_legend();
        self.frame
    }

    fn draw_grid_and_ticks(&mut self) -> ChartResult<()> {
        let area = self.area;
        let style = self.style;

        let x_count = axis_tick_target_count(area.width, AXIS_X_TARGET_SPACING_PX, 2, 11);
        let x_step = nice_step(self.x_scale.domain(), x_count);
        for tick in nice_ticks(self.x_scale.domain(), x_count) {
            let x = self.x_scale.domain_to_pixel(tick, area.x_span())?;
            self.frame.push(grid_line(x, area.top, x, area.bottom(), style).into());
            self.frame.push(
                LinePrimitive::new(
                    x,
                    area.bottom(),
                    x,
                    area.bottom() + style.tick_length_px,
                    1.0,
                    style.text_color,
                )
                .into(),
            );
            self.frame.push(
                TextPrimitive::new(
                    format_tick(tick, x_step),
                    x,
                    area.bottom() + style.tick_length_px + 2.0,
                    style.tick_font_px,
                    style.text_color,
                    TextHAlign::Center,
                )
                .into(),
            );
        }

        let y_count = axis_tick_target_count(area.height, AXIS_Y_TARGET_SPACING_PX, 2, 11);
        let y_step = nice_step(self.y_scale.domain(), y_count);
        for tick in nice_ticks(self.y_scale.domain(), y_count) {
            let y = self.y_scale.domain_to_pixel(tick, area.y_span())?;
            self.frame.push(grid_line(area.left, y, area.right(), y, style).into());
            self.frame.push(
                LinePrimitive::new(
                    area.left - style.tick_length_px,
                    y,
                    area.left,
                    y,
                    1.0,
                    style.text_color,
                )
                .into(),
            );
            self.frame.push(
                TextPrimitive::new(
                    format_tick(tick, y_step),
                    area.left - style.tick_length_px - 3.0,
                    y - style.tick_font_px * 0.6,
                    style.tick_font_px,
                    style.text_color,
                    TextHAlign::Right,
                )
                .into(),
            );
        }
        Ok(())
    }

    fn draw_spines(&mut self) {
        let area = self.area;
        let color = self.style.text_color;
        for (x1, y1, x2, y2) in [
            (area.left, area.top, area.right(), area.top),
            (area.right(), area.top, area.right(), area.bottom()),
            (area.right(), area.bottom(), area.left, area.bottom()),
            (area.left, area.bottom(), area.left, area.top),
        ] {
            self.frame
                .push(LinePrimitive::new(x1, y1, x2, y2, 1.0, color).into());
        }
    }

    fn draw_captions(&mut self, labels: &ChartLabels) {
        let area = self.area;
        let style = self.style;
        let center_x = area.left + area.width / 2.0;

        if !labels.title.is_empty() {
            self.frame.push(
                TextPrimitive::new(
                    labels.title.clone(),
                    center_x,
                    area.top - style.title_font_px * 1.8,
                    style.title_font_px,
                    style.text_color,
                    TextHAlign::Center,
                )
                .into(),
            );
        }
        if !labels.x_label.is_empty() {
            self.frame.push(
                TextPrimitive::new(
                    labels.x_label.clone(),
                    center_x,
                    area.bottom() + style.tick_length_px + style.tick_font_px * 1.8,
                    style.label_font_px,
                    style.text_color,
                    TextHAlign::Center,
                )
                .into(),
            );
        }
        if !labels.y_label.is_empty() {
            let widest_tick = style.tick_font_px * 0.6 * 8.0;
            self.frame.push(
                TextPrimitive::new(
                    labels.y_label.clone(),
                    (area.left - widest_tick - style.label_font_px * 2.2).max(2.0),
                    area.top + area.height / 2.0,
                    style.label_font_px,
                    style.text_color,
                    TextHAlign::Center,
                )
                .rotated(90.0)
                .into(),
            );
        }
    }

    fn draw_legend(&mut self) {
        if self.legend.is_empty() {
            return;
        }

        let style = self.style;
        let font = style.tick_font_px;
        let row_height = font * 1.4;
        let swatch_width = font * 2.0;
        let padding = font * 0.5;
        let longest = self
            .legend
            .iter()
            .map(|entry| entry.label.chars().count())
            .max()
            .unwrap_or(0) as f64;
        let width = padding * 3.0 + swatch_width + longest * font * 0.6;
        let height = padding * 2.0 + row_height * self.legend.len() as f64;
        let left = self.area.right() - width - padding;
        let top = self.area.top + padding;

        self.frame.push(
            RectPrimitive::new(left, top, width, height, Color::WHITE.with_alpha(0.8))
                .with_border(1.0, Color::rgb(0.8, 0.8, 0.8))
                .into(),
        );

        let entries = std::mem::take(&mut self.legend);
        for (index, entry) in entries.iter().enumerate() {
            let row_top = top + padding + row_height * index as f64;
            let mid_y = row_top + row_height / 2.0;
            let swatch_left = left + padding;
            match entry.swatch {
                LegendSwatch::Marker => {
                    self.frame.push(
                        CirclePrimitive::new(
                            swatch_left + swatch_width / 2.0,
                            mid_y,
                            style.marker_radius_px,
                            entry.color,
                        )
                        .into(),
                    );
                }
                LegendSwatch::Bar => {
                    self.frame.push(
                        RectPrimitive::new(
                            swatch_left,
                            mid_y - font * 0.35,
                            swatch_width,
                            font * 0.7,
                            entry.color,
                        )
                        .into(),
                    );
                }
                LegendSwatch::MarkedDashedLine => {
                    self.frame.push(
                        LinePrimitive::new(
                            swatch_left,
                            mid_y,
                            swatch_left + swatch_width,
                            mid_y,
                            style.line_width_px,
                            entry.color,
                        )
                        .with_stroke_style(LineStrokeStyle::Dashed)
                        .into(),
                    );
                    self.frame.push(
                        CirclePrimitive::new(
                            swatch_left + swatch_width / 2.0,
                            mid_y,
                            style.marker_radius_px,
                            entry.color,
                        )
                        .into(),
                    );
                }
            }
            if entry.label.is_empty() {
                continue;
            }
            self.frame.push(
                TextPrimitive::new(
                    entry.label.clone(),
                    swatch_left + swatch_width + padding,
                    mid_y - font * 0.6,
                    font,
                    style.text_color,
                    TextHAlign::Left,
                )
                .into(),
            );
        }
    }
}

fn grid_line(x1: f64, y1: f64, x2: f64, y2: f64, style: FigureStyle) -> LinePrimitive {
    LinePrimitive::new(x1, y1, x2, y2, 0.8, style.grid_color)
}

/// Lowercase identifier built from alphanumeric runs joined by `-`.
#[must_use]
pub fn slug(input: &str) -> String {
    input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
