use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::COMPARISON_TITLE;
use crate::chart::figure::{
    ChartLabels, Figure, FigureCanvas, FigureStyle, LegendSwatch, cycle_color,
};
use crate::core::{
    DataPoint, LinearScale, Viewport, project_bars, project_line_segments, project_points,
};
use crate::data::FilteredSubset;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, LineStrokeStyle, RectPrimitive};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarLineChartOptions {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    /// Bar width in years.
    pub bar_width: f64,
    pub bar_alpha: f64,
    pub labels: ChartLabels,
}

impl Default for BarLineChartOptions {
    fn default() -> Self {
        Self {
            width_in: 12.0,
            height_in: 6.0,
            dpi: 100.0,
            bar_width: 0.8,
            bar_alpha: 0.6,
            labels: ChartLabels {
                title: COMPARISON_TITLE.to_owned(),
                x_label: "Year".to_owned(),
                y_label: "Production".to_owned(),
            },
        }
    }
}

/// Production by year: one translucent bar series and one dashed marker
/// line per country, all on one figure. The y axis starts at zero.
pub fn build_bar_line_figure(
    subset: &FilteredSubset,
    options: &BarLineChartOptions,
) -> ChartResult<Figure> {
    if !options.bar_alpha.is_finite() || !(0.0..=1.0).contains(&options.bar_alpha) {
        return Err(ChartError::InvalidData(
            "bar alpha must be finite and in [0, 1]".to_owned(),
        ));
    }

    let viewport = Viewport::from_inches(options.width_in, options.height_in, options.dpi)?;
    let style = FigureStyle::at_dpi(options.dpi);

    let series: Vec<(&str, Vec<DataPoint>)> = subset
        .areas()
        .map(|area| {
            let points = subset
                .rows_for(area)
                .iter()
                .filter_map(|row| {
                    row.production
                        .map(|production| DataPoint::new(f64::from(row.year), production))
                })
                .collect();
            (area, points)
        })
        .collect();

    let half_bar = options.bar_width / 2.0;
    let all_points = || series.iter().flat_map(|(_, points)| points.iter());
    let x_scale = LinearScale::fit(
        all_points().flat_map(|point| [point.x - half_bar, point.x + half_bar]),
        0.05,
    )?;
    let y_scale = zero_based_scale(all_points().map(|point| point.y))?;

    let mut canvas = FigureCanvas::new(viewport, x_scale, y_scale, style)?;
    let mut cycle = 0usize;
    for (area, points) in &series {
        let bar_color = cycle_color(cycle).with_alpha(options.bar_alpha);
        let line_color = cycle_color(cycle + 1);
        cycle += 2;

        let bars = project_bars(
            points,
            x_scale,
            y_scale,
            canvas.area(),
            options.bar_width,
            0.0,
        )?;
        for bar in bars {
            canvas
                .frame_mut()
                .push(RectPrimitive::new(bar.x, bar.top, bar.width, bar.height, bar_color).into());
        }
        canvas.add_legend_entry(format!("{area} Production"), bar_color, LegendSwatch::Bar);

        for segment in project_line_segments(points, x_scale, y_scale, canvas.area())? {
            canvas.frame_mut().push(
                LinePrimitive::new(
                    segment.x1,
                    segment.y1,
                    segment.x2,
                    segment.y2,
                    style.line_width_px,
                    line_color,
                )
                .with_stroke_style(LineStrokeStyle::Dashed)
                .into(),
            );
        }
        for (x, y) in project_points(points, x_scale, y_scale, canvas.area())? {
            canvas
                .frame_mut()
                .push(CirclePrimitive::new(x, y, style.marker_radius_px, line_color).into());
        }
        canvas.add_legend_entry(
            format!("{area} Production trend"),
            line_color,
            LegendSwatch::MarkedDashedLine,
        );
    }

    let frame = canvas.finish(&options.labels);
    debug!(series = series.len(), items = frame.len(), "built bar+line figure");
    Ok(Figure {
        name: "production".to_owned(),
        title: options.labels.title.clone(),
        frame,
    })
}

/// Domain `[0, max * 1.05]`, or a padded fit when values go negative.
fn zero_based_scale<I>(values: I) -> ChartResult<LinearScale>
where
    I: IntoIterator<Item = f64>,
{
    let values: Vec<f64> = values.into_iter().filter(|value| value.is_finite()).collect();
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);

    if values.is_empty() {
        return LinearScale::new(0.0, 1.0);
    }
    if min >= 0.0 && max > 0.0 {
        return LinearScale::new(0.0, max * 1.05);
    }
    Ok(LinearScale::fit(values, 0.05)?.including(0.0))
}
