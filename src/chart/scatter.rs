use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::figure::{
    ChartLabels, Figure, FigureCanvas, FigureStyle, LegendSwatch, cycle_color, slug,
};
use crate::chart::COMPARISON_TITLE;
use crate::core::{DataPoint, LinearScale, Viewport, project_points};
use crate::data::{FilteredSubset, ReshapedRecord};
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, RenderFrame};

/// How the per-country scatter series are split across figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatterPresentation {
    /// One figure shown per country, as the display call runs inside the
    /// per-country loop.
    #[default]
    PerCountry,
    /// Every country on a single figure, shown once.
    Combined,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterChartOptions {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    pub presentation: ScatterPresentation,
    pub labels: ChartLabels,
}

impl Default for ScatterChartOptions {
    fn default() -> Self {
        Self {
            width_in: 10.0,
            height_in: 10.0,
            dpi: 100.0,
            presentation: ScatterPresentation::default(),
            labels: ChartLabels {
                title: COMPARISON_TITLE.to_owned(),
                x_label: "Area harvested(Hectares)".to_owned(),
                y_label: "Yield(Hg/Ha)".to_owned(),
            },
        }
    }
}

/// Area Harvested against Yield for each country in `subset`.
///
/// Rows missing either value are skipped. An empty subset still yields
/// valid figures with axes, captions and legend.
pub fn build_scatter_figures(
    subset: &FilteredSubset,
    options: &ScatterChartOptions,
) -> ChartResult<Vec<Figure>> {
    let viewport = Viewport::from_inches(options.width_in, options.height_in, options.dpi)?;
    let style = FigureStyle::at_dpi(options.dpi);

    let series: Vec<(usize, &str, Vec<DataPoint>)> = subset
        .areas()
        .enumerate()
        .map(|(index, area)| (index, area, scatter_points(subset.rows_for(area))))
        .collect();

    let figures = match options.presentation {
        ScatterPresentation::PerCountry => series
            .iter()
            .map(|entry| {
                let frame =
                    scatter_frame(std::slice::from_ref(entry), viewport, style, &options.labels)?;
                Ok(Figure {
                    name: format!("scatter-{}", slug(entry.1)),
                    title: format!("{} ({})", options.labels.title, entry.1),
                    frame,
                })
            })
            .collect::<ChartResult<Vec<_>>>()?,
        ScatterPresentation::Combined => vec![Figure {
            name: "scatter".to_owned(),
            title: options.labels.title.clone(),
            frame: scatter_frame(&series, viewport, style, &options.labels)?,
        }],
    };

    debug!(
        presentation = ?options.presentation,
        figures = figures.len(),
        "built scatter figures"
    );
    Ok(figures)
}

fn scatter_points(rows: &[ReshapedRecord]) -> Vec<DataPoint> {
    rows.iter()
        .filter_map(|row| match (row.area_harvested, row.yield_hg_per_ha) {
            (Some(area), Some(yield_value)) => Some(DataPoint::new(area, yield_value)),
            _ => None,
        })
        .collect()
}

fn scatter_frame(
    series: &[(usize, &str, Vec<DataPoint>)],
    viewport: Viewport,
    style: FigureStyle,
    labels: &ChartLabels,
) -> ChartResult<RenderFrame> {
    let all_points = || series.iter().flat_map(|(_, _, points)| points.iter());
    let x_scale = LinearScale::fit(all_points().map(|point| point.x), 0.05)?;
    let y_scale = LinearScale::fit(all_points().map(|point| point.y), 0.05)?;

    let mut canvas = FigureCanvas::new(viewport, x_scale, y_scale, style)?;
    for (color_index, area, points) in series {
        let color = cycle_color(*color_index);
        let projected = project_points(points, x_scale, y_scale, canvas.area())?;
        for (x, y) in projected {
            canvas
                .frame_mut()
                .push(CirclePrimitive::new(x, y, style.marker_radius_px, color).into());
        }
        canvas.add_legend_entry(*area, color, LegendSwatch::Marker);
    }

    Ok(canvas.finish(labels))
}
