use std::ops::Range;

use plotters::prelude::*;
use thiserror::Error;

use super::color::{generate_palette, ColorMap};

const CHART_SIZE: (u32, u32) = (900, 520);

/// Rendering failed inside the drawing backend.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("chart backend error: {0}")]
    Backend(String),
}

impl ChartError {
    fn backend<E: std::fmt::Display>(err: E) -> Self {
        ChartError::Backend(err.to_string())
    }
}

/// One named line on a chart.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub points: Vec<(i64, f64)>,
}

// ---------------------------------------------------------------------------
// Line chart (trade value over years)
// ---------------------------------------------------------------------------

/// Render one or more `(year, value)` series as lines with point markers.
/// Returns the SVG document as a string.
///
/// Empty input is not an error: the chart renders with no marks over a unit
/// axis span.
pub fn line_chart(
    title: &str,
    x_label: &str,
    y_label: &str,
    series: &[Series],
) -> Result<String, ChartError> {
    let (x_range, y_range) = axis_ranges(series.iter().flat_map(|s| s.points.iter().copied()));
    let colors = ColorMap::new(series.iter().map(|s| s.name.as_str()));

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(ChartError::backend)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(56)
            .build_cartesian_2d(x_range, y_range)
            .map_err(ChartError::backend)?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .draw()
            .map_err(ChartError::backend)?;

        for s in series {
            let color = colors.color_for(&s.name);
            chart
                .draw_series(LineSeries::new(
                    s.points.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(ChartError::backend)?
                .label(s.name.as_str())
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2))
                });
            chart
                .draw_series(
                    s.points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
                )
                .map_err(ChartError::backend)?;
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()
            .map_err(ChartError::backend)?;

        root.present().map_err(ChartError::backend)?;
    }
    Ok(svg)
}

// ---------------------------------------------------------------------------
// Bar chart (mean trade value per decade)
// ---------------------------------------------------------------------------

/// Render `(decade, mean)` bars, one colour per decade, with a legend.
/// Bars are expected sorted by decade (the aggregation layer guarantees it).
pub fn bar_chart(
    title: &str,
    x_label: &str,
    y_label: &str,
    bars: &[(i64, f64)],
) -> Result<String, ChartError> {
    let x_range = match (
        bars.iter().map(|&(d, _)| d).min(),
        bars.iter().map(|&(d, _)| d).max(),
    ) {
        (Some(lo), Some(hi)) => (lo - 8)..(hi + 8),
        _ => 0..1,
    };
    let y_range = bar_value_range(bars);
    let palette = generate_palette(bars.len());

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(ChartError::backend)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(title, ("sans-serif", 22))
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(56)
            .build_cartesian_2d(x_range, y_range)
            .map_err(ChartError::backend)?;

        chart
            .configure_mesh()
            .x_desc(x_label)
            .y_desc(y_label)
            .draw()
            .map_err(ChartError::backend)?;

        for (&(decade, mean), color) in bars.iter().zip(palette) {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(decade - 3, 0.0), (decade + 3, mean)],
                    color.filled(),
                )))
                .map_err(ChartError::backend)?
                .label(decade.to_string())
                .legend(move |(x, y)| {
                    Rectangle::new([(x, y - 5), (x + 12, y + 5)], color.filled())
                });
        }

        chart
            .configure_series_labels()
            .background_style(&WHITE.mix(0.85))
            .border_style(&BLACK)
            .draw()
            .map_err(ChartError::backend)?;

        root.present().map_err(ChartError::backend)?;
    }
    Ok(svg)
}

// -- Axis helpers --

/// Padded axis ranges around the data; unit spans when there is no data.
fn axis_ranges(points: impl Iterator<Item = (i64, f64)>) -> (Range<i64>, Range<f64>) {
    let mut x_min = i64::MAX;
    let mut x_max = i64::MIN;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut any = false;

    for (x, y) in points {
        any = true;
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }

    if !any {
        return (0..1, 0.0..1.0);
    }

    let x_pad = ((x_max - x_min) / 20).max(1);
    let y_span = y_max - y_min;
    let y_pad = if y_span <= f64::EPSILON { 1.0 } else { y_span * 0.05 };

    ((x_min - x_pad)..(x_max + x_pad), (y_min - y_pad)..(y_max + y_pad))
}

/// Value axis for bars: anchored at zero, padded past the extremes.
fn bar_value_range(bars: &[(i64, f64)]) -> Range<f64> {
    if bars.is_empty() {
        return 0.0..1.0;
    }
    let lo = bars.iter().map(|&(_, v)| v).fold(0.0_f64, f64::min) * 1.1;
    let hi = bars.iter().map(|&(_, v)| v).fold(0.0_f64, f64::max) * 1.1;
    if (hi - lo).abs() <= f64::EPSILON {
        0.0..1.0
    } else {
        lo..hi
    }
}
