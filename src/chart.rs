//! Monthly fraud trend chart rendering.
//!
//! Draws actual vs. detected fraud counts per month as two line series and
//! saves the result as a PNG. Purely a visualization side effect over the
//! monthly aggregation.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::aggregate::MonthlyTrend;
use crate::error::{Error, Result};

const CHART_SIZE: (u32, u32) = (1000, 600);

fn draw_err(e: impl std::fmt::Display) -> Error {
    Error::Chart(e.to_string())
}

/// Render the two-series monthly trend chart to `path`.
pub fn render_trend_chart<P: AsRef<Path>>(months: &[MonthlyTrend], path: P) -> Result<()> {
    if months.is_empty() {
        return Err(Error::Chart("no monthly data to plot".into()));
    }

    let y_max = months
        .iter()
        .map(|m| m.fraudulent.max(m.detected))
        .max()
        .unwrap_or(0) as i64
        + 5;
    let x_max = (months.len() as i32 - 1).max(1);

    let root = BitMapBackend::new(path.as_ref(), CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Fraud Trends Over Time", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(70)
        .y_label_area_size(50)
        .build_cartesian_2d(0i32..x_max, 0i64..y_max)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_labels(months.len())
        .x_label_formatter(&|idx| {
            months
                .get(*idx as usize)
                .map(|m| m.label())
                .unwrap_or_default()
        })
        .x_label_style(
            ("sans-serif", 14)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .x_desc("Month")
        .y_desc("Number of Cases")
        .draw()
        .map_err(draw_err)?;

    chart
        .draw_series(LineSeries::new(
            months
                .iter()
                .enumerate()
                .map(|(i, m)| (i as i32, m.fraudulent as i64)),
            &BLUE,
        ))
        .map_err(draw_err)?
        .label("Actual Fraud")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(
            months
                .iter()
                .enumerate()
                .map(|(i, m)| (i as i32, m.detected as i64)),
            &RED,
        ))
        .map_err(draw_err)?
        .label("Detected Fraud")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    info!(path = %path.as_ref().display(), months = months.len(), "trend chart written");
    Ok(())
}
