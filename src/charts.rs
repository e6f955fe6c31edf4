//! Horizontal bar chart rendering.

use std::path::Path;

use plotters::prelude::*;

use crate::errors::ScrapeError;

const CHART_SIZE: (u32, u32) = (800, 600);

fn chart_err<E: std::fmt::Display>(error: E) -> ScrapeError {
    ScrapeError::ChartError(error.to_string())
}

/// Render one horizontal bar chart PNG at `path`, overwriting any previous
/// file there.
///
/// `data` must already be sorted ascending by count; index 0 draws at the
/// bottom of the chart, so the largest count ends up at the top. An empty
/// table still produces a valid, bar-less chart.
///
/// # Errors
///
/// Returns an error if the backing file cannot be written or drawing fails.
pub fn render_barh(path: &Path, title: &str, data: &[(String, u64)]) -> Result<(), ScrapeError> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let max_count = data.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let rows = u32::try_from(data.len()).map_err(chart_err)?.max(1);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(36)
        .y_label_area_size(140)
        .build_cartesian_2d(0..max_count + 1, (0..rows).into_segmented())
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(data.len().max(1))
        .y_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(index) => data
                .get(*index as usize)
                .map(|(name, _)| name.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(data.iter().enumerate().map(|(index, (_, count))| {
            let index = index as u32;
            let mut bar = Rectangle::new(
                [
                    (0, SegmentValue::Exact(index)),
                    (*count, SegmentValue::Exact(index + 1)),
                ],
                BLUE.filled(),
            );
            bar.set_margin(4, 4, 0, 0);
            bar
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
