use std::path::Path;

use plotters::prelude::*;

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::sweep::SensitivityCurve;

const CURVE_COLOR: RGBColor = RGBColor(255, 140, 0);

fn chart_err(err: impl std::fmt::Display) -> DashboardError {
    DashboardError::Chart(err.to_string())
}

/// Line chart of the selected Greek across the swept spot prices, with a
/// vertical marker at the currently configured spot.
pub fn render_chart(
    config: &DashboardConfig,
    curve: &SensitivityCurve,
    path: impl AsRef<Path>,
) -> Result<(), DashboardError> {
    let (x_min, x_max) = (config.asset_price.min, config.asset_price.max);

    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &value in curve.values.iter() {
        y_min = y_min.min(value);
        y_max = y_max.max(value);
    }
    // breathing room; also keeps a flat curve drawable
    let pad = ((y_max - y_min) * 0.05).max(1e-6);
    let (y_min, y_max) = (y_min - pad, y_max + pad);

    let root = BitMapBackend::new(path.as_ref(), (1000, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let caption = format!("{} vs asset price", curve.greek.name());
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(chart_err)?;

    chart
        .configure_mesh()
        .x_desc("Asset price (S)")
        .y_desc(curve.greek.name())
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(LineSeries::new(
            curve
                .asset_prices
                .iter()
                .zip(curve.values.iter())
                .map(|(&asset_price, &value)| (asset_price, value)),
            &CURVE_COLOR,
        ))
        .map_err(chart_err)?;

    // marker at the current spot
    let current = config.asset_price.value;
    chart
        .draw_series(LineSeries::new([(current, y_min), (current, y_max)], &RED))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    Ok(())
}
