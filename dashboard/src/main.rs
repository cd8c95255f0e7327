//! Black-Scholes Greeks dashboard
//!
//! Prints the price and Greeks summary for the configured parameters and
//! writes the sensitivity curve of the selected Greek to a PNG. Takes an
//! optional path to a JSON config file; without one the stock defaults are
//! used.

use std::env;
use std::process;

use dashboard::chart::render_chart;
use dashboard::config::DashboardConfig;
use dashboard::error::DashboardError;
use dashboard::render::render_summary;
use dashboard::sweep::SensitivityCurve;
use pricing::analytic::{BlackScholesMerton, OptionValuation};

const CHART_PATH: &str = "greek_vs_asset_price.png";

fn main() {
    if let Err(err) = run() {
        eprintln!("dashboard error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), DashboardError> {
    let config = match env::args().nth(1) {
        Some(path) => DashboardConfig::from_json_file(path)?,
        None => DashboardConfig::default(),
    };
    config.validate()?;

    let valuation = BlackScholesMerton::valuate(&config.parameters(), config.option_type)?;
    print!("{}", render_summary(&config, &valuation));

    let curve = SensitivityCurve::compute(&config)?;
    render_chart(&config, &curve, CHART_PATH)?;
    println!("Sensitivity curve written to {CHART_PATH}");

    Ok(())
}
