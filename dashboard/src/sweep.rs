use ndarray::Array1;

use pricing::analytic::{BlackScholesMerton, OptionValuation};
use pricing::common::models::{DerivativeParameter, Greek};

use crate::config::DashboardConfig;
use crate::error::DashboardError;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// The engine reports theta annualized; displays use time decay per
/// calendar day.
pub fn per_calendar_day(theta: f64) -> f64 {
    theta / DAYS_PER_YEAR
}

/// One selected Greek evaluated on an evenly spaced grid of spot prices,
/// all other parameters held at their configured values.
pub struct SensitivityCurve {
    pub asset_prices: Array1<f64>,
    pub values: Array1<f64>,
    pub greek: Greek,
}

impl SensitivityCurve {
    pub fn compute(config: &DashboardConfig) -> Result<Self, DashboardError> {
        config.validate()?;

        let asset_prices = Array1::linspace(
            config.asset_price.min,
            config.asset_price.max,
            config.curve_samples,
        );
        let mut values = Array1::zeros(config.curve_samples);

        for (i, &asset_price) in asset_prices.iter().enumerate() {
            let params = DerivativeParameter::new(
                asset_price,
                config.strike.value,
                config.time_to_expiration.value,
                config.rfr.value,
                config.vola.value,
            );
            let valuation = BlackScholesMerton::valuate(&params, config.option_type)?;
            values[i] = match config.selected_greek {
                Greek::Theta => per_calendar_day(valuation.theta),
                greek => valuation.greek(greek),
            };
        }

        Ok(Self {
            asset_prices,
            values,
            greek: config.selected_greek,
        })
    }
}
