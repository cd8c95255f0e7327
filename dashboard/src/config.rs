use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use pricing::common::models::{DerivativeParameter, ExerciseType, Greek};

use crate::error::DashboardError;

/// One slider-style input: the admissible interval and the current value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub value: f64,
}

impl ParameterRange {
    pub fn new(min: f64, max: f64, value: f64) -> Self {
        Self { min, max, value }
    }

    pub(crate) fn validate(&self, name: &'static str) -> Result<(), DashboardError> {
        if self.min > self.max {
            return Err(DashboardError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        if self.value < self.min || self.value > self.max {
            return Err(DashboardError::OutOfRange {
                name,
                value: self.value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Everything the presentation shell needs for one render pass, in place of
/// the original dashboard's per-widget state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub asset_price: ParameterRange,
    pub strike: ParameterRange,
    pub time_to_expiration: ParameterRange,
    pub rfr: ParameterRange,
    pub vola: ParameterRange,
    pub option_type: ExerciseType,
    pub selected_greek: Greek,
    /// number of evenly spaced spot prices on the sensitivity curve
    pub curve_samples: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            asset_price: ParameterRange::new(50.0, 150.0, 100.0),
            strike: ParameterRange::new(50.0, 150.0, 105.0),
            time_to_expiration: ParameterRange::new(0.1, 5.0, 1.0),
            rfr: ParameterRange::new(0.0, 0.2, 0.05),
            vola: ParameterRange::new(0.1, 1.0, 0.2),
            option_type: ExerciseType::Call,
            selected_greek: Greek::Delta,
            curve_samples: 100,
        }
    }
}

impl DashboardConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, DashboardError> {
        let config = serde_json::from_str(raw)?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DashboardError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// The ranges keep invalid inputs away from the engine; the engine still
    /// re-checks its own positivity preconditions.
    pub fn validate(&self) -> Result<(), DashboardError> {
        self.asset_price.validate("asset_price")?;
        self.strike.validate("strike")?;
        self.time_to_expiration.validate("time_to_expiration")?;
        self.rfr.validate("rfr")?;
        self.vola.validate("vola")?;
        if self.curve_samples < 2 {
            return Err(DashboardError::TooFewSamples(self.curve_samples));
        }
        Ok(())
    }

    /// The engine parameters at the currently selected values.
    pub fn parameters(&self) -> DerivativeParameter {
        DerivativeParameter::new(
            self.asset_price.value,
            self.strike.value,
            self.time_to_expiration.value,
            self.rfr.value,
            self.vola.value,
        )
    }
}
