use pricing::error::PricingError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("invalid range for '{name}': min {min} exceeds max {max}")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("'{name}' = {value} is outside the configured range [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("the sensitivity curve needs at least 2 samples, got {0}")]
    TooFewSamples(usize),
    #[error("could not read the dashboard config: {0}")]
    Config(#[from] std::io::Error),
    #[error("could not parse the dashboard config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Pricing(#[from] PricingError),
    #[error("chart rendering failed: {0}")]
    Chart(String),
}
