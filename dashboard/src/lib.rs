pub mod chart;
pub mod config;
pub mod error;
pub mod render;
pub mod sweep;

pub use config::{DashboardConfig, ParameterRange};
pub use error::DashboardError;
pub use sweep::SensitivityCurve;
