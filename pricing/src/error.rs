use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("invalid parameter '{name}' = {value}: must be > 0")]
    InvalidParameter { name: &'static str, value: f64 },
}
