use serde::{Deserialize, Serialize};

use crate::error::PricingError;

pub struct DerivativeParameter {
    /// the asset's price at time t
    pub asset_price: f64,
    /// the strike or exercise price of the asset
    pub strike: f64,
    /// (T - t) in years, where T is the time of the option's expiration and t is the current time
    pub time_to_expiration: f64,
    /// the annualized risk-free interest rate
    pub rfr: f64,
    /// the annualized standard deviation of the stock's returns
    pub vola: f64,
}

impl DerivativeParameter {
    pub fn new(
        asset_price: f64,
        strike: f64,
        time_to_expiration: f64,
        rfr: f64,
        vola: f64,
    ) -> Self {
        Self {
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
        }
    }

    /// The closed-form formulas require `ln(S / K)` and a division by
    /// `vola * sqrt(time_to_expiration)`, so everything but `rfr` must be
    /// strictly positive. `rfr` may take any sign.
    pub fn validate(&self) -> Result<(), PricingError> {
        for (name, value) in [
            ("asset_price", self.asset_price),
            ("strike", self.strike),
            ("time_to_expiration", self.time_to_expiration),
            ("vola", self.vola),
        ] {
            if value <= 0.0 {
                return Err(PricingError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// The exercise right of the option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseType {
    Call,
    Put,
}

/// One sensitivity of the option price, for callers that single out a figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Greek {
    Delta,
    Gamma,
    Theta,
    Vega,
    Rho,
}

impl Greek {
    pub fn name(&self) -> &'static str {
        match self {
            Greek::Delta => "Delta",
            Greek::Gamma => "Gamma",
            Greek::Theta => "Theta",
            Greek::Vega => "Vega",
            Greek::Rho => "Rho",
        }
    }
}

/// Present value and sensitivities of a European option.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    /// the option's present value
    pub price: f64,
    /// change of the option price per unit change in the asset price
    pub delta: f64,
    /// change of delta per unit change in the asset price
    pub gamma: f64,
    /// change of the option price with the passage of time, annualized;
    /// a per-calendar-day figure is the caller's conversion
    pub theta: f64,
    /// change of the option price per unit change in volatility
    pub vega: f64,
    /// change of the option price per unit change in the risk-free rate
    pub rho: f64,
}

impl Valuation {
    pub fn greek(&self, greek: Greek) -> f64 {
        match greek {
            Greek::Delta => self.delta,
            Greek::Gamma => self.gamma,
            Greek::Theta => self.theta,
            Greek::Vega => self.vega,
            Greek::Rho => self.rho,
        }
    }
}
