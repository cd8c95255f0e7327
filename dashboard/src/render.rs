use pricing::common::models::{ExerciseType, Greek, Valuation};

use crate::config::DashboardConfig;
use crate::sweep::per_calendar_day;

/// Info text shown next to the selected Greek.
pub fn explanation(greek: Greek) -> &'static str {
    match greek {
        Greek::Delta => {
            "Delta measures how the option price reacts to moves in the underlying \
             asset price. A larger delta means a tighter link to the asset."
        }
        Greek::Gamma => {
            "Gamma is the rate of change of delta. High gamma means delta itself \
             reacts strongly to moves in the asset price."
        }
        Greek::Theta => {
            "Theta measures the value lost to the passage of time. The closer to \
             expiry, the stronger the decay."
        }
        Greek::Vega => {
            "Vega measures the sensitivity of the option price to volatility. The \
             larger the vega, the more a volatility shift moves the price."
        }
        Greek::Rho => {
            "Rho measures the sensitivity of the option price to interest rates. \
             It matters most for long-dated options."
        }
    }
}

/// Plain-text counterpart of the dashboard's result column: the price, the
/// Greeks table and the info text for the selected Greek.
pub fn render_summary(config: &DashboardConfig, valuation: &Valuation) -> String {
    let option_label = match config.option_type {
        ExerciseType::Call => "call",
        ExerciseType::Put => "put",
    };

    let mut out = String::new();
    out.push_str(&format!("Black-Scholes {} valuation\n", option_label));
    out.push_str("==============================\n\n");

    out.push_str("Parameters:\n");
    out.push_str(&format!(
        "  Asset price (S):   {:.2}\n",
        config.asset_price.value
    ));
    out.push_str(&format!("  Strike (K):        {:.2}\n", config.strike.value));
    out.push_str(&format!(
        "  Expiry (T):        {:.2} years\n",
        config.time_to_expiration.value
    ));
    out.push_str(&format!(
        "  Rate (r):          {:.1}%\n",
        config.rfr.value * 100.0
    ));
    out.push_str(&format!(
        "  Vola (sigma):      {:.1}%\n\n",
        config.vola.value * 100.0
    ));

    out.push_str(&format!("Option price: {:.2}\n\n", valuation.price));

    out.push_str("Sensitivities (Greeks):\n");
    out.push_str(&format!("  Delta: {:.3}\n", valuation.delta));
    out.push_str(&format!("  Gamma: {:.3}\n", valuation.gamma));
    out.push_str(&format!(
        "  Theta: {:.3} per year ({:.4} per calendar day)\n",
        valuation.theta,
        per_calendar_day(valuation.theta)
    ));
    out.push_str(&format!("  Vega:  {:.3}\n", valuation.vega));
    out.push_str(&format!("  Rho:   {:.3}\n\n", valuation.rho));

    out.push_str(&format!(
        "{}: {}\n",
        config.selected_greek.name(),
        explanation(config.selected_greek)
    ));

    out
}
