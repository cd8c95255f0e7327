use crate::common::models::{DerivativeParameter, ExerciseType, Valuation};
use crate::error::PricingError;
use probability::distribution::{Continuous, Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub(crate) fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

pub trait OptionValuation {
    type Params;

    /// Present value and all sensitivities for the given exercise right.
    fn valuate(
        params: &Self::Params,
        exercise_type: ExerciseType,
    ) -> Result<Valuation, PricingError>;

    fn call(params: &Self::Params) -> Result<f64, PricingError> {
        Self::valuate(params, ExerciseType::Call).map(|valuation| valuation.price)
    }

    fn put(params: &Self::Params) -> Result<f64, PricingError> {
        Self::valuate(params, ExerciseType::Put).map(|valuation| valuation.price)
    }
}

/// European Put and Call option prices and Greeks for stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
/// https://en.wikipedia.org/wiki/Greeks_(finance)
pub struct BlackScholesMerton;

impl OptionValuation for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn valuate(
        dp: &DerivativeParameter,
        exercise_type: ExerciseType,
    ) -> Result<Valuation, PricingError> {
        dp.validate()?;

        let sqrt_tte = dp.time_to_expiration.sqrt();
        let sigma_exp = dp.vola * sqrt_tte;
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
            / sigma_exp;
        let d2 = d1 - sigma_exp;
        let discounted_strike = dp.strike * (-dp.rfr * dp.time_to_expiration).exp();

        let (price, delta, rho, theta_d2) = match exercise_type {
            ExerciseType::Call => (
                cdf(d1) * dp.asset_price - cdf(d2) * discounted_strike,
                cdf(d1),
                discounted_strike * dp.time_to_expiration * cdf(d2),
                d2,
            ),
            ExerciseType::Put => (
                cdf(-d2) * discounted_strike - cdf(-d1) * dp.asset_price,
                cdf(d1) - 1.0,
                -discounted_strike * dp.time_to_expiration * cdf(-d2),
                -d2,
            ),
        };

        // gamma and vega are the same for both exercise rights; theta differs
        // only through the sign of the cdf argument
        let gamma = pdf(d1) / (dp.asset_price * sigma_exp);
        let vega = dp.asset_price * pdf(d1) * sqrt_tte;
        let theta = -(dp.asset_price * pdf(d1) * dp.vola) / (2.0 * sqrt_tte)
            - dp.rfr * discounted_strike * cdf(theta_d2);

        Ok(Valuation {
            price,
            delta,
            gamma,
            theta,
            vega,
            rho,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::models::Greek;
    use assert_approx_eq::assert_approx_eq;

    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn normal_cdf() {
        let center_value = cdf(0.0);
        assert_eq!(center_value, 0.5);

        let sigma_top = cdf(1.0); // mu + 1 sigma
        assert_approx_eq!(sigma_top, 0.8413, 0.0001); // table value for 1.0
    }

    #[test]
    fn normal_pdf() {
        let center_value = pdf(0.0);
        assert_approx_eq!(center_value, 0.398942, 1e-6); // 1 / sqrt(2 pi)

        // symmetric around 0
        assert_eq!(pdf(0.7), pdf(-0.7));
    }

    #[test]
    fn european_call() {
        let dp = DerivativeParameter::new(300.0, 250.0, 1.0, 0.03, 0.15);
        assert_approx_eq!(BlackScholesMerton::call(&dp).unwrap(), 58.8197, TOLERANCE);

        let dp = DerivativeParameter::new(310.0, 250.0, 3.5, 0.05, 0.25);
        assert_approx_eq!(BlackScholesMerton::call(&dp).unwrap(), 113.4155, TOLERANCE);
    }

    #[test]
    fn european_put() {
        let dp = DerivativeParameter::new(300.0, 250.0, 1.0, 0.03, 0.15);
        assert_approx_eq!(BlackScholesMerton::put(&dp).unwrap(), 1.4311, TOLERANCE);

        let dp = DerivativeParameter::new(310.0, 250.0, 3.5, 0.05, 0.25);
        assert_approx_eq!(BlackScholesMerton::put(&dp).unwrap(), 13.2797, TOLERANCE);
    }

    /// S=100, K=105, T=1, r=5%, vola=20%; figures cross-checked against
    /// standard Black-Scholes references.
    #[test]
    fn call_valuation_reference_scenario() {
        let dp = DerivativeParameter::new(100.0, 105.0, 1.0, 0.05, 0.2);
        let valuation = BlackScholesMerton::valuate(&dp, ExerciseType::Call).unwrap();

        assert_approx_eq!(valuation.price, 8.0214, 1e-3);
        assert_approx_eq!(valuation.delta, 0.542228, 1e-4);
        assert_approx_eq!(valuation.gamma, 0.0198353, 1e-5);
        assert_approx_eq!(valuation.theta, -6.2771, 1e-3);
        assert_approx_eq!(valuation.vega, 39.6705, 1e-3);
        assert_approx_eq!(valuation.rho, 46.2015, 1e-3);
    }

    #[test]
    fn put_valuation_reference_scenario() {
        let dp = DerivativeParameter::new(100.0, 105.0, 1.0, 0.05, 0.2);
        let valuation = BlackScholesMerton::valuate(&dp, ExerciseType::Put).unwrap();

        assert_approx_eq!(valuation.price, 7.9004, 1e-3);
        assert_approx_eq!(valuation.delta, -0.457772, 1e-4);
        assert_approx_eq!(valuation.theta, -6.6509, 1e-3);
        assert_approx_eq!(valuation.rho, -53.6776, 1e-3);

        // gamma and vega match the call branch, see shared_greeks_match
        assert_approx_eq!(valuation.gamma, 0.0198353, 1e-5);
        assert_approx_eq!(valuation.vega, 39.6705, 1e-3);
    }

    #[test]
    fn european_put_call_parity() {
        for dp in [
            DerivativeParameter::new(300.0, 250.0, 1.0, 0.03, 0.15),
            DerivativeParameter::new(100.0, 105.0, 1.0, 0.05, 0.2),
            DerivativeParameter::new(80.0, 150.0, 0.25, 0.0, 0.9),
        ] {
            let put_call_parity =
                BlackScholesMerton::call(&dp).unwrap() - BlackScholesMerton::put(&dp).unwrap();
            assert_approx_eq!(
                put_call_parity,
                dp.asset_price - dp.strike * (-dp.rfr * dp.time_to_expiration).exp(),
                1e-10
            );
        }
    }

    /// Strict bounds hold where the cdf has not saturated; far in or out of
    /// the money the f64 cdf rounds to exactly 0 or 1.
    #[test]
    fn delta_bounds() {
        for asset_price in [80.0, 100.0, 130.0] {
            for vola in [0.2, 0.5, 1.0] {
                for tte in [0.5, 1.0, 5.0] {
                    let dp = DerivativeParameter::new(asset_price, 105.0, tte, 0.05, vola);

                    let call = BlackScholesMerton::valuate(&dp, ExerciseType::Call).unwrap();
                    assert!(call.delta > 0.0 && call.delta < 1.0);

                    let put = BlackScholesMerton::valuate(&dp, ExerciseType::Put).unwrap();
                    assert!(put.delta > -1.0 && put.delta < 0.0);
                }
            }
        }
    }

    #[test]
    fn shared_greeks_match() {
        for asset_price in [50.0, 100.0, 150.0] {
            for rfr in [0.0, 0.05, 0.2] {
                let dp = DerivativeParameter::new(asset_price, 105.0, 1.0, rfr, 0.2);

                let call = BlackScholesMerton::valuate(&dp, ExerciseType::Call).unwrap();
                let put = BlackScholesMerton::valuate(&dp, ExerciseType::Put).unwrap();

                assert!(call.gamma > 0.0);
                assert!(call.vega > 0.0);
                assert_eq!(call.gamma, put.gamma);
                assert_eq!(call.vega, put.vega);
            }
        }
    }

    #[test]
    fn at_the_money_parity_without_rates() {
        // with S == K and r == 0, d2 == -d1 and both branches collapse to the same value
        let dp = DerivativeParameter::new(100.0, 100.0, 1.0, 0.0, 0.2);
        let call = BlackScholesMerton::call(&dp).unwrap();
        let put = BlackScholesMerton::put(&dp).unwrap();
        assert_approx_eq!(call, put, 1e-10);
    }

    #[test]
    fn call_price_non_decreasing_in_vola() {
        let mut previous = 0.0;
        for vola_step in 1..=20 {
            let vola = 0.05 * vola_step as f64;
            let dp = DerivativeParameter::new(100.0, 105.0, 1.0, 0.05, vola);
            let price = BlackScholesMerton::call(&dp).unwrap();
            assert!(price >= previous);
            previous = price;
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let dp = DerivativeParameter::new(100.0, 105.0, 0.0, 0.05, 0.2);
        assert_eq!(
            BlackScholesMerton::valuate(&dp, ExerciseType::Call),
            Err(PricingError::InvalidParameter {
                name: "time_to_expiration",
                value: 0.0
            })
        );

        let dp = DerivativeParameter::new(100.0, 105.0, 1.0, 0.05, -0.2);
        assert_eq!(
            BlackScholesMerton::valuate(&dp, ExerciseType::Put),
            Err(PricingError::InvalidParameter {
                name: "vola",
                value: -0.2
            })
        );

        let dp = DerivativeParameter::new(-100.0, 105.0, 1.0, 0.05, 0.2);
        assert!(BlackScholesMerton::call(&dp).is_err());

        let dp = DerivativeParameter::new(100.0, 0.0, 1.0, 0.05, 0.2);
        assert!(BlackScholesMerton::put(&dp).is_err());
    }

    #[test]
    fn tiny_time_to_expiration_saturates() {
        // deep in the money with nearly no time left: the cdf saturates and
        // the valuation stays finite, close to intrinsic value
        let dp = DerivativeParameter::new(100.0, 50.0, 1e-9, 0.05, 0.2);
        let valuation = BlackScholesMerton::valuate(&dp, ExerciseType::Call).unwrap();

        assert!(valuation.price.is_finite());
        assert!(valuation.delta.is_finite());
        assert!(valuation.gamma.is_finite());
        assert!(valuation.theta.is_finite());
        assert!(valuation.vega.is_finite());
        assert!(valuation.rho.is_finite());

        assert_approx_eq!(valuation.price, 50.0, 1e-6);
        assert_approx_eq!(valuation.delta, 1.0, 1e-9);
    }

    #[test]
    fn valuation_is_deterministic() {
        let dp = DerivativeParameter::new(100.0, 105.0, 1.0, 0.05, 0.2);
        let first = BlackScholesMerton::valuate(&dp, ExerciseType::Call).unwrap();
        let second = BlackScholesMerton::valuate(&dp, ExerciseType::Call).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.greek(Greek::Delta), second.delta);
    }
}
