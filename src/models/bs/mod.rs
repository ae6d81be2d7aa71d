// Closed-form Black-Scholes pricing for European options on a non-dividend-paying
// underlying. Greeks, dividends and implied volatility are not part of this model.

use crate::error::InvalidInputError;
use crate::models::traits::OptionPricer;
use crate::models::utils::{discount_factor, log_moneyness, standard_normal_cdf};
use crate::pricing::types::PricingRequest;

/// Black-Scholes d1 from raw inputs.
///
/// `d1 = [ln(S/K) + (r + σ²/2)·T] / (σ·√T)`
///
/// Inputs are validated first, so a non-positive `sigma` or `t` yields
/// [`InvalidInputError`] instead of a division by zero.
pub fn d1(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Result<f64, InvalidInputError> {
    PricingRequest::new(s, k, r, sigma, t).map(|request| request.d1())
}

pub(crate) fn d1_unchecked(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> f64 {
    (log_moneyness(s, k) + (r + 0.5 * sigma.powi(2)) * t) / (sigma * t.sqrt())
}

/// Black-Scholes d2: `d1 - σ·√T`
pub fn d2(d1: f64, sigma: f64, t: f64) -> f64 {
    d1 - sigma * t.sqrt()
}

/// Price of a European call option under Black-Scholes assumptions.
pub fn bs_call_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Result<f64, InvalidInputError> {
    let request = PricingRequest::new(s, k, r, sigma, t)?;
    Ok(BlackScholes.call_price(&request))
}

/// Price of a European put option under Black-Scholes assumptions.
pub fn bs_put_price(s: f64, k: f64, r: f64, sigma: f64, t: f64) -> Result<f64, InvalidInputError> {
    let request = PricingRequest::new(s, k, r, sigma, t)?;
    Ok(BlackScholes.put_price(&request))
}

/// Stateless Black-Scholes pricer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlackScholes;

impl OptionPricer for BlackScholes {
    /// `S·N(d1) - K·e^(-rT)·N(d2)`
    fn call_price(&self, request: &PricingRequest) -> f64 {
        let d1 = request.d1();
        let d2 = d2(d1, request.volatility(), request.time_to_maturity());
        let df = discount_factor(request.risk_free_rate(), request.time_to_maturity());

        request.spot_price() * standard_normal_cdf(d1)
            - request.strike_price() * df * standard_normal_cdf(d2)
    }

    /// `K·e^(-rT)·N(-d2) - S·N(-d1)`
    fn put_price(&self, request: &PricingRequest) -> f64 {
        let d1 = request.d1();
        let d2 = d2(d1, request.volatility(), request.time_to_maturity());
        let df = discount_factor(request.risk_free_rate(), request.time_to_maturity());

        request.strike_price() * df * standard_normal_cdf(-d2)
            - request.spot_price() * standard_normal_cdf(-d1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingInput;

    const TOLERANCE: f64 = 1e-4;

    #[test]
    fn test_d1_uses_log_moneyness() {
        let d1 = d1(100.0, 105.0, 0.05, 0.2, 0.5).unwrap();
        // ln(100/105) + 0.035 over 0.2 * sqrt(0.5)
        let expected = ((100.0_f64 / 105.0).ln() + 0.035) / (0.2 * 0.5_f64.sqrt());
        assert!((d1 - expected).abs() < 1e-12);
        assert!((d1 - (-0.0975112)).abs() < 1e-6);

        let d2 = d2(d1, 0.2, 0.5);
        assert!((d2 - (-0.2389325)).abs() < 1e-6);
    }

    #[test]
    fn test_d1_rejects_zero_time() {
        let err = d1(100.0, 105.0, 0.05, 0.2, 0.0).unwrap_err();
        assert_eq!(err.input, PricingInput::TimeToMaturity);
    }

    #[test]
    fn test_european_call() {
        let call = bs_call_price(300.0, 250.0, 0.03, 0.15, 1.0).unwrap();
        assert!((call - 58.8197).abs() < TOLERANCE, "call = {}", call);

        let call = bs_call_price(310.0, 250.0, 0.05, 0.25, 3.5).unwrap();
        assert!((call - 113.4155).abs() < TOLERANCE, "call = {}", call);
    }

    #[test]
    fn test_european_put() {
        let put = bs_put_price(300.0, 250.0, 0.03, 0.15, 1.0).unwrap();
        assert!((put - 1.4312).abs() < TOLERANCE, "put = {}", put);

        let put = bs_put_price(310.0, 250.0, 0.05, 0.25, 3.5).unwrap();
        assert!((put - 13.2798).abs() < TOLERANCE, "put = {}", put);
    }

    #[test]
    fn test_pricer_matches_free_functions() {
        let request = PricingRequest::new(102.0, 100.0, 0.02, 0.2, 0.5).unwrap();
        let call = BlackScholes.call_price(&request);
        let put = BlackScholes.put_price(&request);

        assert_eq!(call, bs_call_price(102.0, 100.0, 0.02, 0.2, 0.5).unwrap());
        assert_eq!(put, bs_put_price(102.0, 100.0, 0.02, 0.2, 0.5).unwrap());
        assert!((call - 7.288151).abs() < 1e-6);
        assert!((put - 4.293135).abs() < 1e-6);
    }
}
