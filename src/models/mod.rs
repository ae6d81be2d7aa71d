pub mod bs;

/// Common traits used by all pricing models
pub mod traits {
    use crate::pricing::types::{OptionType, PricingRequest};

    /// Pricer for European options over validated inputs.
    pub trait OptionPricer {
        fn call_price(&self, request: &PricingRequest) -> f64;
        fn put_price(&self, request: &PricingRequest) -> f64;

        fn price(&self, option_type: OptionType, request: &PricingRequest) -> f64 {
            match option_type {
                OptionType::Call => self.call_price(request),
                OptionType::Put => self.put_price(request),
            }
        }
    }
}

/// Utility functions for option pricing and calculations
pub mod utils {
    use std::f64::consts::SQRT_2;

    /// Calculate log-moneyness: ln(S/K)
    pub fn log_moneyness(spot: f64, strike: f64) -> f64 {
        (spot / strike).ln()
    }

    /// Continuous discount factor e^(-r*T)
    pub fn discount_factor(rate: f64, t: f64) -> f64 {
        (-rate * t).exp()
    }

    /// Standard normal cumulative distribution function.
    ///
    /// `N(x) = 0.5 * [1 + erf(x / sqrt(2))]`, defined for every real `x`.
    pub fn standard_normal_cdf(x: f64) -> f64 {
        0.5 * (1.0 + libm::erf(x / SQRT_2))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_cdf_center_and_table_values() {
            assert_eq!(standard_normal_cdf(0.0), 0.5);
            assert!((standard_normal_cdf(1.0) - 0.841344746).abs() < 1e-9);
            assert!((standard_normal_cdf(-1.96) - 0.024997895).abs() < 1e-9);
        }

        #[test]
        fn test_cdf_tails() {
            assert_eq!(standard_normal_cdf(-40.0), 0.0);
            assert_eq!(standard_normal_cdf(40.0), 1.0);
            assert!(standard_normal_cdf(f64::NEG_INFINITY) == 0.0);
        }

        #[test]
        fn test_log_moneyness_and_discount() {
            assert_eq!(log_moneyness(100.0, 100.0), 0.0);
            assert!((log_moneyness(100.0, 105.0) + 0.048790164).abs() < 1e-9);
            assert_eq!(discount_factor(0.05, 0.0), 1.0);
            assert!(discount_factor(-0.01, 1.0) > 1.0);
        }
    }
}
