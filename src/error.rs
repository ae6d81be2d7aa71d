//! Error types for option pricing.

use std::fmt;
use thiserror::Error;

/// The pricing inputs checked before any arithmetic.
///
/// The risk-free rate only has to be finite; every other input must also be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PricingInput {
    TimeToMaturity,
    Volatility,
    SpotPrice,
    StrikePrice,
    RiskFreeRate,
}

impl PricingInput {
    /// The constraint this input failed.
    pub fn requirement(&self) -> &'static str {
        match self {
            PricingInput::RiskFreeRate => "risk_free_rate must be finite",
            _ => {
                "all inputs (time_to_maturity, volatility, spot_price, strike_price) \
                 must be positive and finite"
            }
        }
    }
}

impl fmt::Display for PricingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PricingInput::TimeToMaturity => "time_to_maturity",
            PricingInput::Volatility => "volatility",
            PricingInput::SpotPrice => "spot_price",
            PricingInput::StrikePrice => "strike_price",
            PricingInput::RiskFreeRate => "risk_free_rate",
        };
        f.write_str(name)
    }
}

/// Raised when a pricing request violates its input constraints.
///
/// Carries the first offending input (checked in the order time to maturity,
/// volatility, spot price, strike price, risk-free rate) and the value that was supplied.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("{}: got {input} = {value}", .input.requirement())]
pub struct InvalidInputError {
    pub input: PricingInput,
    pub value: f64,
}

impl InvalidInputError {
    pub fn new(input: PricingInput, value: f64) -> Self {
        Self { input, value }
    }
}
