use anyhow::{anyhow, Error};
use std::fmt;
use std::str::FromStr;

use crate::error::{InvalidInputError, PricingInput};
use crate::models::bs;

/// Option type: call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    /// Payoff if exercised immediately: `max(S - K, 0)` for calls, `max(K - S, 0)` for puts.
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("call"),
            OptionType::Put => f.write_str("put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(anyhow!("Invalid option type: {}", s)),
        }
    }
}

/// Rejects requests with a non-positive or non-finite spot, strike, volatility or time to
/// maturity, or a non-finite risk-free rate.
///
/// Inputs are checked in the order time to maturity, volatility, spot price, strike price,
/// risk-free rate and the first violation is reported. NaN and infinities never pass. The
/// risk-free rate carries no sign constraint.
pub fn validate_inputs(
    spot_price: f64,
    strike_price: f64,
    risk_free_rate: f64,
    volatility: f64,
    time_to_maturity: f64,
) -> Result<(), InvalidInputError> {
    let positive = [
        (PricingInput::TimeToMaturity, time_to_maturity),
        (PricingInput::Volatility, volatility),
        (PricingInput::SpotPrice, spot_price),
        (PricingInput::StrikePrice, strike_price),
    ];

    for (input, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(InvalidInputError::new(input, value));
        }
    }

    if !risk_free_rate.is_finite() {
        return Err(InvalidInputError::new(
            PricingInput::RiskFreeRate,
            risk_free_rate,
        ));
    }
    Ok(())
}

/// The five Black-Scholes inputs for a single European option.
///
/// Only obtainable through [`PricingRequest::new`], so every instance satisfies the input
/// constraints and can be priced without further checks. Derived quantities such as `d1` and
/// `d2` are recomputed on each call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingRequest {
    /// Current price of the underlying
    spot_price: f64,
    /// Strike price of the option
    strike_price: f64,
    /// Annualized continuously-compounded risk-free rate (any sign, finite)
    risk_free_rate: f64,
    /// Annualized volatility (as decimal, e.g., 0.2 for 20%)
    volatility: f64,
    /// Time to maturity in years
    time_to_maturity: f64,
}

impl PricingRequest {
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        risk_free_rate: f64,
        volatility: f64,
        time_to_maturity: f64,
    ) -> Result<Self, InvalidInputError> {
        validate_inputs(
            spot_price,
            strike_price,
            risk_free_rate,
            volatility,
            time_to_maturity,
        )?;

        Ok(Self {
            spot_price,
            strike_price,
            risk_free_rate,
            volatility,
            time_to_maturity,
        })
    }

    pub fn spot_price(&self) -> f64 {
        self.spot_price
    }

    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn time_to_maturity(&self) -> f64 {
        self.time_to_maturity
    }

    pub fn d1(&self) -> f64 {
        bs::d1_unchecked(
            self.spot_price,
            self.strike_price,
            self.risk_free_rate,
            self.volatility,
            self.time_to_maturity,
        )
    }

    pub fn d2(&self) -> f64 {
        bs::d2(self.d1(), self.volatility, self.time_to_maturity)
    }
}

/// A priceable contract: option type plus its validated inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionContract {
    pub option_type: OptionType,
    pub request: PricingRequest,
}

impl OptionContract {
    pub fn new(option_type: OptionType, request: PricingRequest) -> Self {
        Self {
            option_type,
            request,
        }
    }
}

/// Lightweight struct to hold the pricing output for each contract
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    pub option_type: OptionType,
    pub spot_price: f64,
    pub strike_price: f64,
    /// Time to maturity in years
    pub time_to_maturity: f64,
    pub d1: f64,
    pub d2: f64,
    /// Model option price
    pub price: f64,
}
