//! # Blackscholes-Lib: European Option Pricing
//!
//! `blackscholes-lib` prices European call and put options with the closed-form
//! Black-Scholes formulas, given the spot price, strike price, annualized risk-free rate,
//! annualized volatility and time to maturity in years.
//!
//! ## Core Features
//!
//! - **Validated inputs**: spot, strike, volatility and time to maturity must be strictly
//!   positive; violations surface as [`InvalidInputError`]
//! - **Closed-form pricing**: `d1`, `d2` and the standard normal CDF combined into call and
//!   put prices
//! - **Batch pricing**: price a set of contracts in one call, sorted by strike
//! - **TOML configuration**: load contracts and market parameters from a file
//!
//! ## Quick Start
//!
//! ```rust
//! use blackscholes_lib::{call_price, put_price};
//!
//! let call = call_price(100.0, 105.0, 0.05, 0.2, 0.5)?;
//! let put = put_price(100.0, 105.0, 0.05, 0.2, 0.5)?;
//!
//! // put-call parity: C - P = S - K·e^(-rT)
//! let parity = 100.0 - 105.0 * (-0.05_f64 * 0.5).exp();
//! assert!((call - put - parity).abs() < 1e-9);
//! # Ok::<(), blackscholes_lib::InvalidInputError>(())
//! ```
//!
//! ## Model Assumptions
//!
//! - European exercise only
//! - No dividends, no transaction costs
//! - Constant risk-free rate and volatility
//! - Log-normally distributed underlying prices

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod pricing;

// ================================================================================================
// IMPORTS
// ================================================================================================

use std::cmp::Ordering;

use models::{bs, traits::OptionPricer};

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{InvalidInputError, PricingInput};

pub use models::bs::BlackScholes;
pub use models::utils::standard_normal_cdf;

pub use pricing::types::{OptionContract, OptionType, PricingRequest, PricingResult};

#[cfg(feature = "serde")]
pub use pricing::config::{ContractConfig, MarketParameters, PricingConfig};

// ================================================================================================
// PRICING API
// ================================================================================================

/// Price a European call option.
///
/// `C = S·N(d1) - K·e^(-rT)·N(d2)`
///
/// # Arguments
///
/// * `spot_price` - Current price of the underlying (> 0)
/// * `strike_price` - Strike price (> 0)
/// * `risk_free_rate` - Annualized risk-free rate, any sign
/// * `volatility` - Annualized volatility as decimal (> 0)
/// * `time_to_maturity` - Time to maturity in years (> 0)
///
/// # Errors
///
/// [`InvalidInputError`] if spot, strike, volatility or time to maturity is not strictly
/// positive. The error is returned as-is from validation.
///
/// # Example
///
/// ```rust
/// use blackscholes_lib::call_price;
///
/// let price = call_price(300.0, 250.0, 0.03, 0.15, 1.0).unwrap();
/// assert!((price - 58.8198).abs() < 1e-4);
///
/// assert!(call_price(300.0, 250.0, 0.03, 0.15, 0.0).is_err());
/// ```
pub fn call_price(
    spot_price: f64,
    strike_price: f64,
    risk_free_rate: f64,
    volatility: f64,
    time_to_maturity: f64,
) -> Result<f64, InvalidInputError> {
    bs::bs_call_price(
        spot_price,
        strike_price,
        risk_free_rate,
        volatility,
        time_to_maturity,
    )
}

/// Price a European put option.
///
/// `P = K·e^(-rT)·N(-d2) - S·N(-d1)`
///
/// Takes the same arguments and fails under the same conditions as [`call_price`].
///
/// # Example
///
/// ```rust
/// use blackscholes_lib::put_price;
///
/// let price = put_price(300.0, 250.0, 0.03, 0.15, 1.0).unwrap();
/// assert!((price - 1.4312).abs() < 1e-4);
/// ```
pub fn put_price(
    spot_price: f64,
    strike_price: f64,
    risk_free_rate: f64,
    volatility: f64,
    time_to_maturity: f64,
) -> Result<f64, InvalidInputError> {
    bs::bs_put_price(
        spot_price,
        strike_price,
        risk_free_rate,
        volatility,
        time_to_maturity,
    )
}

/// Price a European option of the given type.
///
/// Dispatches to [`call_price`] or [`put_price`].
pub fn price_option(
    option_type: OptionType,
    spot_price: f64,
    strike_price: f64,
    risk_free_rate: f64,
    volatility: f64,
    time_to_maturity: f64,
) -> Result<f64, InvalidInputError> {
    let request = PricingRequest::new(
        spot_price,
        strike_price,
        risk_free_rate,
        volatility,
        time_to_maturity,
    )?;
    Ok(BlackScholes.price(option_type, &request))
}

/// Price a batch of contracts with the Black-Scholes model.
///
/// Contracts are already validated, so pricing cannot fail. Results carry the `d1` and `d2`
/// values used for each price and are sorted by strike price in ascending order, calls before
/// puts at the same strike.
///
/// # Example
///
/// ```rust
/// use blackscholes_lib::{price_options, OptionContract, OptionType, PricingRequest};
///
/// let contracts = vec![
///     OptionContract::new(OptionType::Put, PricingRequest::new(100.0, 110.0, 0.05, 0.2, 0.5)?),
///     OptionContract::new(OptionType::Call, PricingRequest::new(100.0, 90.0, 0.05, 0.2, 0.5)?),
/// ];
///
/// let results = price_options(&contracts);
/// assert_eq!(results[0].strike_price, 90.0);
/// assert!(results.iter().all(|r| r.price > 0.0));
/// # Ok::<(), blackscholes_lib::InvalidInputError>(())
/// ```
pub fn price_options(contracts: &[OptionContract]) -> Vec<PricingResult> {
    price_options_with(&BlackScholes, contracts)
}

/// Price a batch of contracts with any [`OptionPricer`].
///
/// Only `price` comes from `pricer`. The `d1` and `d2` fields of each result are always the
/// Black-Scholes values of the contract's request, whatever model produced the price.
pub fn price_options_with<P: OptionPricer>(
    pricer: &P,
    contracts: &[OptionContract],
) -> Vec<PricingResult> {
    let mut results = Vec::with_capacity(contracts.len());

    for contract in contracts {
        let request = &contract.request;
        let d1 = request.d1();

        results.push(PricingResult {
            option_type: contract.option_type,
            spot_price: request.spot_price(),
            strike_price: request.strike_price(),
            time_to_maturity: request.time_to_maturity(),
            d1,
            d2: bs::d2(d1, request.volatility(), request.time_to_maturity()),
            price: pricer.price(contract.option_type, request),
        });
    }

    results.sort_by(|a, b| {
        a.strike_price
            .partial_cmp(&b.strike_price)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.option_type.cmp(&b.option_type))
    });
    results
}
