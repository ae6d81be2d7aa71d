use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::InvalidInputError;
use crate::pricing::types::{OptionContract, OptionType, PricingRequest};

/// Market-wide parameters shared by every contract in a configuration
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MarketParameters {
    /// Annualized risk-free rate (may be negative)
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
}

impl Default for MarketParameters {
    fn default() -> Self {
        Self {
            risk_free_rate: default_risk_free_rate(),
        }
    }
}

/// A single contract as written in a configuration file.
///
/// Values are unchecked until converted with [`ContractConfig::to_contract`].
#[derive(Debug, Clone, Deserialize)]
pub struct ContractConfig {
    pub option_type: OptionType,
    pub spot_price: f64,
    pub strike_price: f64,
    pub volatility: f64,
    /// Time to maturity in years
    pub time_to_maturity: f64,
    /// Overrides the market risk-free rate for this contract
    #[serde(default)]
    pub risk_free_rate: Option<f64>,
}

impl ContractConfig {
    pub fn to_contract(
        &self,
        market: &MarketParameters,
    ) -> Result<OptionContract, InvalidInputError> {
        let request = PricingRequest::new(
            self.spot_price,
            self.strike_price,
            self.risk_free_rate.unwrap_or(market.risk_free_rate),
            self.volatility,
            self.time_to_maturity,
        )?;
        Ok(OptionContract::new(self.option_type, request))
    }
}

/// Main configuration struct for pricing runs
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub market: MarketParameters,

    /// Decimal places used when printing prices
    #[serde(default = "default_decimal_places")]
    pub decimal_places: usize,

    #[serde(default)]
    pub contracts: Vec<ContractConfig>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            market: MarketParameters::default(),
            decimal_places: default_decimal_places(),
            contracts: Vec::new(),
        }
    }
}

impl PricingConfig {
    /// Reference scenario: S=100, K=105, r=5%, σ=20%, T=6 months, as one call and one put
    pub fn reference() -> Self {
        let contract = |option_type| ContractConfig {
            option_type,
            spot_price: 100.0,
            strike_price: 105.0,
            volatility: 0.2,
            time_to_maturity: 0.5,
            risk_free_rate: None,
        };

        Self {
            market: MarketParameters {
                risk_free_rate: 0.05,
            },
            decimal_places: default_decimal_places(),
            contracts: vec![contract(OptionType::Call), contract(OptionType::Put)],
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse pricing configuration")
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading pricing configuration from {}", path.display());

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pricing configuration {}", path.display()))?;
        let config = Self::from_toml_str(&contents)?;

        debug!(
            "Parsed {} contract(s), risk-free rate {}",
            config.contracts.len(),
            config.market.risk_free_rate
        );
        Ok(config)
    }

    /// Validate every configured contract; the first invalid one aborts the conversion.
    pub fn contracts(&self) -> Result<Vec<OptionContract>, InvalidInputError> {
        self.contracts
            .iter()
            .map(|contract| contract.to_contract(&self.market))
            .collect()
    }
}

fn default_risk_free_rate() -> f64 {
    0.05
}

fn default_decimal_places() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = PricingConfig::from_toml_str("").unwrap();
        assert_eq!(config.market.risk_free_rate, 0.05);
        assert_eq!(config.decimal_places, 4);
        assert!(config.contracts.is_empty());
    }

    #[test]
    fn test_reference_preset() {
        let contracts = PricingConfig::reference().contracts().unwrap();
        assert_eq!(contracts.len(), 2);
        assert_eq!(contracts[0].option_type, OptionType::Call);
        assert_eq!(contracts[1].option_type, OptionType::Put);
        assert_eq!(contracts[1].request.risk_free_rate(), 0.05);
    }

    #[test]
    fn test_contract_rate_override() {
        let config = PricingConfig::from_toml_str(
            r#"
            [market]
            risk_free_rate = 0.03

            [[contracts]]
            option_type = "put"
            spot_price = 50.0
            strike_price = 60.0
            volatility = 0.4
            time_to_maturity = 2.0
            risk_free_rate = -0.01
            "#,
        )
        .unwrap();

        let contracts = config.contracts().unwrap();
        assert_eq!(contracts[0].request.risk_free_rate(), -0.01);
    }
}
