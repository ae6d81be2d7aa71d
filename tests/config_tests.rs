#![cfg(feature = "serde")]

use blackscholes_lib::{
    call_price, price_options, put_price, OptionType, PricingConfig, PricingInput,
};

const DEMO_CONFIG: &str = "demos/data/contracts.toml";

/// Loads the demo contract file and prices every contract
#[test]
fn test_load_demo_config() {
    let config = PricingConfig::from_file(DEMO_CONFIG).expect("Failed to load demo config");

    assert_eq!(config.decimal_places, 4);
    assert_eq!(config.market.risk_free_rate, 0.05);
    assert_eq!(config.contracts.len(), 4);

    let contracts = config.contracts().expect("demo contracts should be valid");
    let results = price_options(&contracts);
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r.price.is_finite() && r.price > 0.0));

    // the last contract overrides the market rate
    let put = contracts
        .iter()
        .find(|c| c.option_type == OptionType::Put && c.request.strike_price() == 60.0)
        .expect("put at strike 60");
    assert_eq!(put.request.risk_free_rate(), -0.01);
}

#[test]
fn test_reference_preset_prices() {
    let config = PricingConfig::reference();
    let results = price_options(&config.contracts().unwrap());

    let call = results
        .iter()
        .find(|r| r.option_type == OptionType::Call)
        .unwrap();
    let put = results
        .iter()
        .find(|r| r.option_type == OptionType::Put)
        .unwrap();

    assert_eq!(call.price, call_price(100.0, 105.0, 0.05, 0.2, 0.5).unwrap());
    assert_eq!(put.price, put_price(100.0, 105.0, 0.05, 0.2, 0.5).unwrap());
}

#[test]
fn test_invalid_contract_reports_input() {
    let config = PricingConfig::from_toml_str(
        r#"
        [[contracts]]
        option_type = "call"
        spot_price = 100.0
        strike_price = 105.0
        volatility = 0.0
        time_to_maturity = 0.5
        "#,
    )
    .expect("config itself parses");

    let err = config.contracts().unwrap_err();
    assert_eq!(err.input, PricingInput::Volatility);
    assert_eq!(err.value, 0.0);
}

#[test]
fn test_unknown_option_type_is_parse_error() {
    let result = PricingConfig::from_toml_str(
        r#"
        [[contracts]]
        option_type = "straddle"
        spot_price = 100.0
        strike_price = 105.0
        volatility = 0.2
        time_to_maturity = 0.5
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_missing_file_error_names_path() {
    let err = PricingConfig::from_file("does/not/exist.toml").unwrap_err();
    assert!(
        format!("{:#}", err).contains("does/not/exist.toml"),
        "unexpected error: {:#}",
        err
    );
}
