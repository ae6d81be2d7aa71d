// demos/config_demo.rs

//! Price the contracts listed in a TOML configuration file
//!
//! Usage: `cargo run --example config_demo [path/to/contracts.toml]`
//! Defaults to `demos/data/contracts.toml`. Set `RUST_LOG=debug` to see loading details.

use anyhow::Result;
use blackscholes_lib::{price_options, PricingConfig};

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| {
        format!("{}/demos/data/contracts.toml", env!("CARGO_MANIFEST_DIR"))
    });

    println!("Black-Scholes Configuration Demo");
    println!("================================");
    println!("Configuration: {}", path);

    let config = PricingConfig::from_file(&path)?;
    let contracts = config.contracts()?;
    let results = price_options(&contracts);
    let dp = config.decimal_places;

    println!("Contracts priced: {}", results.len());
    println!(
        "\n{:<6} {:<10} {:<10} {:<10} {:<10} {:<10} {:<12}",
        "Type", "Spot", "Strike", "T", "d1", "d2", "Price"
    );
    println!("{}", "-".repeat(72));

    for result in &results {
        println!(
            "{:<6} {:<10.2} {:<10.2} {:<10.4} {:<10.4} {:<10.4} {:<12.dp$}",
            result.option_type,
            result.spot_price,
            result.strike_price,
            result.time_to_maturity,
            result.d1,
            result.d2,
            result.price,
            dp = dp
        );
    }

    Ok(())
}
