// demos/pricing_demo.rs

//! Demonstration of Black-Scholes call and put pricing
//!
//! Prices one example contract from hard-coded inputs and prints both prices to four
//! decimal places. Invalid inputs print the validation message instead of aborting.

use blackscholes_lib::{call_price, put_price, InvalidInputError};

/// Inputs for one demonstration run
struct DemoInputs {
    spot_price: f64,
    strike_price: f64,
    risk_free_rate: f64,
    volatility: f64,
    time_to_maturity: f64,
}

fn main() {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let example = DemoInputs {
        spot_price: 100.0,
        strike_price: 105.0,
        risk_free_rate: 0.05,  // 5% risk-free rate
        volatility: 0.2,       // 20% annualized volatility
        time_to_maturity: 0.5, // ~6 months
    };
    run(&example);

    println!("\nExpired contract (time to maturity = 0):");
    let expired = DemoInputs {
        time_to_maturity: 0.0,
        ..example
    };
    run(&expired);
}

fn run(inputs: &DemoInputs) {
    println!("  Spot: {:.2}", inputs.spot_price);
    println!("  Strike: {:.2}", inputs.strike_price);
    println!("  Rate: {:.1}%", inputs.risk_free_rate * 100.0);
    println!("  Vol: {:.1}%", inputs.volatility * 100.0);
    println!("  Time: {:.4} years", inputs.time_to_maturity);

    match price_both(inputs) {
        Ok((call, put)) => {
            println!("  Call price: {:.4}", call);
            println!("  Put price:  {:.4}", put);
        }
        Err(e) => println!("  Error: {}", e),
    }
}

fn price_both(inputs: &DemoInputs) -> Result<(f64, f64), InvalidInputError> {
    let call = call_price(
        inputs.spot_price,
        inputs.strike_price,
        inputs.risk_free_rate,
        inputs.volatility,
        inputs.time_to_maturity,
    )?;
    let put = put_price(
        inputs.spot_price,
        inputs.strike_price,
        inputs.risk_free_rate,
        inputs.volatility,
        inputs.time_to_maturity,
    )?;
    Ok((call, put))
}
