// demos/pricing_demo.rs

//! Console rendition of the dashboard's scalar panel
//!
//! This demo shows how to:
//! 1. Build the default dashboard layout
//! 2. Take a slider snapshot and convert it to contract parameters
//! 3. Price the contract and compute its Greeks
//! 4. Render the price box and Greek boxes exactly as the dashboard does

use anyhow::Result;
use pricer_lib::{format_greeks, format_price, DashboardConfig, MarketInputs, OptionType};

fn main() -> Result<()> {
    println!("Black-Scholes Pricer Panel Demo");
    println!("===============================");

    let config = DashboardConfig::default();
    config.validate()?;

    for option_type in [OptionType::Call, OptionType::Put] {
        let inputs = MarketInputs {
            option_type,
            ..MarketInputs::defaults(&config)
        };
        let contract = inputs.to_contract();

        println!(
            "\n{} | S={:.0} K={:.0} T={:.2}y r={:.1}% vol={:.1}%",
            option_type,
            inputs.spot,
            inputs.strike,
            inputs.maturity_years,
            inputs.rate_pct,
            inputs.vol_pct
        );

        println!("  Price: {}", format_price(contract.price()));
        for line in format_greeks(&contract.greeks()) {
            println!("  {}", line);
        }
    }

    Ok(())
}
