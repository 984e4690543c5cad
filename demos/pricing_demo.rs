// demos/pricing_demo.rs

//! Demonstration of Black-Scholes call pricing
//!
//! This example shows how to:
//! 1. Price the calculator's default inputs
//! 2. Compare the two normal CDF providers
//! 3. Walk a spot ladder and watch price and d1/d2 move
//! 4. Handle rejected inputs

use anyhow::Result;
use bs_calculator::{
    price_call, shell::format_quote, BlackScholesCall, CallInputs, DisplayConfig, ErfNormal,
    InputDefaults, PricingError, StatrsNormal,
};

fn main() -> Result<()> {
    println!("Black-Scholes Call Pricing Demo");
    println!("===============================");

    let inputs: CallInputs = InputDefaults::default().into();
    println!(
        "Inputs: S={} K={} T={} r={} sigma={}",
        inputs.spot, inputs.strike, inputs.years_to_exp, inputs.rate, inputs.volatility
    );

    println!("\nStep 1: Pricing with the default provider...");
    let quote = price_call(
        inputs.spot,
        inputs.strike,
        inputs.years_to_exp,
        inputs.rate,
        inputs.volatility,
    )?;
    print!("{}", format_quote(&quote, &DisplayConfig::default()));

    println!("\nStep 2: Comparing CDF providers...");
    let erf = BlackScholesCall::new(ErfNormal).price(&inputs)?;
    let statrs = BlackScholesCall::new(StatrsNormal::new()).price(&inputs)?;
    println!("  erf:    {:.12}", erf.price);
    println!("  statrs: {:.12}", statrs.price);
    println!("  diff:   {:.3e}", (erf.price - statrs.price).abs());

    println!("\nStep 3: Spot ladder...");
    println!("{:>8} {:>10} {:>10} {:>10}", "Spot", "Price", "d1", "d2");
    println!("{}", "-".repeat(41));
    for spot in [80.0, 90.0, 95.0, 100.0, 110.0, 120.0] {
        let q = BlackScholesCall::standard().price(&CallInputs { spot, ..inputs })?;
        println!("{:>8.2} {:>10.4} {:>10.4} {:>10.4}", spot, q.price, q.d1, q.d2);
    }

    println!("\nStep 4: Rejected inputs...");
    match price_call(100.0, 95.0, 0.0, 0.05, 0.2) {
        Err(PricingError::InvalidInput(msg)) => println!("  T=0 rejected: {}", msg),
        Ok(q) => println!("  unexpected quote: {:?}", q),
    }

    Ok(())
}
