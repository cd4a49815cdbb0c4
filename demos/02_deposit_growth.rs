/// deposit growth - simple interest versus monthly capitalization
use fincalc_rs::render::deposit_report;
use fincalc_rs::{deposit_projection, deposit_revenue, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let initial = Money::from_major(10_000);
    let rate = Rate::from_percentage(dec!(6));
    let term_months = 12;

    let revenue = deposit_revenue(initial, rate, term_months)?;
    let projection = deposit_projection(initial, rate, term_months)?;

    println!("{}", deposit_report(&revenue, &projection));

    let bonus = revenue.compounded - revenue.simple;
    println!("\ncapitalization earns an extra {}", bonus.round_dp(2));

    Ok(())
}
