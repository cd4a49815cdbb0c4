/// quick start - minimal example to get started
use fincalc_rs::{loan_summary, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // summarize a 100,000 loan over a year at 12%
    let summary = loan_summary(
        Money::from_major(100_000),
        Rate::from_percentage(dec!(12)),
        12,
    )?;

    println!("monthly payment: {}", summary.monthly_payment.round_dp(2));
    println!("overpayment:     {}", summary.overpayment.round_dp(2));

    // all result types serialize for downstream consumers
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
