/// amortization schedule - month-by-month breakdown of an annuity loan
use fincalc_rs::render::credit_report;
use fincalc_rs::{amortization_schedule, loan_summary, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let amount = Money::from_major(250_000);
    let rate = Rate::from_percentage(dec!(9.5));
    let term_months = 24;

    let summary = loan_summary(amount, rate, term_months)?;
    let schedule = amortization_schedule(amount, rate, term_months)?;

    // the same report the chat layer sends
    println!("{}", credit_report(&summary, &schedule));

    // the balance is fully amortized by the final payment
    if let Some(last) = schedule.last() {
        println!("\nfinal balance: {}", last.remaining_balance.round_dp(2));
    }

    Ok(())
}
