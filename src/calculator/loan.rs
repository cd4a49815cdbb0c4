use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::validate_inputs;
use crate::decimal::{Money, Rate};
use crate::errors::Result;

/// headline figures for an annuity loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: Money,
    pub principal: Money,
    pub total_paid: Money,
    pub overpayment: Money,
    /// overpayment relative to the principal
    pub effective_rate: Rate,
}

/// one month of an amortization schedule, ordered by month index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub remaining_balance: Money,
}

/// fixed monthly payment that fully amortizes the loan over its term
///
/// payment = amount * (r + r / ((1 + r)^n - 1)) with r the monthly rate;
/// the denominator vanishes at r = 0, where the linear limit amount / n
/// applies instead
pub fn annuity_payment(amount: Money, annual_rate: Rate, term_months: u32) -> Result<Money> {
    validate_inputs(amount, annual_rate, term_months)?;

    let monthly = annual_rate.monthly_rate();
    if monthly.is_zero() {
        return Ok(amount / Decimal::from(term_months));
    }

    let r = monthly.as_decimal();
    let factor = monthly.compound_factor(term_months);

    Ok(Money::from_decimal(
        amount.as_decimal() * (r + r / (factor - Decimal::ONE)),
    ))
}

/// totals and effective rate derived from a single payment computation
pub fn loan_summary(amount: Money, annual_rate: Rate, term_months: u32) -> Result<LoanSummary> {
    let monthly_payment = annuity_payment(amount, annual_rate, term_months)?;

    let total_paid = monthly_payment * Decimal::from(term_months);
    let overpayment = total_paid - amount;
    let effective_rate = Rate::from_decimal(overpayment.as_decimal() / amount.as_decimal());

    Ok(LoanSummary {
        monthly_payment,
        principal: amount,
        total_paid,
        overpayment,
        effective_rate,
    })
}

/// month-by-month split of the annuity payment into interest and principal
///
/// the payment is computed once up front; each month pays interest on the
/// outstanding balance and retires the rest as principal
pub fn amortization_schedule(
    amount: Money,
    annual_rate: Rate,
    term_months: u32,
) -> Result<Vec<AmortizationEntry>> {
    let payment = annuity_payment(amount, annual_rate, term_months)?;
    let monthly = annual_rate.monthly_rate().as_decimal();

    let mut remaining = amount;
    let mut schedule = Vec::with_capacity(term_months as usize);

    for _ in 0..term_months {
        let interest_portion = remaining * monthly;
        let principal_portion = payment - interest_portion;
        remaining -= principal_portion;

        schedule.push(AmortizationEntry {
            principal_portion,
            interest_portion,
            remaining_balance: remaining,
        });
    }

    Ok(schedule)
}
