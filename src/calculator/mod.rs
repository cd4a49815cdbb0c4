pub mod deposit;
pub mod loan;

use crate::decimal::{Money, Rate};
use crate::errors::{CalcError, Result};

pub use deposit::{deposit_projection, deposit_revenue, DepositProjection, DepositRevenue};
pub use loan::{
    amortization_schedule, annuity_payment, loan_summary, AmortizationEntry, LoanSummary,
};

/// shared input invariants, checked before any computation
///
/// every public operation in this module calls this first; a failure means
/// nothing was computed
pub(crate) fn validate_inputs(amount: Money, annual_rate: Rate, term_months: u32) -> Result<()> {
    if !amount.is_positive() {
        return Err(CalcError::InvalidAmount { amount });
    }

    if annual_rate.is_negative() {
        return Err(CalcError::InvalidRate { rate: annual_rate });
    }

    if term_months == 0 {
        return Err(CalcError::InvalidTerm {
            months: term_months as i64,
        });
    }

    Ok(())
}
