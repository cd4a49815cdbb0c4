use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::validate_inputs;
use crate::decimal::{Money, Rate};
use crate::errors::Result;

/// projected deposit balances, one entry per elapsed month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositProjection {
    /// balance without capitalization (earned interest is never reinvested)
    pub simple: Vec<Money>,
    /// balance with monthly capitalization
    pub compounded: Vec<Money>,
}

/// interest earned over the full term
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositRevenue {
    pub simple: Money,
    pub compounded: Money,
}

fn simple_balance(initial: Money, monthly: Rate, elapsed_months: u32) -> Money {
    Money::from_decimal(
        initial.as_decimal()
            * (Decimal::ONE + monthly.as_decimal() * Decimal::from(elapsed_months)),
    )
}

fn compounded_balance(initial: Money, monthly: Rate, elapsed_months: u32) -> Money {
    Money::from_decimal(initial.as_decimal() * monthly.compound_factor(elapsed_months))
}

/// balance series for a deposit, with and without monthly capitalization
///
/// every entry is a closed form over its own month index, not a running
/// total, so the series carry no accumulated error
pub fn deposit_projection(
    initial: Money,
    annual_rate: Rate,
    term_months: u32,
) -> Result<DepositProjection> {
    validate_inputs(initial, annual_rate, term_months)?;

    let monthly = annual_rate.monthly_rate();
    let simple = (1..=term_months)
        .map(|m| simple_balance(initial, monthly, m))
        .collect();
    let compounded = (1..=term_months)
        .map(|m| compounded_balance(initial, monthly, m))
        .collect();

    Ok(DepositProjection { simple, compounded })
}

/// interest earned over the full term, with and without monthly capitalization
///
/// evaluates the same closed forms as the final projection entries, so the
/// two surfaces always agree exactly
pub fn deposit_revenue(
    initial: Money,
    annual_rate: Rate,
    term_months: u32,
) -> Result<DepositRevenue> {
    validate_inputs(initial, annual_rate, term_months)?;

    let monthly = annual_rate.monthly_rate();

    Ok(DepositRevenue {
        simple: simple_balance(initial, monthly, term_months) - initial,
        compounded: compounded_balance(initial, monthly, term_months) - initial,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_projection_series() {
        let projection = deposit_projection(
            Money::from_major(10_000),
            Rate::from_percentage(dec!(6)),
            12,
        )
        .unwrap();

        assert_eq!(projection.simple.len(), 12);
        assert_eq!(projection.compounded.len(), 12);

        // first month is identical; after that capitalization pulls ahead
        assert_eq!(projection.simple[0], projection.compounded[0]);
        for i in 1..12 {
            assert!(projection.compounded[i] > projection.simple[i]);
        }

        // monthly rate 0.005: first balance is 10,050 either way
        assert_eq!(projection.simple[0], Money::from_major(10_050));
    }

    #[test]
    fn test_revenue_totals() {
        let revenue = deposit_revenue(
            Money::from_major(10_000),
            Rate::from_percentage(dec!(6)),
            12,
        )
        .unwrap();

        // simple interest is linear: 10,000 * 0.005 * 12
        assert_eq!(revenue.simple, Money::from_major(600));

        // compounded: 10,000 * (1.005^12 - 1) = 616.778...
        assert_eq!(
            revenue.compounded.round_dp(2),
            Money::from_str_exact("616.78").unwrap()
        );
    }

    #[test]
    fn test_revenue_matches_projection() {
        let initial = Money::from_major(10_000);
        let rate = Rate::from_percentage(dec!(6));

        let projection = deposit_projection(initial, rate, 12).unwrap();
        let revenue = deposit_revenue(initial, rate, 12).unwrap();

        // exact agreement, not tolerance: both sides evaluate the same closed form
        assert_eq!(revenue.simple, *projection.simple.last().unwrap() - initial);
        assert_eq!(
            revenue.compounded,
            *projection.compounded.last().unwrap() - initial
        );
    }

    #[test]
    fn test_zero_rate_deposit() {
        let initial = Money::from_major(5_000);

        let projection = deposit_projection(initial, Rate::ZERO, 6).unwrap();
        for i in 0..6 {
            assert_eq!(projection.simple[i], initial);
            assert_eq!(projection.compounded[i], initial);
        }

        let revenue = deposit_revenue(initial, Rate::ZERO, 6).unwrap();
        assert!(revenue.simple.is_zero());
        assert!(revenue.compounded.is_zero());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let rate = Rate::from_percentage(dec!(6));

        assert!(matches!(
            deposit_projection(Money::ZERO, rate, 12),
            Err(CalcError::InvalidAmount { .. })
        ));
        assert!(matches!(
            deposit_revenue(Money::from_major(10_000), Rate::from_percentage(dec!(-6)), 12),
            Err(CalcError::InvalidRate { .. })
        ));
        assert!(matches!(
            deposit_revenue(Money::from_major(10_000), rate, 0),
            Err(CalcError::InvalidTerm { .. })
        ));
    }
}
