//! text reports for chat delivery
//!
//! all rounding-for-display happens here (two decimal places); the
//! calculator values underneath stay at full precision

use rust_decimal::Decimal;

use crate::calculator::{AmortizationEntry, DepositProjection, DepositRevenue, LoanSummary};

/// fixed two-decimal display, zero-padded ("100000" -> "100000.00")
fn fmt2(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded.to_string()
}

/// loan summary plus the full amortization table, markdown-flavored
pub fn credit_report(summary: &LoanSummary, schedule: &[AmortizationEntry]) -> String {
    let mut res = String::new();

    res.push_str(&format!(
        "Monthly annuity payment: *{}*\n",
        fmt2(summary.monthly_payment.as_decimal())
    ));
    res.push_str(&format!(
        "Credit body: *{}*\n",
        fmt2(summary.principal.as_decimal())
    ));
    res.push_str(&format!(
        "Total payment: *{}*\n",
        fmt2(summary.total_paid.as_decimal())
    ));
    res.push_str(&format!(
        "Overpayment: *{}*\n",
        fmt2(summary.overpayment.as_decimal())
    ));
    res.push_str(&format!(
        "Effective interest rate: *{}%*\n\n",
        fmt2(summary.effective_rate.as_percentage())
    ));

    res.push_str(
        "``` Months |    Monthly payment    |        Percent       |         Body         |       Left debt      |\n",
    );
    res.push_str(
        "------ | --------------------- | -------------------- | -------------------- | -------------------- |\n",
    );

    for (i, entry) in schedule.iter().enumerate() {
        res.push_str(&format!(
            "{:>6} | {:>21} | {:>20} | {:>20} | {:>20} |\n",
            i + 1,
            fmt2(summary.monthly_payment.as_decimal()),
            fmt2(entry.interest_portion.as_decimal()),
            fmt2(entry.principal_portion.as_decimal()),
            fmt2(entry.remaining_balance.as_decimal()),
        ));
    }

    res.push_str("```");
    res
}

/// deposit revenue plus the month-by-month balance table, markdown-flavored
pub fn deposit_report(revenue: &DepositRevenue, projection: &DepositProjection) -> String {
    let mut res = String::new();

    res.push_str(&format!(
        "Revenue without capitalization: *{}*\n",
        fmt2(revenue.simple.as_decimal())
    ));
    res.push_str(&format!(
        "Revenue with monthly capitalization: *{}*\n\n",
        fmt2(revenue.compounded.as_decimal())
    ));

    res.push_str("``` Months | Without capitalization | With monthly capitalization \n");
    res.push_str("------ | ---------------------- | --------------------------- \n");

    for (i, (simple, compounded)) in projection
        .simple
        .iter()
        .zip(projection.compounded.iter())
        .enumerate()
    {
        res.push_str(&format!(
            "{:>6} | {:>22} | {:>27} \n",
            i + 1,
            fmt2(simple.as_decimal()),
            fmt2(compounded.as_decimal()),
        ));
    }

    res.push_str("```");
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{
        amortization_schedule, deposit_projection, deposit_revenue, loan_summary,
    };
    use crate::decimal::{Money, Rate};
    use rust_decimal_macros::dec;

    #[test]
    fn test_fmt2_pads_and_rounds() {
        assert_eq!(fmt2(dec!(100000)), "100000.00");
        assert_eq!(fmt2(dec!(8884.8788)), "8884.88");
        assert_eq!(fmt2(dec!(0.5)), "0.50");
    }

    #[test]
    fn test_credit_report_layout() {
        let amount = Money::from_major(100_000);
        let rate = Rate::from_percentage(dec!(12));

        let summary = loan_summary(amount, rate, 12).unwrap();
        let schedule = amortization_schedule(amount, rate, 12).unwrap();
        let report = credit_report(&summary, &schedule);

        assert!(report.contains("Monthly annuity payment: *8884.88*"));
        assert!(report.contains("Credit body: *100000.00*"));
        assert!(report.contains("Effective interest rate: *6.62%*"));

        // every payment row repeats the fixed annuity payment
        assert!(report.contains("     1 |               8884.88 |              1000.00 |"));

        // 5 summary lines, blank, header, separator, 12 rows, closing fence
        assert_eq!(report.lines().count(), 9 + 12);
        assert!(report.ends_with("```"));
    }

    #[test]
    fn test_deposit_report_layout() {
        let initial = Money::from_major(10_000);
        let rate = Rate::from_percentage(dec!(6));

        let revenue = deposit_revenue(initial, rate, 12).unwrap();
        let projection = deposit_projection(initial, rate, 12).unwrap();
        let report = deposit_report(&revenue, &projection);

        assert!(report.contains("Revenue without capitalization: *600.00*"));
        assert!(report.contains("Revenue with monthly capitalization: *616.78*"));

        // both series land in the same row, first month is equal
        assert!(report.contains("     1 |               10050.00 |                    10050.00 "));

        // 2 summary lines, blank, header, separator, 12 rows, closing fence
        assert_eq!(report.lines().count(), 6 + 12);
    }
}
