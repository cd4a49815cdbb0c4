use std::str::FromStr;

use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{CalcError, Result};
use crate::types::CalculationRequest;

/// parse "[amount] [annual rate] [months]" free text into a request
///
/// only token count and numeric shape are checked here; range validation
/// belongs to the calculator operations
pub fn parse_args(text: &str) -> Result<CalculationRequest> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(CalcError::WrongArgumentCount {
            found: tokens.len(),
        });
    }

    let amount = Money::from_str(tokens[0]).map_err(|_| CalcError::InvalidNumber {
        token: tokens[0].to_string(),
    })?;

    let rate_percent = Decimal::from_str(tokens[1]).map_err(|_| CalcError::InvalidNumber {
        token: tokens[1].to_string(),
    })?;

    // the term reads as a signed integer so that typos like "-5" still get
    // the term validation message instead of a generic parse failure
    let months: i64 = tokens[2].parse().map_err(|_| CalcError::InvalidNumber {
        token: tokens[2].to_string(),
    })?;
    let term_months =
        u32::try_from(months).map_err(|_| CalcError::InvalidTerm { months })?;

    Ok(CalculationRequest::new(
        amount,
        Rate::from_percentage(rate_percent),
        term_months,
    ))
}
