use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};

/// chat identifier assigned by the messaging transport
pub type ChatId = i64;

/// calculation mode a chat has selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// loan summary plus amortization schedule
    Credit,
    /// deposit revenue plus growth projection
    Deposit,
}

/// parsed numeric input shared by every calculation
///
/// carries the raw values as typed by the user; range validation happens
/// inside the calculator operations, not here
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    pub amount: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
}

impl CalculationRequest {
    pub fn new(amount: Money, annual_rate: Rate, term_months: u32) -> Self {
        Self {
            amount,
            annual_rate,
            term_months,
        }
    }
}
