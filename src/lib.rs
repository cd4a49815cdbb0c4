pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod render;
pub mod session;
pub mod types;

// re-export key types
pub use calculator::{
    amortization_schedule, annuity_payment, deposit_projection, deposit_revenue, loan_summary,
    AmortizationEntry, DepositProjection, DepositRevenue, LoanSummary,
};
pub use config::BotConfig;
pub use decimal::{Money, Rate};
pub use errors::{CalcError, Result};
pub use session::{parse_args, Dispatcher, SessionStore};
pub use types::{CalculationRequest, ChatId, Command};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
