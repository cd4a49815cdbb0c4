use thiserror::Error;

use crate::decimal::{Money, Rate};

/// all errors the calculator and its chat glue can surface
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("amount must be > 0")]
    InvalidAmount {
        amount: Money,
    },

    #[error("annual rate must be >= 0")]
    InvalidRate {
        rate: Rate,
    },

    #[error("term must be >= 1")]
    InvalidTerm {
        months: i64,
    },

    #[error("you should provide exactly 3 arguments")]
    WrongArgumentCount {
        found: usize,
    },

    #[error("all arguments must be numbers")]
    InvalidNumber {
        token: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, CalcError>;
