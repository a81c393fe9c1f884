//! Error types for account operations.

use thiserror::Error;

use crate::Amount;

/// Error returned by [`Account`](super::Account) and
/// [`SavingsAccount`](super::SavingsAccount) operations.
#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Amount),

    #[error("insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { requested: Amount, balance: Amount },

    #[error("balance overflow: balance {balance}, amount {amount}")]
    Overflow { balance: Amount, amount: Amount },

    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// Rejected construction argument.
#[derive(Debug, Error, PartialEq)]
pub enum InvalidArgument {
    #[error("initial balance cannot be negative, got {0}")]
    NegativeInitialBalance(Amount),

    #[error("interest rate cannot be negative, got {0}")]
    NegativeRate(f64),

    #[error("interest rate must be a finite number")]
    NonFiniteRate,

    #[error("interest rate {0} is out of range")]
    RateOutOfRange(f64),
}
