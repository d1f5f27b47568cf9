use std::fmt;

use thiserror::Error;

use crate::ledger::AccountNumber;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Error type that captures ledger and snapshot failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),
    #[error("Invalid amount: {0}")]
    InvalidAmount(AmountIssue),
    #[error("No unused account numbers remain")]
    AccountNumbersExhausted,
    #[error("Corrupt store: {0}")]
    CorruptStore(String),
    #[error("Unable to read store: {0}")]
    ReadFailure(String),
    #[error("Unable to write store: {0}")]
    WriteFailure(String),
}

/// Reason an amount was refused. Reported to users as a single `InvalidAmount` kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AmountIssue {
    NotANumber(String),
    NotPositive(f64),
    InsufficientFunds { requested: f64, available: f64 },
}

impl fmt::Display for AmountIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountIssue::NotANumber(raw) => write!(f, "`{raw}` is not a number"),
            AmountIssue::NotPositive(value) => write!(f, "{value} must be greater than zero"),
            AmountIssue::InsufficientFunds {
                requested,
                available,
            } => write!(
                f,
                "{requested} exceeds the available balance of {available}"
            ),
        }
    }
}

