use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionKind};

/// Six-digit account identifier, unique within a ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(pub u32);

impl AccountNumber {
    pub const MIN: u32 = 100_000;
    pub const MAX: u32 = 999_999;

    pub fn is_six_digit(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(AccountNumber)
    }
}

/// Represents a customer account and its full transaction history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_number: AccountNumber,
    pub name: String,
    pub balance: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Opens an account whose history starts with an `Account created` entry.
    pub fn open(
        account_number: AccountNumber,
        name: impl Into<String>,
        initial_balance: f64,
        timestamp: impl Into<String>,
    ) -> Self {
        let mut account = Self {
            account_number,
            name: name.into(),
            balance: 0.0,
            transactions: vec![Transaction::new(
                timestamp,
                TransactionKind::Created,
                initial_balance,
            )],
        };
        account.refresh_balance();
        account
    }

    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
        self.refresh_balance();
    }

    /// Recomputes `balance` from the transaction history, returning the previous value.
    pub fn refresh_balance(&mut self) -> f64 {
        std::mem::replace(&mut self.balance, recompute_balance(&self.transactions))
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            account_number: self.account_number,
            name: self.name.clone(),
            balance: self.balance,
        }
    }
}

/// Folds a transaction history into a balance, from scratch.
pub fn recompute_balance(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .fold(0.0, |total, txn| total + txn.signed_amount())
}

/// Name, number and balance of an account, as shown in listings.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSummary {
    pub account_number: AccountNumber,
    pub name: String,
    pub balance: f64,
}
