use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::account::AccountNumber;

const CREATED: &str = "Account created";
const DEPOSIT: &str = "Deposit";
const WITHDRAWAL: &str = "Withdrawal";
const TRANSFER_TO: &str = "Transfer to ";
const TRANSFER_FROM: &str = "Transfer from ";

/// A single movement recorded against an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub timestamp: String,
    #[serde(rename = "action")]
    pub kind: TransactionKind,
    pub amount: f64,
}

impl Transaction {
    pub fn new(timestamp: impl Into<String>, kind: TransactionKind, amount: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            kind,
            amount,
        }
    }

    /// Contribution of this transaction to the account balance.
    pub fn signed_amount(&self) -> f64 {
        if self.kind.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

/// What a transaction did, and to whom for transfers.
///
/// Persisted as the human-readable action string (`"Transfer to 123456"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TransactionKind {
    Created,
    Deposit,
    Withdrawal,
    TransferOut { counterparty: AccountNumber },
    TransferIn { counterparty: AccountNumber },
}

impl TransactionKind {
    pub fn is_credit(&self) -> bool {
        matches!(
            self,
            TransactionKind::Created | TransactionKind::Deposit | TransactionKind::TransferIn { .. }
        )
    }

    pub fn counterparty(&self) -> Option<AccountNumber> {
        match self {
            TransactionKind::TransferOut { counterparty }
            | TransactionKind::TransferIn { counterparty } => Some(*counterparty),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Created => f.write_str(CREATED),
            TransactionKind::Deposit => f.write_str(DEPOSIT),
            TransactionKind::Withdrawal => f.write_str(WITHDRAWAL),
            TransactionKind::TransferOut { counterparty } => {
                write!(f, "{TRANSFER_TO}{counterparty}")
            }
            TransactionKind::TransferIn { counterparty } => {
                write!(f, "{TRANSFER_FROM}{counterparty}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised transaction action `{0}`")]
pub struct UnknownAction(pub String);

impl FromStr for TransactionKind {
    type Err = UnknownAction;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let counterparty = |digits: &str| {
            digits
                .trim()
                .parse::<u32>()
                .map(AccountNumber)
                .map_err(|_| UnknownAction(raw.to_string()))
        };
        match raw {
            CREATED => Ok(TransactionKind::Created),
            DEPOSIT => Ok(TransactionKind::Deposit),
            WITHDRAWAL => Ok(TransactionKind::Withdrawal),
            _ => {
                if let Some(rest) = raw.strip_prefix(TRANSFER_TO) {
                    Ok(TransactionKind::TransferOut {
                        counterparty: counterparty(rest)?,
                    })
                } else if let Some(rest) = raw.strip_prefix(TRANSFER_FROM) {
                    Ok(TransactionKind::TransferIn {
                        counterparty: counterparty(rest)?,
                    })
                } else {
                    Err(UnknownAction(raw.to_string()))
                }
            }
        }
    }
}

impl TryFrom<String> for TransactionKind {
    type Error = UnknownAction;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransactionKind> for String {
    fn from(kind: TransactionKind) -> Self {
        kind.to_string()
    }
}
