//! Ledger domain models, persistence-friendly types, and helpers.

pub mod account;
pub mod amount;
pub mod transaction;

pub use account::{recompute_balance, Account, AccountNumber, AccountSummary};
pub use amount::{ensure_covered, ensure_finite, ensure_positive, parse_amount};
pub use transaction::{Transaction, TransactionKind, UnknownAction};
