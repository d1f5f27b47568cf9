//! Ledger state, clock, and account-number generation.

pub mod account_numbers;
pub mod clock;
pub mod ledger_store;

pub use account_numbers::AccountNumberGenerator;
pub use clock::{Clock, SystemClock, TIMESTAMP_FORMAT};
pub use ledger_store::{LedgerStore, Statement, TransferReceipt};
