pub mod json_backend;

use crate::{errors::Result, ledger::Account};

/// Abstraction over persistence backends holding a full ledger snapshot.
pub trait SnapshotStore: Send + Sync {
    /// Creates an empty snapshot when none exists yet.
    fn ensure_store_exists(&self) -> Result<()>;
    fn load(&self) -> Result<Vec<Account>>;
    /// Replaces the whole snapshot with `accounts`.
    fn save(&self, accounts: &[Account]) -> Result<()>;
}

pub use json_backend::JsonSnapshotStore;
