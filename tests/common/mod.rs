#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use bank_ledger::{
    core::{AccountNumberGenerator, LedgerStore, SystemClock},
    storage::JsonSnapshotStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a snapshot path inside a fresh temporary directory.
pub fn temp_snapshot_path() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("database.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Opens a store on `path` with a deterministic account-number sequence.
pub fn open_store(path: &Path, seed: u64) -> LedgerStore {
    LedgerStore::open_with_numbers(
        Box::new(JsonSnapshotStore::new(path)),
        Arc::new(SystemClock),
        AccountNumberGenerator::seeded(seed),
    )
    .expect("open ledger store")
}

/// Creates an isolated store backed by its own snapshot file.
pub fn setup_test_store() -> (LedgerStore, PathBuf) {
    let path = temp_snapshot_path();
    (open_store(&path, 1), path)
}
