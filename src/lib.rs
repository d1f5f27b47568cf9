#![doc(test(attr(deny(warnings))))]

//! Bank Ledger keeps a small set of accounts with append-only transaction
//! histories, persisted as a JSON snapshot after every change.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Bank Ledger tracing initialized.");
    });
}
