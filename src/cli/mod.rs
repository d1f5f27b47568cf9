//! Interactive menu shell over the ledger store.

pub mod io;
pub mod output;
pub mod render;
pub mod shell;

use thiserror::Error;

use crate::errors::LedgerError;

pub use shell::{run_cli, Shell};

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed")]
    InputClosed,
}
