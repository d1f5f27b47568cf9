use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::{LedgerError, Result},
    ledger::Account,
};

use super::SnapshotStore;

const TMP_SUFFIX: &str = "tmp";
const EMPTY_SNAPSHOT: &str = "[]";

/// Stores the ledger as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn ensure_store_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        tracing::info!(path = %self.path.display(), "creating empty ledger snapshot");
        write_atomic(&self.path, EMPTY_SNAPSHOT)
    }

    fn load(&self) -> Result<Vec<Account>> {
        let data = fs::read_to_string(&self.path).map_err(|err| {
            LedgerError::ReadFailure(format!("{}: {}", self.path.display(), err))
        })?;
        let accounts: Vec<Account> = serde_json::from_str(&data).map_err(|err| {
            LedgerError::CorruptStore(format!("{}: {}", self.path.display(), err))
        })?;
        tracing::debug!(
            path = %self.path.display(),
            accounts = accounts.len(),
            "loaded ledger snapshot"
        );
        Ok(accounts)
    }

    fn save(&self, accounts: &[Account]) -> Result<()> {
        let json = serde_json::to_string_pretty(accounts)
            .map_err(|err| LedgerError::WriteFailure(err.to_string()))?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(
            path = %self.path.display(),
            accounts = accounts.len(),
            "saved ledger snapshot"
        );
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Stages `data` next to `path` and renames it into place.
fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(path);
        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, path)
    };
    write().map_err(|err| LedgerError::WriteFailure(format!("{}: {}", path.display(), err)))
}
