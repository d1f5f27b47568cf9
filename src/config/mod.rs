//! Runtime configuration resolved from the environment.

use std::{env, ffi::OsString, path::PathBuf};

use dirs::home_dir;

/// Full path of the snapshot file; overrides everything else.
pub const FILE_ENV: &str = "BANK_LEDGER_FILE";
/// Data directory holding `database.json`.
pub const HOME_ENV: &str = "BANK_LEDGER_HOME";
/// When set, the shell reads plain lines from stdin.
pub const SCRIPT_ENV: &str = "BANK_LEDGER_CLI_SCRIPT";

const DEFAULT_DIR_NAME: &str = ".bank_ledger";
const SNAPSHOT_FILE: &str = "database.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_file: PathBuf,
    pub mode: CliMode,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Resolves configuration through `lookup`, which stands in for the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let data_file = match lookup(FILE_ENV).filter(|value| !value.is_empty()) {
            Some(file) => PathBuf::from(file),
            None => app_data_dir(lookup(HOME_ENV)).join(SNAPSHOT_FILE),
        };
        let mode = if lookup(SCRIPT_ENV).is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        };
        Self { data_file, mode }
    }
}

/// Returns the application data directory, defaulting to `~/.bank_ledger`.
fn app_data_dir(custom: Option<OsString>) -> PathBuf {
    if let Some(custom) = custom.filter(|value| !value.is_empty()) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, OsString> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), OsString::from(value)))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn explicit_file_wins() {
        let config = config_with(&[(FILE_ENV, "/tmp/ledger.json"), (HOME_ENV, "/srv/bank")]);
        assert_eq!(config.data_file, PathBuf::from("/tmp/ledger.json"));
    }

    #[test]
    fn home_directory_holds_database_json() {
        let config = config_with(&[(HOME_ENV, "/srv/bank")]);
        assert_eq!(config.data_file, PathBuf::from("/srv/bank/database.json"));
        assert_eq!(config.mode, CliMode::Interactive);
    }

    #[test]
    fn defaults_under_user_home() {
        let config = config_with(&[]);
        assert!(config.data_file.ends_with(".bank_ledger/database.json"));
    }

    #[test]
    fn script_flag_selects_script_mode() {
        let config = config_with(&[(SCRIPT_ENV, "1")]);
        assert_eq!(config.mode, CliMode::Script);
    }
}
