//! Application configuration and path resolution.

use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".expense_core";
const CONFIG_FILE: &str = "config.json";
const DATA_FILE: &str = "expenses.txt";

/// Returns the application data directory, defaulting to `~/.expense_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Creates `path` and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Expense file override; the default lives in the app data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    pub fn load(&self) -> Result<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolves the expense file location. Precedence: `EXPENSE_CORE_DATA_FILE`
/// env var, then the configured override, then the default in the app data
/// directory.
pub fn resolve_data_file(config: &Config) -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_CORE_DATA_FILE") {
        return PathBuf::from(custom);
    }
    config
        .data_file
        .clone()
        .unwrap_or_else(|| app_data_dir().join(DATA_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert!(config.data_file.is_none());
    }

    #[test]
    fn save_then_load_preserves_override() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();

        let config = Config {
            data_file: Some(PathBuf::from("/tmp/custom-expenses.txt")),
        };
        manager.save(&config).unwrap();

        let reloaded = manager.load().unwrap();
        assert_eq!(
            reloaded.data_file.as_deref(),
            Some(Path::new("/tmp/custom-expenses.txt"))
        );
    }

    #[test]
    fn resolve_prefers_configured_override() {
        let config = Config {
            data_file: Some(PathBuf::from("/tmp/override.txt")),
        };
        if env::var_os("EXPENSE_CORE_DATA_FILE").is_none() {
            assert_eq!(resolve_data_file(&config), PathBuf::from("/tmp/override.txt"));
        }
    }
}
