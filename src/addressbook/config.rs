use crate::error::{AddressBookError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORAGE_FILENAME: &str = "addressbook.json";

/// Configuration for the address book, stored as `config.json` in the data dir.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Primary storage file. Defaults to `addressbook.json` in the data dir.
    #[serde(default)]
    pub storage_file: Option<PathBuf>,

    /// Extra files the address book is mirrored to after every command.
    #[serde(default)]
    pub mirror_files: Vec<PathBuf>,
}

impl AppConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddressBookError::Io)?;
        let config: AppConfig =
            serde_json::from_str(&content).map_err(AddressBookError::Serialization)?;
        Ok(config)
    }

    /// The primary storage file, falling back to the default inside `data_dir`.
    pub fn storage_file_in(&self, data_dir: &Path) -> PathBuf {
        self.storage_file
            .clone()
            .unwrap_or_else(|| data_dir.join(DEFAULT_STORAGE_FILENAME))
    }
}
