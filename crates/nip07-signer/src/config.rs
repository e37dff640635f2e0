//! # Signer Configuration
//!
//! Loaded in three layers: defaults, then an optional JSON file, then
//! environment overrides.
//!
//! # Environment Variables
//!
//! - `NOSTR_SIGNER_DATA_DIR`: directory of the file blob store
//! - `NOSTR_SIGNER_STORAGE_KEY`: storage slot holding the private key

use crate::domain::relays::RelayDirectory;
use crate::keystore::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Cannot read config file {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// Config file is not valid JSON for this schema.
    #[error("Cannot parse config file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    /// The storage slot name is empty.
    #[error("Storage key must not be empty")]
    EmptyStorageKey,

    /// A relay URL does not use the websocket scheme.
    #[error("Relay URL must start with ws:// or wss://: {0}")]
    InvalidRelayUrl(String),
}

/// Complete signer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignerConfig {
    /// Storage slot holding the hex private key.
    pub storage_key: String,
    /// Directory for the file blob store.
    pub data_dir: PathBuf,
    /// Static relay directory returned by `getRelays()`.
    pub relays: RelayDirectory,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: PathBuf::from("./.nostr-signer"),
            relays: RelayDirectory::default(),
        }
    }
}

impl SignerConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), relays = config.relays.len(), "Loaded config file");
        Ok(config)
    }

    /// Apply environment overrides through `lookup` (usually `std::env::var`).
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("NOSTR_SIGNER_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(key) = lookup("NOSTR_SIGNER_STORAGE_KEY") {
            self.storage_key = key;
        }
        self
    }

    /// Validate the configuration.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - the storage key is empty
    /// - a relay URL is not `ws://` or `wss://`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        for (url, _) in self.relays.iter() {
            if !(url.starts_with("wss://") || url.starts_with("ws://")) {
                return Err(ConfigError::InvalidRelayUrl(url.clone()));
            }
        }
        Ok(())
    }
}
