//! Resolver configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load a [`ResolverConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid JSON for [`ResolverConfig`].
    #[error("invalid resolver config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for an [`IdentityResolver`](crate::IdentityResolver).
///
/// Every field has a default; a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Ghost viewers see `"name (account)"` for entities bound to a player.
    pub reveal_usernames_to_ghosts: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            reveal_usernames_to_ghosts: true,
        }
    }
}

impl ResolverConfig {
    /// Returns a copy with the account-name reveal switched on or off.
    #[must_use]
    pub fn with_username_reveal(mut self, enabled: bool) -> Self {
        self.reveal_usernames_to_ghosts = enabled;
        self
    }

    /// Parses a config from JSON text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed input.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, [`ConfigError::Parse`]
    /// if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
