//! Configuration handling for the ADR tool
//!
//! The configuration lives in `~/.adr/config.json` and holds the ADR base
//! directory plus the last assigned ADR number:
//!
//! ```json
//! {
//!  "base_directory": "/home/alex/adr",
//!  "current_id": 3
//! }
//! ```

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use super::Paths;

const LOCK_FILE_NAME: &str = "config.lock";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No ADR configuration found at {}. Run 'adr init' first (see 'adr init --help')", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed ADR configuration at {}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to create config directory: {}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write configuration: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to lock configuration: {}", path.display())]
    Lock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("ADR counter in {} has reached its maximum value", path.display())]
    CounterExhausted { path: PathBuf },
}

/// Persisted tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory where ADR files are written
    pub base_directory: PathBuf,

    /// Last assigned ADR number, 0 right after `init`
    pub current_id: u64,
}

impl Config {
    /// Configuration written by `init`
    pub fn initial(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_directory: base_directory.into(),
            current_id: 0,
        }
    }
}

/// Reads and writes `config.json`
pub struct ConfigStore {
    dir: PathBuf,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(paths: &Paths) -> Self {
        Self {
            dir: paths.config_dir().to_path_buf(),
            path: paths.config_file().to_path_buf(),
        }
    }

    /// Returns the path to the config file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads the configuration; never falls back to a default value
    pub fn read(&self) -> Result<Config, ConfigError> {
        let bytes = fs::read(&self.path).map_err(|source| ConfigError::NotFound {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| ConfigError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replaces the whole config file (temp file + rename)
    pub fn write(&self, config: &Config) -> Result<(), ConfigError> {
        self.ensure_dir()?;

        let write_err = |source: io::Error| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        let content = to_indented_json(config).map_err(|e| write_err(e.into()))?;
        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, content).map_err(write_err)?;
        fs::rename(&temp_path, &self.path).map_err(write_err)?;

        Ok(())
    }

    /// Increments `current_id` and persists it, returning the updated config.
    ///
    /// The read-modify-write runs under an exclusive lock on `config.lock`,
    /// so concurrent invocations never hand out the same number. The counter
    /// is saved before any ADR file is written: a later failure leaves a gap
    /// in the numbering, never a duplicate.
    pub fn allocate_next_id(&self) -> Result<Config, ConfigError> {
        if !self.exists() {
            // Surface the missing config before creating the lock file
            self.read()?;
        }

        let lock_path = self.dir.join(LOCK_FILE_NAME);
        let lock_err = |source: io::Error| ConfigError::Lock {
            path: lock_path.clone(),
            source,
        };

        let lock = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(lock_err)?;
        lock.lock_exclusive().map_err(lock_err)?;

        let mut config = self.read()?;
        config.current_id = config
            .current_id
            .checked_add(1)
            .ok_or_else(|| ConfigError::CounterExhausted {
                path: self.path.clone(),
            })?;
        self.write(&config)?;

        // Lock is released when the file is dropped
        Ok(config)
    }

    /// Creates the config folder if it does not exist yet
    fn ensure_dir(&self) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.dir).map_err(|source| ConfigError::DirectoryCreate {
            path: self.dir.clone(),
            source,
        })
    }
}

/// Serializes with a single-space indent
fn to_indented_json(config: &Config) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    config.serialize(&mut ser)?;
    Ok(buf)
}
