//! Workspace management
//!
//! Ties the path layout, config store and template store together and
//! implements the two user-facing flows: initializing a workspace and
//! creating a new ADR.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use thiserror::Error;

use super::{Config, ConfigStore, Paths, TemplateStore};
use crate::domain::{title_from_words, Adr};

#[derive(Debug, Error)]
pub enum AdrError {
    #[error("ADR title must not be empty")]
    EmptyTitle,

    #[error("ADR title '{0}' must not contain a path separator")]
    TitleHasSeparator(String),

    #[error("Failed to create ADR base directory: {}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create ADR file: {}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write ADR file: {}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of [`Workspace::init`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    /// Absolute ADR storage directory recorded in the config
    pub base_directory: PathBuf,

    /// False when the directory already existed
    pub base_created: bool,

    pub config_file: PathBuf,
    pub template_file: PathBuf,
}

/// An ADR written to disk by [`Workspace::create_adr`]
#[derive(Debug, Clone)]
pub struct CreatedAdr {
    pub adr: Adr,
    pub path: PathBuf,
}

/// Entry point for all operations, built from an explicit [`Paths`]
pub struct Workspace {
    paths: Paths,
}

impl Workspace {
    pub fn new(paths: Paths) -> Self {
        Self { paths }
    }

    /// Opens the workspace rooted at `home`, or the platform home directory
    pub fn open(home: Option<PathBuf>) -> Result<Self> {
        Ok(Self::new(Paths::resolve_with(home)?))
    }

    pub fn paths(&self) -> &Paths {
        &self.paths
    }

    pub fn config_store(&self) -> ConfigStore {
        ConfigStore::new(&self.paths)
    }

    pub fn template_store(&self) -> TemplateStore {
        TemplateStore::new(&self.paths)
    }

    /// Reads the current configuration
    pub fn config(&self) -> Result<Config> {
        Ok(self.config_store().read()?)
    }

    /// Initializes the workspace.
    ///
    /// Creates the base directory (default `~/adr`) if missing, resets the
    /// counter to 0 and installs the default template. Re-running replaces
    /// the template and resets the counter even when ADRs already exist.
    pub fn init(&self, base: Option<&Path>) -> Result<InitReport> {
        let base_directory = match base {
            Some(dir) => absolutize(dir)?,
            None => self.paths.default_base_dir().to_path_buf(),
        };

        let base_created = ensure_base_dir(&base_directory)?;

        let config_store = self.config_store();
        config_store.write(&Config::initial(&base_directory))?;

        let template_store = self.template_store();
        template_store.install()?;

        Ok(InitReport {
            base_directory,
            base_created,
            config_file: config_store.path().to_path_buf(),
            template_file: template_store.path().to_path_buf(),
        })
    }

    /// Creates the next ADR from the given title words.
    ///
    /// The counter is persisted before the file is created, so a failure
    /// while writing leaves a numbering gap rather than a reused number.
    pub fn create_adr<S: AsRef<str>>(&self, title_words: &[S]) -> Result<CreatedAdr> {
        let title = title_from_words(title_words);
        if title.is_empty() {
            return Err(AdrError::EmptyTitle.into());
        }
        if title.contains(['/', std::path::MAIN_SEPARATOR]) {
            return Err(AdrError::TitleHasSeparator(title).into());
        }

        let config = self.config_store().allocate_next_id()?;
        let adr = Adr::new(config.current_id, title);
        let content = self
            .template_store()
            .render(&adr)
            .with_context(|| format!("Failed to render ADR {}", adr.number))?;

        let path = config.base_directory.join(adr.file_name());
        write_new_file(&path, content.as_bytes())?;

        Ok(CreatedAdr { adr, path })
    }
}

/// Creates `path` as a directory; returns false if it already existed
pub fn ensure_base_dir(path: &Path) -> Result<bool, AdrError> {
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|source| AdrError::DirectoryCreate {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(true)
}

/// Creates a file that must not exist yet and writes `content` to it
fn write_new_file(path: &Path, content: &[u8]) -> Result<(), AdrError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| AdrError::FileCreate {
            path: path.to_path_buf(),
            source,
        })?;

    file.write_all(content)
        .and_then(|()| file.flush())
        .map_err(|source| AdrError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(cwd.join(path))
}
