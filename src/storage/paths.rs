//! Filesystem locations used by the tool
//!
//! Every location is derived from the user's home directory:
//!
//! ```text
//! ~/.adr/config.json    counter and base directory
//! ~/.adr/template.md    template for new ADRs
//! ~/adr/                default ADR storage
//! ```

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use thiserror::Error;

const CONFIG_DIR_NAME: &str = ".adr";
const CONFIG_FILE_NAME: &str = "config.json";
const TEMPLATE_FILE_NAME: &str = "template.md";
const DEFAULT_BASE_DIR_NAME: &str = "adr";

#[derive(Debug, Error)]
pub enum PathsError {
    #[error("Could not determine the home directory")]
    HomeDirUnresolvable,
}

/// Resolved locations for config, template and ADR storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    home: PathBuf,
    config_dir: PathBuf,
    config_file: PathBuf,
    template_file: PathBuf,
    default_base_dir: PathBuf,
}

impl Paths {
    /// Derives all locations from a home directory
    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let config_dir = home.join(CONFIG_DIR_NAME);

        Self {
            config_file: config_dir.join(CONFIG_FILE_NAME),
            template_file: config_dir.join(TEMPLATE_FILE_NAME),
            default_base_dir: home.join(DEFAULT_BASE_DIR_NAME),
            config_dir,
            home,
        }
    }

    /// Derives locations from the platform home directory
    pub fn resolve() -> Result<Self, PathsError> {
        let dirs = BaseDirs::new().ok_or(PathsError::HomeDirUnresolvable)?;
        Ok(Self::from_home(dirs.home_dir()))
    }

    /// Uses `home` when given, otherwise the platform home directory
    pub fn resolve_with(home: Option<PathBuf>) -> Result<Self, PathsError> {
        match home {
            Some(home) => Ok(Self::from_home(home)),
            None => Self::resolve(),
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Folder holding the config and template files
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    pub fn template_file(&self) -> &Path {
        &self.template_file
    }

    /// ADR storage used when `init` gets no explicit directory
    pub fn default_base_dir(&self) -> &Path {
        &self.default_base_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_layout_from_home() {
        let paths = Paths::from_home("/home/alex");

        assert_eq!(paths.home(), Path::new("/home/alex"));
        assert_eq!(paths.config_dir(), Path::new("/home/alex/.adr"));
        assert_eq!(paths.config_file(), Path::new("/home/alex/.adr/config.json"));
        assert_eq!(paths.template_file(), Path::new("/home/alex/.adr/template.md"));
        assert_eq!(paths.default_base_dir(), Path::new("/home/alex/adr"));
    }

    #[test]
    fn explicit_home_wins() {
        let paths = Paths::resolve_with(Some(PathBuf::from("/tmp/elsewhere"))).unwrap();
        assert_eq!(paths, Paths::from_home("/tmp/elsewhere"));
    }

    #[test]
    fn same_home_gives_same_paths() {
        assert_eq!(Paths::from_home("/a"), Paths::from_home("/a"));
        assert_ne!(Paths::from_home("/a"), Paths::from_home("/b"));
    }
}
