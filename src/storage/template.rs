//! Template file storage
//!
//! The template is written once by `init` to `~/.adr/template.md` and read
//! back every time a new ADR is rendered. Users may edit it freely as long
//! as the placeholders stay well formed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Paths;
use crate::domain::template::{self, RenderError, DEFAULT_TEMPLATE};
use crate::domain::Adr;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("ADR template not found at {}. Run 'adr init' to reinstall it", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed ADR template at {}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: RenderError,
    },

    #[error("Failed to write template: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Installs, loads and renders the ADR template
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(paths: &Paths) -> Self {
        Self::at(paths.template_file())
    }

    /// Creates a store for a template at an arbitrary path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the built-in template, replacing any previous content
    pub fn install(&self) -> Result<(), TemplateError> {
        let write_err = |source: io::Error| TemplateError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        fs::write(&self.path, DEFAULT_TEMPLATE).map_err(write_err)
    }

    /// Reads the template text and checks its placeholders
    pub fn load(&self) -> Result<String, TemplateError> {
        let content = fs::read_to_string(&self.path).map_err(|source| TemplateError::NotFound {
            path: self.path.clone(),
            source,
        })?;

        template::validate(&content).map_err(|source| self.malformed(source))?;
        Ok(content)
    }

    /// Loads the template and substitutes the fields of `adr`
    pub fn render(&self, adr: &Adr) -> Result<String, TemplateError> {
        let content = self.load()?;
        template::render(&content, adr).map_err(|source| self.malformed(source))
    }

    fn malformed(&self, source: RenderError) -> TemplateError {
        TemplateError::Malformed {
            path: self.path.clone(),
            source,
        }
    }
}
