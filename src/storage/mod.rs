//! # Storage Layer
//!
//! Persistence for the ADR tool. Everything lives in plain files:
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Config | JSON | `~/.adr/config.json` |
//! | Template | Markdown with `{{.Field}}` placeholders | `~/.adr/template.md` |
//! | ADRs | Rendered markdown | `<base_directory>/<n>-<Title>.md` |
//!
//! ## Concurrency Safety
//!
//! - [`ConfigStore::allocate_next_id`] holds an exclusive `fs2` lock while
//!   bumping the counter
//! - Config writes are atomic (temp file + rename)
//! - ADR files are created with create-new semantics and never overwritten
//!
//! ## Key Types
//!
//! - [`Paths`] - Locations derived from the home directory
//! - [`Workspace`] - Entry point for `init` and new ADRs
//! - [`ConfigStore`] - Read/write the counter and base directory
//! - [`TemplateStore`] - Install, load and render the template

mod paths;
mod config;
mod template;
mod workspace;

pub use paths::{Paths, PathsError};
pub use config::{Config, ConfigError, ConfigStore};
pub use template::{TemplateError, TemplateStore};
pub use workspace::{ensure_base_dir, AdrError, CreatedAdr, InitReport, Workspace};
