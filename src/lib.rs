//! ADR CLI - Architecture Decision Records from the command line
//!
//! Records are numbered markdown files rendered from a template. A small
//! JSON config in `~/.adr/` remembers where the records live and the last
//! number handed out.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Adr, AdrStatus};
pub use storage::{Config, Paths, Workspace};
