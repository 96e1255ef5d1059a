//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Alias | Purpose |
//! |---------|-------|---------|
//! | `init [base_directory]` | `i` | Create the base directory, config and template |
//! | `new <title>...` | `c` | Create the next numbered ADR |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! adr --verbose new Use PostgreSQL
//! ```
//!
//! ## Home Directory
//!
//! `--home <dir>` (or `ADR_HOME`) replaces the user's home directory as the
//! root for `.adr/` and the default `adr/` folder.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod record;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
