//! Domain models for the ADR tool
//!
//! Contains the core logic without any I/O concerns.

mod adr;
pub mod template;

pub use adr::{title_from_words, Adr, AdrStatus, DATE_FORMAT};
pub use template::{RenderError, DEFAULT_TEMPLATE};
