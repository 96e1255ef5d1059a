//! ADR domain model
//!
//! An ADR is never stored as structured data: it only exists as a rendered
//! markdown file. The record here carries the values substituted into the
//! template and derives the file name.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// strftime format used for the `Date` placeholder
pub const DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Characters stripped from both ends of a title
const TITLE_TRIM: &[char] = &['\n', ' ', '\t'];

/// Status of an ADR
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AdrStatus {
    /// Initial state of every new record
    #[default]
    Proposed,

    /// The decision was taken
    Accepted,

    /// No longer relevant
    Deprecated,

    /// Replaced by a later record
    Superseded,
}

impl AdrStatus {
    /// Returns all valid status values
    pub fn all() -> &'static [AdrStatus] {
        &[
            AdrStatus::Proposed,
            AdrStatus::Accepted,
            AdrStatus::Deprecated,
            AdrStatus::Superseded,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AdrStatus::Proposed => "Proposed",
            AdrStatus::Accepted => "Accepted",
            AdrStatus::Deprecated => "Deprecated",
            AdrStatus::Superseded => "Superseded",
        }
    }
}

impl std::fmt::Display for AdrStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdrStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "proposed" => Ok(AdrStatus::Proposed),
            "accepted" => Ok(AdrStatus::Accepted),
            "deprecated" => Ok(AdrStatus::Deprecated),
            "superseded" => Ok(AdrStatus::Superseded),
            _ => Err(format!("Unknown ADR status: {}", s)),
        }
    }
}

/// Joins title words with single spaces and trims the result
pub fn title_from_words<S: AsRef<str>>(words: &[S]) -> String {
    let words: Vec<&str> = words.iter().map(|w| w.as_ref()).collect();
    words.join(" ").trim_matches(TITLE_TRIM).to_string()
}

/// A single Architecture Decision Record
#[derive(Debug, Clone, PartialEq)]
pub struct Adr {
    /// Sequence number taken from the config counter
    pub number: u64,

    /// Human-readable title
    pub title: String,

    /// Creation time
    pub date: DateTime<Local>,

    /// Current status
    pub status: AdrStatus,
}

impl Adr {
    /// Creates a proposed ADR stamped with the current local time
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self::with_date(number, title, Local::now())
    }

    /// Creates a proposed ADR with an explicit date
    pub fn with_date(number: u64, title: impl Into<String>, date: DateTime<Local>) -> Self {
        let title: String = title.into();
        Self {
            number,
            title: title.trim_matches(TITLE_TRIM).to_string(),
            date,
            status: AdrStatus::Proposed,
        }
    }

    /// File name: `<number>-<title with spaces replaced by hyphens>.md`
    pub fn file_name(&self) -> String {
        format!("{}-{}.md", self.number, self.title.replace(' ', "-"))
    }

    /// Date rendered with [`DATE_FORMAT`]
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn fixed_date() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap()
    }

    #[test]
    fn new_adr_is_proposed() {
        let adr = Adr::new(1, "Use Postgres");
        assert_eq!(adr.status, AdrStatus::Proposed);
        assert_eq!(adr.number, 1);
    }

    #[test]
    fn title_is_trimmed() {
        let adr = Adr::with_date(3, "\n\t Use Postgres \t\n", fixed_date());
        assert_eq!(adr.title, "Use Postgres");
    }

    #[test]
    fn title_from_words_joins_with_spaces() {
        let words = vec!["My".to_string(), "First".to_string(), "ADR".to_string()];
        assert_eq!(title_from_words(&words), "My First ADR");
        assert_eq!(title_from_words(&["  padded", "words\t"]), "padded words");
    }

    #[test]
    fn file_name_keeps_case_and_is_unpadded() {
        let adr = Adr::with_date(1, "My First ADR", fixed_date());
        assert_eq!(adr.file_name(), "1-My-First-ADR.md");

        let adr = Adr::with_date(42, "Switch to gRPC", fixed_date());
        assert_eq!(adr.file_name(), "42-Switch-to-gRPC.md");
    }

    #[test]
    fn formatted_date_uses_day_first() {
        let adr = Adr::with_date(1, "x", fixed_date());
        assert_eq!(adr.formatted_date(), "07-03-2024 09:05:02");
    }

    #[test]
    fn status_display_and_parse() {
        for status in AdrStatus::all() {
            let parsed: AdrStatus = status.to_string().parse().unwrap();
            assert_eq!(&parsed, status);
        }
        assert_eq!("ACCEPTED".parse::<AdrStatus>(), Ok(AdrStatus::Accepted));
        assert!("rejected".parse::<AdrStatus>().is_err());
    }

    #[test]
    fn status_serializes_capitalized() {
        let json = serde_json::to_string(&AdrStatus::Superseded).unwrap();
        assert_eq!(json, "\"Superseded\"");
    }

    proptest! {
        #[test]
        fn file_name_has_no_spaces(number in 0u64..100_000, title in "[A-Za-z0-9 ]{1,40}") {
            let adr = Adr::with_date(number, title, fixed_date());
            let name = adr.file_name();
            let prefix = format!("{}-", number);
            prop_assert!(!name.contains(' '));
            prop_assert!(name.starts_with(&prefix));
            prop_assert!(name.ends_with(".md"));
        }
    }
}
