//! Markdown template rendering
//!
//! Templates contain `{{.Field}}` placeholders. Supported fields are
//! `Number`, `Title`, `Date` and `Status`. Whitespace inside the braces is
//! allowed (`{{ .Title }}`). Anything that is not a known placeholder is an
//! error rather than being dropped silently.

use thiserror::Error;

use super::adr::Adr;

/// Template installed by `adr init`
pub const DEFAULT_TEMPLATE: &str = "# {{.Number}}. {{.Title}}
======
Date: {{.Date}}

## Status
======
{{.Status}}

## Context
======

## Decision
======

## Consequences
======
";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("unclosed placeholder at byte {offset}: missing '}}}}'")]
    Unclosed { offset: usize },

    #[error("invalid placeholder '{{{{{token}}}}}' at byte {offset}: expected '{{{{.Field}}}}'")]
    MissingDot { offset: usize, token: String },

    #[error("unknown placeholder field '{field}' at byte {offset}")]
    UnknownField { offset: usize, field: String },
}

/// A field that can be substituted into a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Number,
    Title,
    Date,
    Status,
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "Number" => Some(Field::Number),
            "Title" => Some(Field::Title),
            "Date" => Some(Field::Date),
            "Status" => Some(Field::Status),
            _ => None,
        }
    }

    fn value(&self, adr: &Adr) -> String {
        match self {
            Field::Number => adr.number.to_string(),
            Field::Title => adr.title.clone(),
            Field::Date => adr.formatted_date(),
            Field::Status => adr.status.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Field(Field),
}

/// Splits a template into literal text and placeholders
fn parse(template: &str) -> Result<Vec<Segment<'_>>, RenderError> {
    let mut segments = Vec::new();
    let mut rest = template;
    let mut consumed = 0;

    while let Some(start) = rest.find("{{") {
        if start > 0 {
            segments.push(Segment::Text(&rest[..start]));
        }

        let offset = consumed + start;
        let inner_start = start + 2;
        let end = rest[inner_start..]
            .find("}}")
            .ok_or(RenderError::Unclosed { offset })?;

        let token = rest[inner_start..inner_start + end].trim();
        let name = token.strip_prefix('.').ok_or_else(|| RenderError::MissingDot {
            offset,
            token: token.to_string(),
        })?;
        let field = Field::parse(name.trim()).ok_or_else(|| RenderError::UnknownField {
            offset,
            field: name.to_string(),
        })?;
        segments.push(Segment::Field(field));

        let next = inner_start + end + 2;
        consumed += next;
        rest = &rest[next..];
    }

    if !rest.is_empty() {
        segments.push(Segment::Text(rest));
    }

    Ok(segments)
}

/// Checks placeholder syntax without rendering
pub fn validate(template: &str) -> Result<(), RenderError> {
    parse(template).map(|_| ())
}

/// Substitutes every placeholder with the matching field of `adr`
pub fn render(template: &str, adr: &Adr) -> Result<String, RenderError> {
    let segments = parse(template)?;
    let mut out = String::with_capacity(template.len() + adr.title.len());

    for segment in segments {
        match segment {
            Segment::Text(text) => out.push_str(text),
            Segment::Field(field) => out.push_str(&field.value(adr)),
        }
    }

    Ok(out)
}
