//! Text and HTML layouts shared by the records.
//!
//! Every record renders as a header line followed by one labelled line per
//! field. Labels carry their own left padding so that the colons line up in
//! the plain-text layout; the HTML layout reuses the same padded labels.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::fmt::Display;

/// Layout used for timestamps, e.g. `Mon Apr 15 13:50:12 BST 2019`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

/// Placeholder printed for unset values.
pub const NULL: &str = "null";

/// One rendered field: a padded label and its value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLine {
    pub label: &'static str,
    pub value: String,
}

impl FieldLine {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Render an optional value, falling back to `null`.
pub fn optional<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| NULL.to_string(), |v| v.to_string())
}

/// Render an optional timestamp in the given zone.
pub fn timestamp(value: Option<&DateTime<Utc>>, zone: Tz) -> String {
    match value {
        Some(dt) => dt.with_timezone(&zone).format(TIMESTAMP_FORMAT).to_string(),
        None => NULL.to_string(),
    }
}

/// Plain-text layout: `"\n\t<header>"` then `"\n\t\t<label>:<value>"` per field.
pub fn text(header: &str, fields: &[FieldLine]) -> String {
    let mut out = format!("\n\t{header}");
    for field in fields {
        out.push_str("\n\t\t");
        out.push_str(field.label);
        out.push(':');
        out.push_str(&field.value);
    }
    out
}

/// HTML fragment: `"<BR><title> <B><identity></B>"` then `"<LI><label>:<value></LI>"` per field.
pub fn html(title: &str, identity: &str, fields: &[FieldLine]) -> String {
    let mut out = format!("<BR>{title} <B>{identity}</B>");
    for field in fields {
        out.push_str("<LI>");
        out.push_str(field.label);
        out.push(':');
        out.push_str(&field.value);
        out.push_str("</LI>");
    }
    out
}
