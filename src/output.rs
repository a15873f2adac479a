//! Record rendering for the CLI.

use crate::args::OutputFormat;
use serde::Serialize;
use trade_entities::{AccountData, AccountProfileData, Tz};

/// A record the CLI knows how to print.
pub trait FixtureRecord: Serialize {
    fn text_in(&self, zone: Tz) -> String;
    fn html_in(&self, zone: Tz) -> String;
}

impl FixtureRecord for AccountData {
    fn text_in(&self, zone: Tz) -> String {
        let mut out = self.to_text_in(zone);
        if let Some(profile) = self.profile() {
            out.push_str(&profile.to_text());
        }
        out
    }

    fn html_in(&self, zone: Tz) -> String {
        let mut out = self.to_html_in(zone);
        if let Some(profile) = self.profile() {
            out.push_str(&profile.to_html());
        }
        out
    }
}

impl FixtureRecord for AccountProfileData {
    fn text_in(&self, _zone: Tz) -> String {
        self.to_text()
    }

    fn html_in(&self, _zone: Tz) -> String {
        self.to_html()
    }
}

/// Render one record in the requested format.
pub fn render<R: FixtureRecord>(
    record: &R,
    format: OutputFormat,
    zone: Tz,
) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Text => record.text_in(zone),
        OutputFormat::Html => record.html_in(zone),
        OutputFormat::Json => serde_json::to_string(record)?,
    };
    Ok(rendered)
}
