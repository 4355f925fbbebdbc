//! CSV export for the admin inbox.
//!
//! Two fixed schemas: contact messages and subscribers. Every field is
//! double-quoted and dates are formatted as `YYYY-MM-DD HH:MM`, matching
//! what the download button has always produced.

use chrono::{DateTime, Utc};
use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::model::{ContactMessage, Subscriber};

/// Suggested download name for the contacts export.
pub const CONTACTS_FILENAME: &str = "contacts.csv";
/// Suggested download name for the subscribers export.
pub const SUBSCRIBERS_FILENAME: &str = "subscribers.csv";

/// Errors that can occur while building a CSV export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

fn quoted_writer() -> csv::Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new())
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, ExportError> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Export contact messages: `Date,Name,Email,Subject,Message,Read`.
pub fn contacts_csv(contacts: &[ContactMessage]) -> Result<String, ExportError> {
    let mut writer = quoted_writer();
    writer.write_record(["Date", "Name", "Email", "Subject", "Message", "Read"])?;
    for c in contacts {
        writer.write_record([
            format_date(c.created_at).as_str(),
            c.name.as_str(),
            c.email.as_str(),
            c.subject.as_str(),
            c.message.as_str(),
            if c.is_read { "Yes" } else { "No" },
        ])?;
    }
    finish(writer)
}

/// Export subscribers: `Date,Email,Status`.
pub fn subscribers_csv(subscribers: &[Subscriber]) -> Result<String, ExportError> {
    let mut writer = quoted_writer();
    writer.write_record(["Date", "Email", "Status"])?;
    for s in subscribers {
        writer.write_record([
            format_date(s.subscribed_at).as_str(),
            s.email.as_str(),
            if s.is_active { "Active" } else { "Inactive" },
        ])?;
    }
    finish(writer)
}
