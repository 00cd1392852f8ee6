//! Calendar export data model
//!
//! Deserializes the Graph-style JSON export: a top-level object whose
//! `value` field holds the event list. All fields are best-effort optional;
//! schema validation is out of scope.

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

/// Subject used when an event has no usable subject of its own
pub const UNTITLED: &str = "Untitled";

/// Top-level calendar export document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarExport {
    /// Event list; an absent `value` field is an empty export, not an error
    #[serde(default)]
    pub value: Vec<Event>,
}

/// A single calendar event as it appears in the export
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    pub subject: Option<String>,
    pub start: Option<EventTime>,
    pub end: Option<EventTime>,
}

/// Timestamp wrapper object (`{"dateTime": "..."}`).
///
/// The inner value stays a raw JSON value: a wrong-typed `dateTime` must be
/// a recoverable per-event error, not a document-level deserialization
/// failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventTime {
    #[serde(rename = "dateTime")]
    pub date_time: Option<serde_json::Value>,
}

/// Errors from per-event timestamp handling
#[derive(Error, Debug)]
pub enum TimestampError {
    #[error("invalid timestamp {value:?}: {source}")]
    Invalid {
        value: String,
        source: chrono::ParseError,
    },
    #[error("invalid timestamp {value}: not a text value")]
    NotText { value: serde_json::Value },
}

impl Event {
    /// Resolve the grouping subject. Missing and empty subjects both fall
    /// back to "Untitled", matching the export's falsy-subject convention.
    pub fn resolved_subject(&self) -> &str {
        match self.subject.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => UNTITLED,
        }
    }

    /// Raw start timestamp value. Null and empty-string timestamps count
    /// as absent, like the export's other falsy fields.
    pub fn start_value(&self) -> Option<&serde_json::Value> {
        Self::present(&self.start)
    }

    /// Raw end timestamp value, with the same absence rules
    pub fn end_value(&self) -> Option<&serde_json::Value> {
        Self::present(&self.end)
    }

    fn present(time: &Option<EventTime>) -> Option<&serde_json::Value> {
        time.as_ref()
            .and_then(|t| t.date_time.as_ref())
            .filter(|v| !v.is_null() && v.as_str() != Some(""))
    }
}

/// Parse an export timestamp as a naive local time.
///
/// Trailing `Z` characters are stripped rather than converted; the export's
/// UTC marker is deliberately ignored and the wall-clock value is used as-is.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, TimestampError> {
    let stripped = value.trim_end_matches('Z');
    stripped
        .parse::<NaiveDateTime>()
        .map_err(|source| TimestampError::Invalid {
            value: value.to_string(),
            source,
        })
}

/// Duration between two timestamp values, in minutes.
///
/// Negative when end precedes start; the caller accumulates the value
/// unchanged so bad data stays visible in the totals.
pub fn duration_minutes(
    start: &serde_json::Value,
    end: &serde_json::Value,
) -> Result<f64, TimestampError> {
    let start = parse_timestamp(coerce_text(start)?)?;
    let end = parse_timestamp(coerce_text(end)?)?;
    Ok((end - start).num_milliseconds() as f64 / 60_000.0)
}

fn coerce_text(value: &serde_json::Value) -> Result<&str, TimestampError> {
    value.as_str().ok_or_else(|| TimestampError::NotText {
        value: value.clone(),
    })
}
