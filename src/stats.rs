//! Per-subject duration aggregation
//!
//! One pass over the event list builds a subject → minutes mapping. The CSV
//! output contract depends on first-seen insertion order, so entries live in
//! a vector with a map index over subjects.

use std::collections::HashMap;

/// Averaging divisor for the per-week column. The export is assumed to
/// cover eight weeks; this is not derived from the data's date range.
pub const WEEKS: f64 = 8.0;

/// Accumulated total for a single subject
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectTotal {
    /// Grouping subject, exactly as it appears in the export
    pub subject: String,
    /// Total duration in minutes; negative inputs accumulate unchanged
    pub minutes: f64,
}

/// Derived display values for one aggregate entry
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub subject: String,
    pub total_hours: f64,
    pub avg_hours_per_week: f64,
}

/// Tracks total duration per subject in first-seen order
#[derive(Debug, Default)]
pub struct DurationTracker {
    /// Entries in insertion order
    entries: Vec<SubjectTotal>,
    /// Map from subject to index in `entries`
    index: HashMap<String, usize>,
}

impl DurationTracker {
    /// Create a new empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Add minutes to a subject's total, creating the entry at zero if absent
    pub fn record(&mut self, subject: &str, minutes: f64) {
        match self.index.get(subject) {
            Some(&i) => self.entries[i].minutes += minutes,
            None => {
                self.index.insert(subject.to_string(), self.entries.len());
                self.entries.push(SubjectTotal {
                    subject: subject.to_string(),
                    minutes,
                });
            }
        }
    }

    /// True when no subject has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct subjects
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in first-seen insertion order (the CSV contract)
    pub fn iter(&self) -> impl Iterator<Item = &SubjectTotal> {
        self.entries.iter()
    }

    /// Entries sorted by descending total minutes. The sort is stable, so
    /// equal totals keep their insertion order.
    pub fn sorted_desc(&self) -> Vec<&SubjectTotal> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            b.minutes
                .partial_cmp(&a.minutes)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted
    }
}

impl SubjectTotal {
    /// Derive the display row (hours and per-week average)
    pub fn to_row(&self) -> ReportRow {
        let total_hours = self.minutes / 60.0;
        ReportRow {
            subject: self.subject.clone(),
            total_hours,
            avg_hours_per_week: total_hours / WEEKS,
        }
    }
}
