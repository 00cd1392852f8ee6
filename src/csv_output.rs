//! CSV output for the per-subject summary
//!
//! Rows are emitted in first-seen subject order with 2-decimal fixed text,
//! matching the historical file format byte for byte across runs.

use crate::stats::{DurationTracker, ReportRow};

/// CSV summary formatter
#[derive(Debug, Default)]
pub struct SummaryCsv {
    rows: Vec<ReportRow>,
}

impl SummaryCsv {
    /// Create a new empty formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the summary from an aggregate, in insertion order
    pub fn from_tracker(tracker: &DurationTracker) -> Self {
        let mut out = Self::new();
        for total in tracker.iter() {
            out.add_row(total.to_row());
        }
        out
    }

    /// Add a summary row
    pub fn add_row(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Format one row as a CSV line
    fn format_row(row: &ReportRow) -> String {
        format!(
            "{},{:.2},{:.2}",
            Self::escape_field(&row.subject),
            row.total_hours,
            row.avg_hours_per_week
        )
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str("Subject,Total Hours,Average Hours per Week\n");

        for row in &self.rows {
            output.push_str(&Self::format_row(row));
            output.push('\n');
        }

        output
    }
}
