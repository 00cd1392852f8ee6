//! Console summary table
//!
//! Fixed-width report sorted by descending total minutes. Column geometry
//! matches the historical output: 40-char subject, 12-char hours, 15-char
//! per-week average, 72-dash rule.

use crate::stats::DurationTracker;

const SUBJECT_WIDTH: usize = 40;
const RULE_WIDTH: usize = 72;

/// Truncate a subject to the display width without splitting a character
fn truncate_subject(subject: &str) -> String {
    subject.chars().take(SUBJECT_WIDTH).collect()
}

/// Render the summary table as lines, sorted by descending total minutes
pub fn render_table(tracker: &DurationTracker) -> Vec<String> {
    let mut lines = Vec::with_capacity(tracker.len() + 2);
    lines.push(format!(
        "{:<40} | {:>12} | {:>15}",
        "Subject", "Total Hours", "Avg Hours/Week"
    ));
    lines.push("-".repeat(RULE_WIDTH));

    for total in tracker.sorted_desc() {
        let row = total.to_row();
        lines.push(format!(
            "{:<40} | {:>12.2} | {:>15.2}",
            truncate_subject(&row.subject),
            row.total_hours,
            row.avg_hours_per_week
        ));
    }

    lines
}

/// Print the summary table to stdout
pub fn print_table(tracker: &DurationTracker) {
    for line in render_table(tracker) {
        println!("{}", line);
    }
}
