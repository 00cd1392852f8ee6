//! Calendar summarization pipeline
//!
//! Single pass over the export: filter OoO/PTO events, accumulate duration
//! minutes per subject, then print the sorted console table and write the
//! CSV summary. One status line per event goes to stdout.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::csv_output::SummaryCsv;
use crate::event::{self, CalendarExport};
use crate::filter::SubjectFilter;
use crate::report;
use crate::stats::DurationTracker;

/// Calendar export read from the working directory
pub const INPUT_PATH: &str = "outcal.json";
/// Summary file written to the working directory
pub const OUTPUT_PATH: &str = "event_summary.csv";

/// Load and deserialize a calendar export. Missing files and malformed
/// documents are fatal; the caller terminates with the diagnostic.
pub fn load_export(path: &Path) -> Result<CalendarExport> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read calendar export {}", path.display()))?;
    let export: CalendarExport = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse calendar export {}", path.display()))?;
    Ok(export)
}

/// Filter and accumulate one pass over the event list, printing a status
/// line per event. Events missing either timestamp are skipped silently;
/// unparseable timestamps are logged and skipped.
pub fn aggregate(export: &CalendarExport, filter: &SubjectFilter) -> DurationTracker {
    let mut tracker = DurationTracker::new();

    for event in &export.value {
        let subject = event.resolved_subject();

        if filter.is_excluded(subject) {
            println!("Filtered out: {}", subject);
            continue;
        }
        println!("✅ Keeping: {}", subject);

        let (Some(start), Some(end)) = (event.start_value(), event.end_value()) else {
            tracing::debug!(subject, "event missing start or end timestamp, skipped");
            continue;
        };

        match event::duration_minutes(start, end) {
            Ok(minutes) => {
                tracker.record(subject, minutes);
                println!("Added {:.2} minutes for: {}", minutes, subject);
            }
            Err(e) => {
                println!("Error parsing event: {} — {}", subject, e);
            }
        }
    }

    tracker
}

/// Write the CSV summary next to the input
pub fn write_csv(tracker: &DurationTracker, path: &Path) -> Result<()> {
    let csv = SummaryCsv::from_tracker(tracker).to_csv();
    fs::write(path, csv)
        .with_context(|| format!("Failed to write summary {}", path.display()))?;
    Ok(())
}

/// Run the full pipeline against the working directory
pub fn run() -> Result<()> {
    let export = load_export(Path::new(INPUT_PATH))?;
    tracing::debug!(events = export.value.len(), "loaded calendar export");

    let filter = SubjectFilter::standard();
    let tracker = aggregate(&export, &filter);

    report::print_table(&tracker);
    write_csv(&tracker, Path::new(OUTPUT_PATH))?;

    println!("\n✅ Summary written to {}", OUTPUT_PATH);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, EventTime};

    fn event(subject: Option<&str>, start: Option<&str>, end: Option<&str>) -> Event {
        let wrap = |v: Option<&str>| {
            v.map(|s| EventTime {
                date_time: Some(serde_json::Value::from(s)),
            })
        };
        Event {
            subject: subject.map(str::to_string),
            start: wrap(start),
            end: wrap(end),
        }
    }

    fn export(events: Vec<Event>) -> CalendarExport {
        CalendarExport { value: events }
    }

    #[test]
    fn test_aggregate_accumulates_durations() {
        let export = export(vec![
            event(
                Some("Sync"),
                Some("2024-03-04T09:00:00"),
                Some("2024-03-04T09:30:00"),
            ),
            event(
                Some("Sync"),
                Some("2024-03-05T09:00:00"),
                Some("2024-03-05T09:45:00"),
            ),
        ]);

        let tracker = aggregate(&export, &SubjectFilter::standard());
        let entries: Vec<_> = tracker.iter().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].minutes, 75.0);
    }

    #[test]
    fn test_aggregate_excludes_ooo_and_pto() {
        let export = export(vec![
            event(
                Some("OoO - holiday"),
                Some("2024-03-04T09:00:00"),
                Some("2024-03-04T17:00:00"),
            ),
            event(
                Some("PTO"),
                Some("2024-03-05T09:00:00"),
                Some("2024-03-05T17:00:00"),
            ),
            event(
                Some("Standup"),
                Some("2024-03-06T09:00:00"),
                Some("2024-03-06T09:15:00"),
            ),
        ]);

        let tracker = aggregate(&export, &SubjectFilter::standard());
        let entries: Vec<_> = tracker.iter().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subject, "Standup");
    }

    #[test]
    fn test_aggregate_untitled_default() {
        let export = export(vec![event(
            None,
            Some("2024-03-04T09:00:00"),
            Some("2024-03-04T10:00:00"),
        )]);

        let tracker = aggregate(&export, &SubjectFilter::standard());
        let entries: Vec<_> = tracker.iter().collect();
        assert_eq!(entries[0].subject, "Untitled");
        assert_eq!(entries[0].minutes, 60.0);
    }

    #[test]
    fn test_aggregate_skips_missing_timestamps() {
        let export = export(vec![
            event(Some("No end"), Some("2024-03-04T09:00:00"), None),
            event(Some("No start"), None, Some("2024-03-04T10:00:00")),
            event(Some("Neither"), None, None),
        ]);

        let tracker = aggregate(&export, &SubjectFilter::standard());
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_aggregate_skips_malformed_timestamps() {
        let export = export(vec![
            event(Some("Bad"), Some("not-a-date"), Some("2024-03-04T10:00:00")),
            event(
                Some("Good"),
                Some("2024-03-04T09:00:00"),
                Some("2024-03-04T10:00:00"),
            ),
        ]);

        let tracker = aggregate(&export, &SubjectFilter::standard());
        let entries: Vec<_> = tracker.iter().collect();
        // The malformed event creates no entry at all
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].subject, "Good");
    }

    #[test]
    fn test_aggregate_skips_wrong_typed_timestamp() {
        let mut bad = event(Some("Numeric"), None, Some("2024-03-04T10:00:00"));
        bad.start = Some(EventTime {
            date_time: Some(serde_json::Value::from(1709542800)),
        });

        let tracker = aggregate(&export(vec![bad]), &SubjectFilter::standard());
        // Logged and skipped, never aggregated
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_aggregate_negative_duration_counts() {
        let export = export(vec![event(
            Some("Backwards"),
            Some("2024-03-04T10:00:00"),
            Some("2024-03-04T09:00:00"),
        )]);

        let tracker = aggregate(&export, &SubjectFilter::standard());
        let entries: Vec<_> = tracker.iter().collect();
        assert_eq!(entries[0].minutes, -60.0);
    }

    #[test]
    fn test_aggregate_empty_export() {
        let tracker = aggregate(&export(vec![]), &SubjectFilter::standard());
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_load_export_missing_file_is_fatal() {
        let err = load_export(Path::new("/nonexistent/outcal.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_write_csv_unwritable_path_is_fatal() {
        let tracker = DurationTracker::new();
        let err = write_csv(&tracker, Path::new("/nonexistent/dir/out.csv")).unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
