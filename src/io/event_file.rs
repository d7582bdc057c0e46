use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Result, TimelineError};

/// Separator between the date and the label on each line.
pub const SEPARATOR: &str = " - ";

/// Date format used by event files and the prompt.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// A line that could not be turned into an event.
#[derive(Debug)]
pub struct SkippedLine {
    /// 1-based line number in the source text.
    pub line_no: usize,
    pub text: String,
    pub error: TimelineError,
}

/// Outcome of parsing an event file: every good line, plus what was skipped.
#[derive(Debug, Default)]
pub struct ParseReport {
    pub entries: Vec<(NaiveDate, String)>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a `dd/mm/yyyy` date, surrounding whitespace allowed.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| TimelineError::InvalidDate {
        input: trimmed.to_string(),
        source,
    })
}

/// Parse one non-blank line of the form `dd/mm/yyyy - label`.
pub fn parse_line(line: &str) -> Result<(NaiveDate, String)> {
    let (date_part, label) =
        line.trim()
            .split_once(SEPARATOR)
            .ok_or_else(|| TimelineError::MalformedLine {
                reason: format!("expected 'dd/mm/yyyy{}label'", SEPARATOR),
            })?;
    let date = parse_date(date_part)?;
    Ok((date, label.trim().to_string()))
}

/// Parse the whole text of an event file. Bad lines are skipped and logged;
/// this never fails.
pub fn parse_events(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(entry) => report.entries.push(entry),
            Err(error) => {
                log::warn!("Skipping line {}: '{}': {}", i + 1, line, error);
                report.skipped.push(SkippedLine {
                    line_no: i + 1,
                    text: line.to_string(),
                    error,
                });
            }
        }
    }

    report
}

/// Read and parse an event file. Only an unreadable file is an error.
pub fn read_events_file(path: &Path) -> Result<ParseReport> {
    let text = std::fs::read_to_string(path).map_err(|source| TimelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let report = parse_events(&text);
    log::info!(
        "Read {} events from {} ({} lines skipped)",
        report.entries.len(),
        path.display(),
        report.skipped.len()
    );
    Ok(report)
}
