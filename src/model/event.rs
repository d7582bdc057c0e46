use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::config::TimelineConfig;
use crate::error::{Result, TimelineError};

/// Mean length of a year, leap years included.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Fractional age in years at `date`, for someone born on `birth`.
pub fn age_in_years(birth: NaiveDate, date: NaiveDate) -> Result<f64> {
    if date < birth {
        return Err(TimelineError::InvalidDateOrder { birth, event: date });
    }
    let days = (date - birth).num_days() as f64;
    Ok(days / DAYS_PER_YEAR)
}

/// A dated life event, resolved to its row and position within the row.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub date: NaiveDate,
    pub label: String,
    /// Age in years at `date`.
    pub age: f64,
    /// Whole years, `floor(age)`.
    pub row: usize,
    /// Progress through the row, in `[0, 1)`.
    pub fraction: f64,
}

impl Event {
    /// Resolve a date against the configured birth date. Fails when the date
    /// precedes the birth date or falls past the last row.
    pub fn new(config: &TimelineConfig, date: NaiveDate, label: impl Into<String>) -> Result<Self> {
        let age = age_in_years(config.birth_date, date)?;
        if !(0.0..config.row_count as f64).contains(&age) {
            return Err(TimelineError::AgeOutOfRange {
                age,
                max: config.row_count,
            });
        }
        let row = age.floor() as usize;
        Ok(Self {
            date,
            label: label.into(),
            age,
            row,
            fraction: age - row as f64,
        })
    }
}

/// Build events from parsed `(date, label)` pairs, dropping (and logging)
/// any that fall outside the timeline. Returns the kept events and the
/// number dropped.
pub fn resolve_events(
    config: &TimelineConfig,
    entries: impl IntoIterator<Item = (NaiveDate, String)>,
) -> (Vec<Event>, usize) {
    let mut events = Vec::new();
    let mut dropped = 0usize;
    for (date, label) in entries {
        match Event::new(config, date, label.as_str()) {
            Ok(event) => events.push(event),
            Err(e) => {
                log::warn!("Ignoring event {} - {}: {}", date.format("%d/%m/%Y"), label, e);
                dropped += 1;
            }
        }
    }
    (events, dropped)
}

/// Rows that host at least one event and therefore get extra spacing below.
pub fn rows_with_events(events: &[Event]) -> BTreeSet<usize> {
    events.iter().map(|e| e.row).collect()
}
