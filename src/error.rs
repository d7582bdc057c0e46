//! Error type shared by the parser, the event model and the launcher.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Everything that can go wrong between reading input and opening the window.
#[derive(Debug, Error)]
pub enum TimelineError {
    #[error("invalid date '{input}' (expected dd/mm/yyyy): {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("malformed line: {reason}")]
    MalformedLine { reason: String },

    #[error("event date {event} is earlier than the birth date {birth}")]
    InvalidDateOrder { birth: NaiveDate, event: NaiveDate },

    #[error("age {age:.2} is outside the timeline (0 to {max} years)")]
    AgeOutOfRange { age: f64, max: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read the event date from the terminal: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("failed to open the timeline window: {0}")]
    Window(String),
}

pub type Result<T, E = TimelineError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_order_message_names_both_dates() {
        let err = TimelineError::InvalidDateOrder {
            birth: NaiveDate::from_ymd_opt(1997, 5, 3).unwrap(),
            event: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        };
        let msg = err.to_string();
        assert!(msg.contains("1990-01-01"));
        assert!(msg.contains("1997-05-03"));
    }

    #[test]
    fn io_error_message_names_the_path() {
        let err = TimelineError::Io {
            path: PathBuf::from("events.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("events.txt"));
    }
}
