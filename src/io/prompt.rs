use std::io::{BufRead, Write};

use chrono::NaiveDate;

use super::event_file::parse_date;
use crate::error::{Result, TimelineError};

pub const PROMPT: &str = "Enter the event date (dd/mm/yyyy): ";

/// Ask for a single date on `output` and read the answer from `input`.
pub fn prompt_date(mut input: impl BufRead, mut output: impl Write) -> Result<NaiveDate> {
    output.write_all(PROMPT.as_bytes()).map_err(TimelineError::Prompt)?;
    output.flush().map_err(TimelineError::Prompt)?;

    let mut answer = String::new();
    let read = input.read_line(&mut answer).map_err(TimelineError::Prompt)?;
    if read == 0 {
        return Err(TimelineError::Prompt(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "no date entered",
        )));
    }
    parse_date(&answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_one_date() {
        let mut out = Vec::new();
        let date = prompt_date("03/05/2020\n".as_bytes(), &mut out).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 5, 3).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), PROMPT);
    }

    #[test]
    fn malformed_answer_is_fatal() {
        let err = prompt_date("2020-05-03\n".as_bytes(), Vec::new()).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidDate { .. }));
    }

    #[test]
    fn closed_input_is_an_error() {
        let err = prompt_date("".as_bytes(), Vec::new()).unwrap_err();
        assert!(matches!(err, TimelineError::Prompt(_)));
    }
}
