pub mod event_file;
pub mod prompt;

pub use event_file::{parse_events, read_events_file, ParseReport};
pub use prompt::prompt_date;
