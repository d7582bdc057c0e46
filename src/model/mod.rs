pub mod event;
pub mod viewport;

pub use event::{age_in_years, resolve_events, rows_with_events, Event};
pub use viewport::Viewport;
