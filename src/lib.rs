//! Life timeline: ages 0-99 laid out on a zig-zag path with a real-world
//! distance scale, and dated events plotted along it.
//!
//! Everything here is toolkit-independent; the desktop shell lives in the
//! binary and only consumes [`render::render`].

pub mod config;
pub mod error;
pub mod io;
pub mod launch;
pub mod layout;
pub mod logging;
pub mod model;
pub mod render;

pub use config::TimelineConfig;
pub use error::{Result, TimelineError};
pub use launch::LaunchMode;
pub use model::{Event, Viewport};
pub use render::{render, DrawPrimitive, TimelineScene};
