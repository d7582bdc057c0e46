//! Timeline geometry: row offsets, the zig-zag path, scale markers and event
//! placement. Pure functions of the config, the viewport and the set of rows
//! that carry events; recomputed from scratch on every redraw.

pub mod markers;
pub mod placement;
pub mod rows;

use std::collections::BTreeSet;

use crate::config::TimelineConfig;
use crate::model::Viewport;

pub use markers::{scale_markers, MarkerTier, ScaleMarker, MAX_MARKERS};
pub use placement::{place_event, Placement};
pub use rows::{endpoint_x, Segment};

/// A point in canvas coordinates (origin top-left, y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Geometry for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub margin: f32,
    /// Vertical offset of each row, strictly increasing.
    pub row_offsets: Vec<f32>,
    /// Left end of every row line.
    pub row_start_x: f32,
    /// Right end of every row line (tracks the canvas width).
    pub row_end_x: f32,
    /// Scrollable extent: past the last row plus a bottom margin.
    pub content_height: f32,
    /// Zoomed length of one scale unit, in pixels.
    pub row_length_px: f32,
    pub connectors: Vec<Segment>,
    pub markers: Vec<ScaleMarker>,
}

impl TimelineLayout {
    pub fn row_y(&self, row: usize) -> Option<f32> {
        self.row_offsets.get(row).copied()
    }

    /// Endpoint of the zig-zag on `row`.
    pub fn endpoint(&self, row: usize) -> Option<Point> {
        self.row_y(row)
            .map(|y| Point::new(endpoint_x(row, self.row_start_x, self.row_end_x), y))
    }
}

/// Lay out the whole timeline for the given viewport. Rows in `extra_rows`
/// get `extra_spacing` below them.
pub fn compute_layout(
    config: &TimelineConfig,
    viewport: &Viewport,
    extra_rows: &BTreeSet<usize>,
) -> TimelineLayout {
    let row_length_px = viewport.row_length_px(config);
    let (row_offsets, last_offset) = rows::row_offsets(
        config.row_count,
        config.margin,
        config.base_spacing,
        config.extra_spacing,
        extra_rows,
    );
    let content_height = last_offset + config.margin;
    let row_start_x = config.margin;
    let row_end_x = viewport.canvas_width - config.margin;

    let connectors = rows::zigzag(&row_offsets, row_start_x, row_end_x);
    let markers = scale_markers(config.margin, row_length_px, viewport.canvas_width);

    log::debug!(
        "Layout: {} rows, {:.0}px tall, {:.1}px per row, {} markers",
        row_offsets.len(),
        content_height,
        row_length_px,
        markers.len()
    );

    TimelineLayout {
        margin: config.margin,
        row_offsets,
        row_start_x,
        row_end_x,
        content_height,
        row_length_px,
        connectors,
        markers,
    }
}
