use super::TimelineLayout;
use crate::model::Event;

/// Where an event lands, and how far along its row it is in real units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    /// Distance already travelled along the row, from the end where the
    /// path enters it.
    pub left_cm: f64,
    /// Distance still to go before the path turns.
    pub right_cm: f64,
}

/// Fraction of the row travelled along the zig-zag, measured from screen-left.
/// Odd rows are walked right to left, so they are mirrored.
pub fn screen_fraction(row: usize, fraction: f64) -> f64 {
    if row % 2 == 0 {
        fraction
    } else {
        1.0 - fraction
    }
}

/// Place `event` on its row. `row_length_px` is the zoomed nominal row
/// length, not the canvas-dependent drawn length.
pub fn place_event(
    event: &Event,
    layout: &TimelineLayout,
    row_length_px: f32,
    scale_length_cm: f64,
) -> Placement {
    let along = screen_fraction(event.row, event.fraction);
    let left_cm = along * scale_length_cm;
    Placement {
        x: layout.margin + along as f32 * row_length_px,
        y: layout.row_y(event.row).unwrap_or(layout.margin),
        left_cm,
        right_cm: scale_length_cm - left_cm,
    }
}
