//! Turns a layout into a flat list of draw primitives. No toolkit types here;
//! the shell maps primitives onto whatever painter it has.

pub mod legend;
pub mod style;

use crate::config::TimelineConfig;
use crate::layout::{compute_layout, place_event, Point, TimelineLayout};
use crate::model::{rows_with_events, Event, Viewport};

/// Opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

/// Dash pattern: `on` pixels drawn, `off` pixels skipped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    pub on: f32,
    pub off: f32,
}

impl Dash {
    pub const fn new(on: f32, off: f32) -> Self {
        Self { on, off }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub color: Rgb,
    pub width: f32,
    pub dash: Option<Dash>,
}

impl LineStyle {
    pub const fn solid(color: Rgb, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    pub const fn dashed(color: Rgb, width: f32, dash: Dash) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

/// Which point of the text box sits on `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    LeftCenter,
    Center,
    RightCenter,
}

/// What a piece of text is for; the shell picks the font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    RowNumber,
    Distance,
    EventLabel,
    Legend,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    Line {
        from: Point,
        to: Point,
        style: LineStyle,
    },
    Rect {
        min: Point,
        max: Point,
        fill: Rgb,
        outline: Rgb,
    },
    Circle {
        center: Point,
        radius: f32,
        fill: Rgb,
        outline: Rgb,
    },
    Text {
        at: Point,
        anchor: Anchor,
        text: String,
        color: Rgb,
        role: TextRole,
    },
}

/// Everything needed to paint one frame.
#[derive(Debug, Clone)]
pub struct TimelineScene {
    pub layout: TimelineLayout,
    pub primitives: Vec<DrawPrimitive>,
    pub content_width: f32,
    pub content_height: f32,
}

/// Readout shown above an event marker.
pub fn distance_text(left_cm: f64, right_cm: f64) -> String {
    format!("Left: {:.2} cm | Right: {:.2} cm", left_cm, right_cm)
}

/// Build the full frame: rows, zig-zag, scale markers, legend, then events.
pub fn render(config: &TimelineConfig, viewport: &Viewport, events: &[Event]) -> TimelineScene {
    let layout = compute_layout(config, viewport, &rows_with_events(events));
    let mut primitives = Vec::new();

    draw_rows(&layout, &mut primitives);

    let zigzag = LineStyle::solid(style::ZIGZAG, style::ZIGZAG_WIDTH);
    primitives.extend(layout.connectors.iter().map(|seg| DrawPrimitive::Line {
        from: seg.from,
        to: seg.to,
        style: zigzag,
    }));

    primitives.extend(layout.markers.iter().map(|marker| DrawPrimitive::Line {
        from: Point::new(marker.x, 0.0),
        to: Point::new(marker.x, layout.content_height),
        style: style::marker_style(marker.tier),
    }));

    primitives.extend(legend::legend(config.margin, config.scale_length_cm));

    for event in events {
        draw_event(config, &layout, event, &mut primitives);
    }

    TimelineScene {
        content_width: viewport.canvas_width,
        content_height: layout.content_height,
        layout,
        primitives,
    }
}

fn draw_rows(layout: &TimelineLayout, out: &mut Vec<DrawPrimitive>) {
    let row_line = LineStyle::solid(style::ROW_LINE, style::ROW_LINE_WIDTH);
    for (row, &y) in layout.row_offsets.iter().enumerate() {
        out.push(DrawPrimitive::Line {
            from: Point::new(layout.row_start_x, y),
            to: Point::new(layout.row_end_x, y),
            style: row_line,
        });
        out.push(DrawPrimitive::Text {
            at: Point::new(layout.row_start_x - style::ROW_NUMBER_GAP, y),
            anchor: Anchor::RightCenter,
            text: row.to_string(),
            color: style::ROW_NUMBER,
            role: TextRole::RowNumber,
        });
        out.push(DrawPrimitive::Text {
            at: Point::new(layout.row_end_x + style::ROW_NUMBER_GAP, y),
            anchor: Anchor::LeftCenter,
            text: row.to_string(),
            color: style::ROW_NUMBER,
            role: TextRole::RowNumber,
        });
    }
}

fn draw_event(
    config: &TimelineConfig,
    layout: &TimelineLayout,
    event: &Event,
    out: &mut Vec<DrawPrimitive>,
) {
    let placement = place_event(event, layout, layout.row_length_px, config.scale_length_cm);
    let center = Point::new(placement.x, placement.y);

    out.push(DrawPrimitive::Circle {
        center,
        radius: style::EVENT_RADIUS,
        fill: style::EVENT_FILL,
        outline: style::EVENT_OUTLINE,
    });
    out.push(DrawPrimitive::Text {
        at: Point::new(center.x, center.y - style::EVENT_TEXT_OFFSET),
        anchor: Anchor::Center,
        text: distance_text(placement.left_cm, placement.right_cm),
        color: style::DISTANCE_TEXT,
        role: TextRole::Distance,
    });
    if !event.label.is_empty() {
        out.push(DrawPrimitive::Text {
            at: Point::new(center.x, center.y + style::EVENT_TEXT_OFFSET),
            anchor: Anchor::Center,
            text: event.label.clone(),
            color: style::LABEL_TEXT,
            role: TextRole::EventLabel,
        });
    }
}
