use super::{Dash, LineStyle, Rgb};
use crate::layout::MarkerTier;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BACKGROUND: Rgb = Rgb::new(255, 255, 255);
pub const ROW_LINE: Rgb = Rgb::new(211, 211, 211);
pub const ZIGZAG: Rgb = Rgb::new(190, 190, 190);
pub const ROW_NUMBER: Rgb = Rgb::new(0, 0, 0);

pub const MARKER_UNIT: Rgb = Rgb::new(0, 128, 0);
pub const MARKER_HALF: Rgb = Rgb::new(0, 160, 0);
pub const MARKER_QUARTER: Rgb = Rgb::new(0, 192, 0);

pub const EVENT_FILL: Rgb = Rgb::new(255, 0, 0);
pub const EVENT_OUTLINE: Rgb = Rgb::new(0, 0, 0);
pub const DISTANCE_TEXT: Rgb = Rgb::new(0, 0, 255);
pub const LABEL_TEXT: Rgb = Rgb::new(0, 0, 0);

pub const LEGEND_FILL: Rgb = Rgb::new(255, 255, 255);
pub const LEGEND_OUTLINE: Rgb = Rgb::new(0, 0, 0);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const ROW_LINE_WIDTH: f32 = 1.0;
pub const ZIGZAG_WIDTH: f32 = 2.0;
pub const ROW_NUMBER_GAP: f32 = 5.0;

pub const EVENT_RADIUS: f32 = 5.0;
pub const EVENT_OUTLINE_WIDTH: f32 = 1.0;
/// Distance readout sits this far above the marker, the label as far below.
pub const EVENT_TEXT_OFFSET: f32 = 20.0;

pub const LEGEND_INSET: f32 = 10.0;
pub const LEGEND_WIDTH: f32 = 220.0;
pub const LEGEND_HEIGHT: f32 = 80.0;
pub const LEGEND_SAMPLE_LENGTH: f32 = 40.0;
pub const LEGEND_FIRST_ROW: f32 = 15.0;
pub const LEGEND_ROW_STEP: f32 = 20.0;
pub const LEGEND_TEXT_X: f32 = 60.0;

// ── Markers ──────────────────────────────────────────────────────────────────

/// Stroke for a scale marker: heavier and longer dashes for coarser tiers.
pub fn marker_style(tier: MarkerTier) -> LineStyle {
    match tier {
        MarkerTier::Unit => LineStyle::dashed(MARKER_UNIT, 3.0, Dash::new(15.0, 8.0)),
        MarkerTier::HalfUnit => LineStyle::dashed(MARKER_HALF, 1.0, Dash::new(8.0, 4.0)),
        MarkerTier::QuarterUnit => LineStyle::dashed(MARKER_QUARTER, 1.0, Dash::new(1.0, 2.0)),
    }
}
