use super::style::{self, marker_style};
use super::{Anchor, DrawPrimitive, TextRole};
use crate::layout::{MarkerTier, Point};

/// Tiers in legend order, coarsest first.
const TIERS: [MarkerTier; 3] = [MarkerTier::Unit, MarkerTier::HalfUnit, MarkerTier::QuarterUnit];

/// `30.0` -> "30 cm", `7.5` -> "7.5 cm".
pub fn format_cm(value: f64) -> String {
    format!("{} cm", value)
}

/// Boxed key explaining the three marker tiers, anchored at the top-left
/// corner of the content.
pub fn legend(margin: f32, scale_length_cm: f64) -> Vec<DrawPrimitive> {
    let x = margin + style::LEGEND_INSET;
    let y = margin + style::LEGEND_INSET;

    let mut out = vec![DrawPrimitive::Rect {
        min: Point::new(x, y),
        max: Point::new(x + style::LEGEND_WIDTH, y + style::LEGEND_HEIGHT),
        fill: style::LEGEND_FILL,
        outline: style::LEGEND_OUTLINE,
    }];

    for (i, tier) in TIERS.into_iter().enumerate() {
        let row_y = y + style::LEGEND_FIRST_ROW + i as f32 * style::LEGEND_ROW_STEP;
        let sample_x = x + style::LEGEND_INSET;
        out.push(DrawPrimitive::Line {
            from: Point::new(sample_x, row_y),
            to: Point::new(sample_x + style::LEGEND_SAMPLE_LENGTH, row_y),
            style: marker_style(tier),
        });
        out.push(DrawPrimitive::Text {
            at: Point::new(x + style::LEGEND_TEXT_X, row_y),
            anchor: Anchor::LeftCenter,
            text: format_cm(scale_length_cm * tier.unit_fraction()),
            color: style::LEGEND_OUTLINE,
            role: TextRole::Legend,
        });
    }
    out
}
