/// Upper bound on markers per frame. Only reached at extreme zoom-out, where
/// the markers would be sub-pixel apart anyway.
pub const MAX_MARKERS: usize = 4096;

/// Quarter-units per full scale length.
const QUARTERS_PER_UNIT: u32 = 4;

/// Visual weight of a scale marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerTier {
    /// A whole scale length (30 cm).
    Unit,
    /// Half a scale length (15 cm).
    HalfUnit,
    /// A quarter of a scale length (7.5 cm).
    QuarterUnit,
}

impl MarkerTier {
    /// Classify by exact divisibility of the quarter counter.
    pub fn classify(quarter: u32) -> Self {
        if quarter % QUARTERS_PER_UNIT == 0 {
            Self::Unit
        } else if quarter % 2 == 0 {
            Self::HalfUnit
        } else {
            Self::QuarterUnit
        }
    }

    /// Fraction of the scale length this tier stands for.
    pub fn unit_fraction(self) -> f64 {
        match self {
            Self::Unit => 1.0,
            Self::HalfUnit => 0.5,
            Self::QuarterUnit => 0.25,
        }
    }
}

/// Vertical scale line spanning the whole content height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMarker {
    /// Position in quarter-units from the left margin (1 = 7.5 cm).
    pub quarter: u32,
    pub x: f32,
    pub tier: MarkerTier,
}

/// Markers every quarter row-length from `margin`, up to (excluding) the
/// first one at or past `canvas_width`.
pub fn scale_markers(margin: f32, row_length_px: f32, canvas_width: f32) -> Vec<ScaleMarker> {
    let mut markers = Vec::new();
    if !(row_length_px.is_finite() && row_length_px > 0.0) {
        return markers;
    }

    let mut quarter = 1u32;
    loop {
        let x = margin + quarter as f32 / QUARTERS_PER_UNIT as f32 * row_length_px;
        if x >= canvas_width {
            break;
        }
        if markers.len() == MAX_MARKERS {
            log::debug!("Scale marker cap reached at {} px per row", row_length_px);
            break;
        }
        markers.push(ScaleMarker {
            quarter,
            x,
            tier: MarkerTier::classify(quarter),
        });
        quarter += 1;
    }
    markers
}
