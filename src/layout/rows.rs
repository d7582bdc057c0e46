use std::collections::BTreeSet;

use super::Point;

/// Vertical offset of every row, starting at `margin`. A row listed in
/// `extra_rows` pushes the next one down by `extra_spacing` as well.
///
/// Returns the offsets and the offset one step past the last row.
pub fn row_offsets(
    row_count: usize,
    margin: f32,
    base_spacing: f32,
    extra_spacing: f32,
    extra_rows: &BTreeSet<usize>,
) -> (Vec<f32>, f32) {
    let mut offsets = Vec::with_capacity(row_count);
    let mut offset = margin;
    for row in 0..row_count {
        offsets.push(offset);
        offset += base_spacing;
        if extra_rows.contains(&row) {
            offset += extra_spacing;
        }
    }
    (offsets, offset)
}

/// Where the zig-zag leaves row `row`: right edge for even rows, left for odd.
pub fn endpoint_x(row: usize, row_start_x: f32, row_end_x: f32) -> f32 {
    if row % 2 == 0 {
        row_end_x
    } else {
        row_start_x
    }
}

/// A straight piece of the zig-zag path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Stair-step path joining consecutive rows: down from row i's endpoint,
/// then across to row i+1's endpoint.
pub fn zigzag(offsets: &[f32], row_start_x: f32, row_end_x: f32) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(offsets.len().saturating_sub(1) * 2);
    for (i, pair) in offsets.windows(2).enumerate() {
        let (y, y_next) = (pair[0], pair[1]);
        let x = endpoint_x(i, row_start_x, row_end_x);
        let x_next = endpoint_x(i + 1, row_start_x, row_end_x);
        segments.push(Segment {
            from: Point::new(x, y),
            to: Point::new(x, y_next),
        });
        segments.push(Segment {
            from: Point::new(x, y_next),
            to: Point::new(x_next, y_next),
        });
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_without_events_are_evenly_spaced() {
        let (offsets, end) = row_offsets(4, 20.0, 40.0, 20.0, &BTreeSet::new());
        assert_eq!(offsets, [20.0, 60.0, 100.0, 140.0]);
        assert_eq!(end, 180.0);
    }

    #[test]
    fn event_row_pushes_following_rows_down() {
        let extra = BTreeSet::from([1]);
        let (offsets, end) = row_offsets(4, 20.0, 40.0, 20.0, &extra);
        assert_eq!(offsets, [20.0, 60.0, 120.0, 160.0]);
        assert_eq!(end, 200.0);
    }

    #[test]
    fn endpoints_alternate_with_parity() {
        assert_eq!(endpoint_x(0, 20.0, 500.0), 500.0);
        assert_eq!(endpoint_x(1, 20.0, 500.0), 20.0);
        assert_eq!(endpoint_x(42, 20.0, 500.0), 500.0);
        assert_eq!(endpoint_x(99, 20.0, 500.0), 20.0);
    }

    #[test]
    fn zigzag_has_two_segments_per_gap() {
        let segments = zigzag(&[20.0, 60.0, 100.0], 20.0, 500.0);
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].from, Point::new(500.0, 20.0));
        assert_eq!(segments[0].to, Point::new(500.0, 60.0));
        assert_eq!(segments[1].to, Point::new(20.0, 60.0));
        assert_eq!(segments[2].from, Point::new(20.0, 60.0));
        assert_eq!(segments[3].to, Point::new(500.0, 100.0));
    }

    #[test]
    fn single_row_has_no_connector() {
        assert!(zigzag(&[20.0], 20.0, 500.0).is_empty());
    }
}
