use std::collections::BTreeSet;

use chrono::NaiveDate;
use life_timeline::layout::{compute_layout, place_event, MarkerTier, Point};
use life_timeline::model::{age_in_years, rows_with_events};
use life_timeline::{Event, TimelineConfig, Viewport};

fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn rows_are_strictly_increasing_with_and_without_events() {
    let config = TimelineConfig::default();
    let viewport = Viewport::new(1000.0, 700.0);
    let every_third: BTreeSet<usize> = (0..100).step_by(3).collect();

    for extra in [BTreeSet::new(), every_third] {
        let layout = compute_layout(&config, &viewport, &extra);
        assert!(layout.row_offsets.windows(2).all(|w| w[1] > w[0]));
        let last = *layout.row_offsets.last().unwrap();
        assert!(layout.content_height > last + config.margin);
    }
}

#[test]
fn zigzag_is_continuous_and_ends_on_each_rows_endpoint() {
    let config = TimelineConfig::default();
    let layout = compute_layout(&config, &Viewport::new(900.0, 600.0), &BTreeSet::from([4, 5]));

    let mut cursor = layout.endpoint(0).unwrap();
    for (i, pair) in layout.connectors.chunks(2).enumerate() {
        let (down, across) = (pair[0], pair[1]);
        assert_eq!(down.from, cursor, "gap before row {}", i + 1);
        assert_eq!(down.from.x, down.to.x);
        assert_eq!(down.to, across.from);
        assert_eq!(across.from.y, across.to.y);

        let next = layout.endpoint(i + 1).unwrap();
        assert_eq!(across.to, next);
        let expected_x = if (i + 1) % 2 == 0 { 880.0 } else { 20.0 };
        assert_eq!(next.x, expected_x);
        cursor = across.to;
    }
    assert_eq!(cursor, layout.endpoint(99).unwrap());
}

#[test]
fn row_width_tracks_canvas_not_scale() {
    let config = TimelineConfig::default();
    let narrow = compute_layout(&config, &Viewport::new(300.0, 600.0), &BTreeSet::new());
    assert_eq!(narrow.row_end_x, 280.0);
    // 30 cm is far wider than this canvas, so no marker fits
    assert!(narrow.markers.is_empty());

    let mut zoomed = Viewport::new(300.0, 600.0);
    zoomed.zoom_factor = 0.1;
    let layout = compute_layout(&config, &zoomed, &BTreeSet::new());
    assert!(!layout.markers.is_empty());
    assert!(layout.markers.iter().all(|m| m.x < 300.0));
}

#[test]
fn marker_tiers_repeat_quarter_half_quarter_unit() {
    let config = TimelineConfig::default();
    let mut viewport = Viewport::new(2000.0, 600.0);
    viewport.zoom_factor = 0.2;
    let layout = compute_layout(&config, &viewport, &BTreeSet::new());

    assert!(layout.markers.len() >= 8);
    let tiers: Vec<MarkerTier> = layout.markers.iter().take(8).map(|m| m.tier).collect();
    assert_eq!(
        tiers,
        [
            MarkerTier::QuarterUnit,
            MarkerTier::HalfUnit,
            MarkerTier::QuarterUnit,
            MarkerTier::Unit,
            MarkerTier::QuarterUnit,
            MarkerTier::HalfUnit,
            MarkerTier::QuarterUnit,
            MarkerTier::Unit,
        ]
    );
    let step = layout.row_length_px / 4.0;
    for (i, m) in layout.markers.iter().enumerate() {
        let expected = config.margin + (i as f32 + 1.0) * step;
        assert!((m.x - expected).abs() < 1e-2);
    }
}

#[test]
fn one_calendar_year_lands_at_the_end_of_row_zero() {
    let config = TimelineConfig::default();
    let event = Event::new(&config, date(3, 5, 1998), "First birthday").unwrap();

    assert!((event.age - 365.0 / 365.25).abs() < 1e-12);
    assert_eq!(event.row, 0);
    assert!(event.fraction > 0.999);

    let viewport = Viewport::new(1200.0, 800.0);
    let layout = compute_layout(&config, &viewport, &rows_with_events(std::slice::from_ref(&event)));
    let placement = place_event(&event, &layout, layout.row_length_px, config.scale_length_cm);
    assert!((placement.left_cm + placement.right_cm - 30.0).abs() < 1e-9);
    assert!(placement.right_cm < 0.03);
    assert_eq!(placement.y, 20.0);
}

#[test]
fn row_plus_fraction_reconstructs_age_over_the_whole_range() {
    let config = TimelineConfig::default();
    let birth = config.birth_date;
    let mut day = birth;
    while let Ok(event) = Event::new(&config, day, "") {
        let age = age_in_years(birth, day).unwrap();
        assert!(event.row <= 99);
        assert!((0.0..1.0).contains(&event.fraction));
        assert!((event.row as f64 + event.fraction - age).abs() < 1e-9);
        day = day + chrono::Duration::days(97);
    }
    assert!(day >= date(1, 1, 2096));
}

#[test]
fn placement_mirrors_on_odd_rows() {
    let config = TimelineConfig::default();
    let viewport = Viewport::new(1200.0, 800.0);
    let even = Event::new(&config, date(3, 5, 1997) + chrono::Duration::days(365 * 2 + 91), "")
        .unwrap();
    let odd = Event::new(&config, date(3, 5, 1997) + chrono::Duration::days(365 + 91), "").unwrap();
    assert_eq!(even.row % 2, 0);
    assert_eq!(odd.row % 2, 1);

    let layout = compute_layout(&config, &viewport, &rows_with_events(&[even.clone(), odd.clone()]));
    let l = layout.row_length_px;
    let p_even = place_event(&even, &layout, l, 30.0);
    let p_odd = place_event(&odd, &layout, l, 30.0);

    assert!((p_even.x - (20.0 + even.fraction as f32 * l)).abs() < 1e-2);
    assert!((p_odd.x - (20.0 + (1.0 - odd.fraction as f32) * l)).abs() < 1e-2);
    assert!((p_even.left_cm - even.fraction * 30.0).abs() < 1e-9);
    assert!((p_odd.left_cm - (1.0 - odd.fraction) * 30.0).abs() < 1e-9);
    assert_eq!(layout.endpoint(odd.row).map(|p| p.x), Some(20.0));
    assert_eq!(
        layout.endpoint(even.row),
        Some(Point::new(1180.0, layout.row_offsets[even.row]))
    );
}

#[test]
fn placement_stays_finite_at_the_zoom_limit() {
    let config = TimelineConfig::default();
    let mut viewport = Viewport::new(1200.0, 800.0);
    for _ in 0..2000 {
        viewport.zoom_in(&config);
    }
    let birthday = Event::new(&config, config.birth_date, "Born").unwrap();
    let layout = compute_layout(&config, &viewport, &rows_with_events(std::slice::from_ref(&birthday)));
    assert!(layout.row_length_px.is_finite());

    let placement = place_event(&birthday, &layout, layout.row_length_px, config.scale_length_cm);
    assert_eq!(placement.x, config.margin);
    assert_eq!(placement.y, 20.0);
    assert_eq!(placement.left_cm, 0.0);
}
