//! Handle placement and drag round trips.

use splitkit_css::{combine, parse, Axis, Track};
use splitkit_layout::{first_non_zero, resize_adjacent, size_at_track, ResizeConfig, ResizeError};

use crate::support::{assert_pair_preserved, assert_px_near, init_tracing, TestGrid};

fn no_snap() -> ResizeConfig {
    ResizeConfig::default().with_snap_offset(0.0)
}

#[test]
fn test_handle_offsets_follow_gaps() {
    init_tracing();
    let grid = TestGrid::new(Axis::Column, "1fr 1fr 1fr", "100px 100px 100px", 320.0)
        .with_gap("10px");
    let measured = grid.measured();

    assert_px_near(size_at_track(0, &measured, grid.gap(), true), 100.0, 0.001);
    assert_px_near(size_at_track(1, &measured, grid.gap(), false), 110.0, 0.001);
    assert_px_near(size_at_track(2, &measured, grid.gap(), true), 320.0, 0.001);
}

#[test]
fn test_anchor_skips_collapsed_tracks() {
    init_tracing();
    let grid = TestGrid::new(Axis::Row, "0px 1fr 1fr", "0px 50px 50px", 100.0);
    assert_eq!(first_non_zero(&grid.measured()), Some(1));

    let collapsed = TestGrid::new(Axis::Row, "0px 0px", "0px 0px", 0.0);
    assert_eq!(first_non_zero(&collapsed.measured()), Some(1));
}

#[test]
fn test_drag_keeps_fr_units() {
    init_tracing();
    let mut grid = TestGrid::new(Axis::Column, "1fr 1fr 2fr", "100px 100px 200px", 400.0);

    let rule = grid.drag(0, 150.0, &no_snap()).unwrap();
    assert_eq!(rule, "1.5fr 0.5fr 2fr");
    assert_eq!(grid.rule().as_deref(), Some("1.5fr 0.5fr 2fr"));
    assert_eq!(grid.matched.len(), 1);
}

#[test]
fn test_drag_with_gap_and_percent() {
    init_tracing();
    let mut grid = TestGrid::new(Axis::Column, "200px 25%", "200px 100px", 400.0)
        .with_gap("20px");

    // Track 1 ends at 320px; moving the boundary to 150px leaves 150px for it.
    let rule = grid.drag(0, 150.0, &no_snap()).unwrap();
    assert_eq!(rule, "150px 37.5%");
}

#[test]
fn test_repeated_drags_use_latest_rule() {
    init_tracing();
    let mut grid = TestGrid::new(Axis::Row, "100px 100px", "100px 100px", 200.0);

    assert_eq!(grid.drag(0, 80.0, &no_snap()).unwrap(), "80px 120px");
    grid.remeasure("80px 120px");
    assert_eq!(grid.drag(0, 140.0, &no_snap()).unwrap(), "140px 60px");
}

#[test]
fn test_drag_respects_min_sizes() {
    init_tracing();
    let mut grid = TestGrid::new(Axis::Column, "1fr 1fr", "100px 100px", 200.0);
    let config = no_snap().with_track_min_size(1, 50.0);

    assert_eq!(grid.drag(0, 190.0, &config).unwrap(), "1.5fr 0.5fr");
}

#[test]
fn test_drag_without_measurement_fails() {
    init_tracing();
    let mut grid = TestGrid::new(Axis::Column, "1fr 1fr", "auto 100px", 200.0);
    assert_eq!(grid.drag(0, 50.0, &no_snap()), Err(ResizeError::Unmeasured(0)));
    assert_eq!(grid.rule().as_deref(), Some("1fr 1fr"));
}

#[test]
fn test_resize_preserves_pair_size() {
    init_tracing();
    let measured = parse("40px 60px 100px");
    let config = ResizeConfig::default().with_min_size(5.0).with_drag_interval(10.0);

    for position in [0.0, 12.0, 33.0, 47.0, 91.0, 120.0] {
        let after = resize_adjacent(&measured, 0, position, Some(4.0), &config).unwrap();
        assert_pair_preserved((40.0, 60.0), after);
        assert!(after.0 >= 5.0 && after.1 >= 5.0);
    }
}

#[test]
fn test_sparse_live_measurement_merges_into_rule() {
    init_tracing();
    let live = [None, Some(Track::Px(42.0)), None];
    assert_eq!(combine("1fr 10px 1fr", &live), "1fr 42px 1fr");
}
