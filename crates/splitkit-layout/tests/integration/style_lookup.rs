//! Style lookup across inline, matched and computed styles.

use splitkit_css::{get_styles, Axis, StyleMap};

use crate::support::{init_tracing, TestGrid};

#[test]
fn test_rule_falls_back_to_stylesheet() {
    init_tracing();
    let grid = TestGrid::new(Axis::Column, "1fr 10px 1fr", "295px 10px 295px", 600.0);
    assert_eq!(grid.rule().as_deref(), Some("1fr 10px 1fr"));
}

#[test]
fn test_inline_rule_wins() {
    init_tracing();
    let mut grid = TestGrid::new(Axis::Row, "1fr 1fr", "100px 100px", 200.0);
    grid.inline.set("grid-template-rows", "3fr 1fr");
    assert_eq!(grid.rule().as_deref(), Some("3fr 1fr"));
}

#[test]
fn test_empty_inline_rule_is_ignored() {
    init_tracing();
    let mut grid = TestGrid::new(Axis::Column, "1fr 1fr", "100px 100px", 200.0);
    grid.inline.set("grid-template-columns", "");
    assert_eq!(grid.rule().as_deref(), Some("1fr 1fr"));
}

#[test]
fn test_gap_lookup() {
    init_tracing();
    let grid = TestGrid::new(Axis::Column, "1fr 1fr", "95px 95px", 200.0).with_gap("10px");
    assert_eq!(grid.gap(), Some(10.0));

    let no_gap = TestGrid::new(Axis::Column, "1fr 1fr", "100px 100px", 200.0);
    assert_eq!(no_gap.gap(), None);
}

#[test]
fn test_many_grids_resolve_independently() {
    init_tracing();
    let own = [
        StyleMap::new(),
        StyleMap::new().with("grid-template-columns", "2px 2px"),
        StyleMap::new(),
    ];
    let matched = [
        StyleMap::new().with("grid-template-columns", "1px 1px"),
        StyleMap::new().with("grid-template-columns", "9px 9px"),
        StyleMap::new().with("grid-template-rows", "1px"),
    ];
    assert_eq!(
        get_styles(Axis::Column.template_property(), &own, &matched),
        ["1px 1px", "2px 2px"]
    );
}
