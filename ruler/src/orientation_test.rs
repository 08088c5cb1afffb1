#![allow(clippy::float_cmp)]

use super::*;
use crate::render::{DrawCall, RecordingSurface};

// =============================================================
// Orientation
// =============================================================

#[test]
fn default_is_horizontal() {
    assert!(!Orientation::default().vertical);
}

#[test]
fn toggle_flips_flag_and_swaps_dimensions() {
    let mut o = Orientation::default();
    let mut g = WindowGeometry::new(10, 20, 400, 75);
    o.toggle(&mut g);
    assert!(o.vertical);
    assert_eq!(g, WindowGeometry::new(10, 20, 75, 400));
}

#[test]
fn toggle_twice_round_trips() {
    let mut o = Orientation::default();
    let mut g = WindowGeometry::new(10, 20, 400, 75);
    o.toggle(&mut g);
    o.toggle(&mut g);
    assert!(!o.vertical);
    assert_eq!(g, WindowGeometry::new(10, 20, 400, 75));
}

// =============================================================
// QuarterTurn
// =============================================================

#[test]
fn quarter_turn_maps_origin_to_top_right() {
    let t = QuarterTurn::for_width(75);
    assert_eq!(t.apply(Point::new(0, 0)), Point::new(74, 0));
}

#[test]
fn quarter_turn_runs_ruler_down_the_window() {
    let t = QuarterTurn::for_width(75);
    assert_eq!(t.apply(Point::new(100, 0)), Point::new(74, 100));
    assert_eq!(t.apply(Point::new(100, 15)), Point::new(59, 100));
}

#[test]
fn quarter_turn_keeps_far_edge_in_window() {
    let t = QuarterTurn::for_width(75);
    assert_eq!(t.apply(Point::new(0, 74)), Point::new(0, 0));
}

// =============================================================
// render_oriented
// =============================================================

#[test]
fn horizontal_renders_without_transform() {
    let mut s = RecordingSurface::default();
    let Ok(()) = render_oriented(&mut s, 400, 75, false);
    assert_eq!(s.calls[0], DrawCall::StrokeRect { x: 0.0, y: 0.0, w: 399.0, h: 74.0 });
    assert!(!s.calls.iter().any(|c| matches!(c, DrawCall::Rotate { .. } | DrawCall::Translate { .. })));
}

#[test]
fn vertical_rotates_then_translates_then_renders_swapped() {
    let mut s = RecordingSurface::default();
    let Ok(()) = render_oriented(&mut s, 75, 400, true);
    assert_eq!(s.calls[0], DrawCall::Rotate { degrees: 90.0 });
    assert_eq!(s.calls[1], DrawCall::Translate { dx: 0.0, dy: -74.0 });
    assert_eq!(s.calls[2], DrawCall::StrokeRect { x: 0.0, y: 0.0, w: 399.0, h: 74.0 });
    assert_eq!(s.texts()[0].0, "400 pixels");
}

#[test]
fn vertical_matches_horizontal_after_transform() {
    let mut horizontal = RecordingSurface::default();
    let Ok(()) = render_oriented(&mut horizontal, 400, 75, false);
    let mut vertical = RecordingSurface::default();
    let Ok(()) = render_oriented(&mut vertical, 75, 400, true);
    assert_eq!(&vertical.calls[2..], &horizontal.calls[..]);
}
