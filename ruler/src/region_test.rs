use super::*;
use crate::consts::RESIZE_BORDER_PX;

const SIZE: Size = Size { width: 400, height: 75 };

fn region_at(x: i32, y: i32) -> ResizeRegion {
    classify(Point::new(x, y), SIZE, RESIZE_BORDER_PX).unwrap()
}

// =============================================================
// Interior
// =============================================================

#[test]
fn strict_interior_is_none() {
    let bw = RESIZE_BORDER_PX;
    for x in (bw + 1)..(SIZE.width - bw) {
        for y in (bw + 1)..(SIZE.height - bw) {
            assert_eq!(region_at(x, y), ResizeRegion::None, "({x}, {y})");
        }
    }
}

#[test]
fn inner_edge_of_band_counts_as_interior() {
    assert_eq!(region_at(5, 30), ResizeRegion::None);
    assert_eq!(region_at(200, 5), ResizeRegion::None);
}

#[test]
fn outside_window_is_none() {
    assert_eq!(region_at(-1, 10), ResizeRegion::None);
    assert_eq!(region_at(400, 10), ResizeRegion::None);
    assert_eq!(region_at(10, 75), ResizeRegion::None);
    assert_eq!(region_at(10, -3), ResizeRegion::None);
}

// =============================================================
// Corners
// =============================================================

#[test]
fn top_left_corner_is_nw() {
    assert_eq!(region_at(0, 0), ResizeRegion::Nw);
}

#[test]
fn top_right_corner_is_ne() {
    assert_eq!(region_at(399, 0), ResizeRegion::Ne);
}

#[test]
fn bottom_right_corner_is_se() {
    assert_eq!(region_at(399, 74), ResizeRegion::Se);
}

#[test]
fn bottom_left_corner_is_sw() {
    assert_eq!(region_at(0, 74), ResizeRegion::Sw);
}

#[test]
fn corners_win_over_edges() {
    assert_eq!(region_at(3, 2), ResizeRegion::Nw);
    assert_eq!(region_at(396, 72), ResizeRegion::Se);
}

// =============================================================
// Edges
// =============================================================

#[test]
fn top_band_middle_is_n() {
    assert_eq!(region_at(200, 0), ResizeRegion::N);
    assert_eq!(region_at(200, 4), ResizeRegion::N);
}

#[test]
fn bottom_band_middle_is_s() {
    assert_eq!(region_at(200, 74), ResizeRegion::S);
    assert_eq!(region_at(200, 70), ResizeRegion::S);
}

#[test]
fn left_band_is_w() {
    assert_eq!(region_at(0, 30), ResizeRegion::W);
    assert_eq!(region_at(4, 30), ResizeRegion::W);
}

#[test]
fn right_band_is_e() {
    assert_eq!(region_at(399, 30), ResizeRegion::E);
    assert_eq!(region_at(395, 30), ResizeRegion::E);
}

#[test]
fn band_middle_row_defaults_to_east() {
    assert_eq!(band_region(Point::new(200, 30), SIZE, RESIZE_BORDER_PX), ResizeRegion::E);
    assert_eq!(band_region(Point::new(6, 30), SIZE, RESIZE_BORDER_PX), ResizeRegion::E);
}

// =============================================================
// Contract
// =============================================================

#[test]
fn negative_border_width_is_rejected() {
    let err = classify(Point::new(0, 0), SIZE, -1).unwrap_err();
    assert!(matches!(err, RulerError::InvalidArgument(_)));
    assert!(err.to_string().contains("-1"));
}

#[test]
fn border_width_too_large_to_double_is_rejected() {
    let err = classify(Point::new(10, 10), SIZE, i32::MAX / 2 + 1).unwrap_err();
    assert!(matches!(err, RulerError::InvalidArgument(_)));
    assert!(matches!(validate_border_width(i32::MAX), Err(RulerError::InvalidArgument(_))));
}

#[test]
fn largest_doubling_border_width_is_accepted() {
    let bw = i32::MAX / 2;
    assert_eq!(validate_border_width(bw), Ok(bw));
    assert_eq!(classify(Point::new(10, 10), SIZE, bw).unwrap(), ResizeRegion::Nw);
}

#[test]
fn extreme_cursor_and_size_do_not_overflow() {
    let size = Size::new(i32::MAX, i32::MAX);
    assert_eq!(classify(Point::new(i32::MAX - 1, 1), size, RESIZE_BORDER_PX).unwrap(), ResizeRegion::Ne);
    assert_eq!(classify(Point::new(i32::MIN, i32::MIN), SIZE, RESIZE_BORDER_PX).unwrap(), ResizeRegion::None);
    assert_eq!(
        classify(Point::new(0, 0), Size::new(i32::MIN, 75), RESIZE_BORDER_PX).unwrap(),
        ResizeRegion::None
    );
}

#[test]
fn zero_border_width_has_no_band() {
    assert_eq!(classify(Point::new(0, 0), SIZE, 0).unwrap(), ResizeRegion::None);
    assert_eq!(classify(Point::new(399, 74), SIZE, 0).unwrap(), ResizeRegion::None);
}

// =============================================================
// Cursor icons
// =============================================================

#[test]
fn cursor_for_each_region() {
    assert_eq!(ResizeRegion::None.cursor(), CursorIcon::Default);
    assert_eq!(ResizeRegion::N.cursor(), CursorIcon::ResizeNs);
    assert_eq!(ResizeRegion::S.cursor(), CursorIcon::ResizeNs);
    assert_eq!(ResizeRegion::E.cursor(), CursorIcon::ResizeWe);
    assert_eq!(ResizeRegion::W.cursor(), CursorIcon::ResizeWe);
    assert_eq!(ResizeRegion::Ne.cursor(), CursorIcon::ResizeNesw);
    assert_eq!(ResizeRegion::Sw.cursor(), CursorIcon::ResizeNesw);
    assert_eq!(ResizeRegion::Nw.cursor(), CursorIcon::ResizeNwse);
    assert_eq!(ResizeRegion::Se.cursor(), CursorIcon::ResizeNwse);
}

#[test]
fn only_east_south_and_southeast_resize_live() {
    let live: Vec<_> = [
        ResizeRegion::None,
        ResizeRegion::N,
        ResizeRegion::Ne,
        ResizeRegion::E,
        ResizeRegion::Se,
        ResizeRegion::S,
        ResizeRegion::Sw,
        ResizeRegion::W,
        ResizeRegion::Nw,
    ]
    .into_iter()
    .filter(|r| r.resizes_live())
    .collect();
    assert_eq!(live, vec![ResizeRegion::E, ResizeRegion::Se, ResizeRegion::S]);
}

#[test]
fn cursor_icon_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&CursorIcon::ResizeNwse).unwrap(), r#""resize_nwse""#);
}
