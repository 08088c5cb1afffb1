use super::*;

fn applied(key: &Key, ctrl: bool, shift: bool) -> WindowGeometry {
    let mut g = WindowGeometry::new(10, 20, 400, 75);
    nudge(key, ctrl, shift).unwrap().apply(&mut g);
    g
}

// =============================================================
// Table
// =============================================================

#[test]
fn right_plain_moves_left_by_five() {
    assert_eq!(applied(&Key::Right, false, false), WindowGeometry::new(15, 20, 400, 75));
}

#[test]
fn right_ctrl_moves_left_by_one() {
    assert_eq!(applied(&Key::Right, true, false), WindowGeometry::new(11, 20, 400, 75));
}

#[test]
fn right_ctrl_shift_grows_width_and_keeps_left() {
    assert_eq!(applied(&Key::Right, true, true), WindowGeometry::new(10, 20, 401, 75));
}

#[test]
fn left_row() {
    assert_eq!(applied(&Key::Left, false, false), WindowGeometry::new(5, 20, 400, 75));
    assert_eq!(applied(&Key::Left, true, false), WindowGeometry::new(9, 20, 400, 75));
    assert_eq!(applied(&Key::Left, true, true), WindowGeometry::new(10, 20, 399, 75));
}

#[test]
fn up_row() {
    assert_eq!(applied(&Key::Up, false, false), WindowGeometry::new(10, 15, 400, 75));
    assert_eq!(applied(&Key::Up, true, false), WindowGeometry::new(10, 19, 400, 75));
    assert_eq!(applied(&Key::Up, true, true), WindowGeometry::new(10, 20, 400, 74));
}

#[test]
fn down_row() {
    assert_eq!(applied(&Key::Down, false, false), WindowGeometry::new(10, 25, 400, 75));
    assert_eq!(applied(&Key::Down, true, false), WindowGeometry::new(10, 21, 400, 75));
    assert_eq!(applied(&Key::Down, true, true), WindowGeometry::new(10, 20, 400, 76));
}

#[test]
fn shift_alone_is_plain_step() {
    assert_eq!(nudge(&Key::Right, false, true), nudge(&Key::Right, false, false));
    assert_eq!(nudge(&Key::Down, false, true), Some(GeometryDelta::new(GeometryField::Top, 5)));
}

#[test]
fn non_arrow_keys_do_nothing() {
    assert!(nudge(&Key::Space, false, false).is_none());
    assert!(nudge(&Key::Other("Home".into()), true, true).is_none());
}

// =============================================================
// GeometryDelta
// =============================================================

#[test]
fn only_size_fields_resize() {
    assert!(!GeometryDelta::new(GeometryField::Left, 1).resizes());
    assert!(!GeometryDelta::new(GeometryField::Top, 1).resizes());
    assert!(GeometryDelta::new(GeometryField::Width, 1).resizes());
    assert!(GeometryDelta::new(GeometryField::Height, -1).resizes());
}
