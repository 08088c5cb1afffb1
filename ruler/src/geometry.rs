#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// A pixel position, in either screen or window-local space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Saturating, so extreme screen coordinates cannot overflow.
impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point { x: self.x.saturating_sub(rhs.x), y: self.y.saturating_sub(rhs.y) }
    }
}

/// Width and height of a window's client area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// On-screen bounds of the ruler window.
///
/// Owned by the host shell. Core operations receive it as `&mut` for the
/// duration of a single call and never hold onto a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self { left: 0, top: 0, width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT }
    }
}

impl WindowGeometry {
    #[must_use]
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    /// Top-left corner in screen coordinates.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Convert a screen-space point to window-local coordinates.
    #[must_use]
    pub fn screen_to_local(&self, screen: Point) -> Point {
        screen - self.origin()
    }

    /// Raise width and height to at least `min`. Returns whether anything changed.
    pub fn clamp_size(&mut self, min: i32) -> bool {
        let clamped = Size::new(self.width.max(min), self.height.max(min));
        let changed = clamped != self.size();
        self.width = clamped.width;
        self.height = clamped.height;
        changed
    }

    /// Exchange width and height in a single assignment.
    pub fn swap_dimensions(&mut self) {
        (self.width, self.height) = (self.height, self.width);
    }
}
