//! Vertical layout by rotation.
//!
//! A vertical ruler is the horizontal ruler turned a quarter turn clockwise.
//! Rather than a second drawing routine, the surface is rotated 90 degrees and
//! shifted back into view, and the renderer is given the window's height as
//! its length.

#[cfg(test)]
#[path = "orientation_test.rs"]
mod orientation_test;

use crate::geometry::{Point, WindowGeometry};
use crate::render::{Surface, render_ruler};

/// Whether the ruler runs top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientation {
    pub vertical: bool,
}

impl Orientation {
    /// Flip the orientation and rotate the window footprint with it.
    pub fn toggle(&mut self, geometry: &mut WindowGeometry) {
        self.vertical = !self.vertical;
        geometry.swap_dimensions();
    }
}

/// The transform applied to the surface for a vertical ruler.
///
/// Maps a logical ruler point `(x, y)` to the window point
/// `(actual_width - 1 - y, x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuarterTurn {
    /// Translation along the rotated y axis, `-(actual_width - 1)`.
    pub shift: i32,
}

impl QuarterTurn {
    #[must_use]
    pub fn for_width(actual_width: i32) -> Self {
        Self { shift: actual_width.saturating_sub(1).saturating_neg() }
    }

    /// Map a point from logical ruler space into window space.
    #[must_use]
    pub fn apply(&self, logical: Point) -> Point {
        // Translate first, then rotate 90 degrees clockwise: (x, y) -> (-y, x).
        let y = logical.y.saturating_add(self.shift);
        Point::new(y.saturating_neg(), logical.x)
    }
}

/// Draw the ruler for a window of `actual_width` x `actual_height`.
///
/// # Errors
///
/// Propagates the first error returned by the surface.
pub fn render_oriented<S: Surface>(
    surface: &mut S,
    actual_width: i32,
    actual_height: i32,
    vertical: bool,
) -> Result<(), S::Error> {
    if !vertical {
        return render_ruler(surface, actual_width, actual_height);
    }

    let turn = QuarterTurn::for_width(actual_width);
    surface.rotate_degrees(90.0)?;
    surface.translate(0.0, f64::from(turn.shift))?;
    render_ruler(surface, actual_height, actual_width)
}
