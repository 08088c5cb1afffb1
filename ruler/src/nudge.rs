//! Arrow-key nudges.
//!
//! | Key | none | ctrl | ctrl+shift |
//! |-------|-----------|-----------|------------|
//! | Right | left += 5 | left += 1 | width += 1 |
//! | Left | left -= 5 | left -= 1 | width -= 1 |
//! | Up | top -= 5 | top -= 1 | height -= 1 |
//! | Down | top += 5 | top += 1 | height += 1 |
//!
//! Shift without Ctrl is treated as no modifier.

#[cfg(test)]
#[path = "nudge_test.rs"]
mod nudge_test;

use crate::consts::{NUDGE_COARSE_PX, NUDGE_FINE_PX};
use crate::geometry::WindowGeometry;
use crate::gesture::Key;

/// Which geometry field a nudge changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryField {
    Left,
    Top,
    Width,
    Height,
}

/// A single-field change to the window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryDelta {
    pub field: GeometryField,
    pub amount: i32,
}

impl GeometryDelta {
    #[must_use]
    pub fn new(field: GeometryField, amount: i32) -> Self {
        Self { field, amount }
    }

    /// Whether applying this delta changes the window size.
    #[must_use]
    pub fn resizes(&self) -> bool {
        matches!(self.field, GeometryField::Width | GeometryField::Height)
    }

    pub fn apply(&self, geometry: &mut WindowGeometry) {
        let slot = match self.field {
            GeometryField::Left => &mut geometry.left,
            GeometryField::Top => &mut geometry.top,
            GeometryField::Width => &mut geometry.width,
            GeometryField::Height => &mut geometry.height,
        };
        *slot = slot.saturating_add(self.amount);
    }
}

/// Look up the nudge for `key`. Returns `None` for non-arrow keys.
#[must_use]
pub fn nudge(key: &Key, ctrl: bool, shift: bool) -> Option<GeometryDelta> {
    let (position, size, sign) = match key {
        Key::Right => (GeometryField::Left, GeometryField::Width, 1),
        Key::Left => (GeometryField::Left, GeometryField::Width, -1),
        Key::Up => (GeometryField::Top, GeometryField::Height, -1),
        Key::Down => (GeometryField::Top, GeometryField::Height, 1),
        Key::Space | Key::Other(_) => return None,
    };

    let delta = match (ctrl, shift) {
        (false, _) => GeometryDelta::new(position, sign * NUDGE_COARSE_PX),
        (true, false) => GeometryDelta::new(position, sign * NUDGE_FINE_PX),
        (true, true) => GeometryDelta::new(size, sign * NUDGE_FINE_PX),
    };
    Some(delta)
}
