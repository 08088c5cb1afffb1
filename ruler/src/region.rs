//! Resize-region classification for a borderless window.
//!
//! A window without a native frame has to decide for itself whether the
//! cursor is over an edge (resize) or the body (move). The window is split
//! into a band of `border_width` pixels along each edge and an interior; the
//! band is further split into eight compass regions, corners taking
//! precedence over edges.

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;

use serde::{Deserialize, Serialize};

use crate::error::RulerError;
use crate::geometry::{Point, Size};

/// Which part of the window the cursor is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResizeRegion {
    /// Interior or outside the window: moving, not resizing.
    #[default]
    None,
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

/// Cursor shapes the host can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorIcon {
    #[default]
    Default,
    /// Vertical double arrow.
    ResizeNs,
    /// Horizontal double arrow.
    ResizeWe,
    /// Diagonal double arrow, bottom-left to top-right.
    ResizeNesw,
    /// Diagonal double arrow, top-left to bottom-right.
    ResizeNwse,
}

impl ResizeRegion {
    /// The cursor to show while hovering this region.
    #[must_use]
    pub fn cursor(self) -> CursorIcon {
        match self {
            Self::None => CursorIcon::Default,
            Self::N | Self::S => CursorIcon::ResizeNs,
            Self::E | Self::W => CursorIcon::ResizeWe,
            Self::Ne | Self::Sw => CursorIcon::ResizeNesw,
            Self::Nw | Self::Se => CursorIcon::ResizeNwse,
        }
    }

    /// Whether dragging this region changes the window size.
    ///
    /// Only the east and south edges (and their shared corner) resize live;
    /// the other regions report a resize cursor but leave the window alone.
    #[must_use]
    pub fn resizes_live(self) -> bool {
        matches!(self, Self::E | Self::S | Self::Se)
    }
}

/// Check that `border_width` is usable as a resize band width.
///
/// # Errors
///
/// Returns [`RulerError::InvalidArgument`] if `border_width` is negative or
/// so large that twice its value overflows.
pub fn validate_border_width(border_width: i32) -> Result<i32, RulerError> {
    if border_width < 0 {
        return Err(RulerError::InvalidArgument(format!("border width must be non-negative, got {border_width}")));
    }
    if border_width.checked_mul(2).is_none() {
        return Err(RulerError::InvalidArgument(format!("border width too large, got {border_width}")));
    }
    Ok(border_width)
}

/// Classify a window-local cursor position.
///
/// Returns [`ResizeRegion::None`] for points in the interior
/// `[border, w - border) x [border, h - border)` and for points outside the
/// window altogether.
///
/// # Errors
///
/// Returns [`RulerError::InvalidArgument`] if `border_width` is rejected by
/// [`validate_border_width`].
pub fn classify(cursor: Point, size: Size, border_width: i32) -> Result<ResizeRegion, RulerError> {
    let border_width = validate_border_width(border_width)?;

    if !contains(cursor, 0, 0, size.width, size.height) {
        return Ok(ResizeRegion::None);
    }
    let inner_w = size.width.saturating_sub(2 * border_width);
    let inner_h = size.height.saturating_sub(2 * border_width);
    if contains(cursor, border_width, border_width, inner_w, inner_h) {
        return Ok(ResizeRegion::None);
    }

    Ok(band_region(cursor, size, border_width))
}

/// Half-open rectangle containment, widened so edges past `i32` stay exact.
fn contains(p: Point, x: i32, y: i32, w: i32, h: i32) -> bool {
    let (px, py, x, y) = (i64::from(p.x), i64::from(p.y), i64::from(x), i64::from(y));
    px >= x && px < x + i64::from(w) && py >= y && py < y + i64::from(h)
}

/// Compass region for a point already known to lie in the border band.
///
/// Anything past the west band on a middle row reads as east.
fn band_region(cursor: Point, size: Size, border_width: i32) -> ResizeRegion {
    let west = cursor.x <= border_width;
    let east = cursor.x >= size.width - border_width;

    if cursor.y <= border_width {
        if west {
            ResizeRegion::Nw
        } else if east {
            ResizeRegion::Ne
        } else {
            ResizeRegion::N
        }
    } else if cursor.y < size.height - border_width {
        if west { ResizeRegion::W } else { ResizeRegion::E }
    } else if west {
        ResizeRegion::Sw
    } else if east {
        ResizeRegion::Se
    } else {
        ResizeRegion::S
    }
}
