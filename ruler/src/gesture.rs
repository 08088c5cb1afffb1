//! Input model: modifier keys, keys, and the drag/resize state machine.
//!
//! `GestureState` is the active pointer gesture tracked between press and
//! release. A press captures a [`DragAnchor`] once; every subsequent move
//! derives the new window bounds from that anchor and the current cursor, so
//! a burst of move events can never accumulate drift.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size, WindowGeometry};
use crate::region::ResizeRegion;

/// Keyboard modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Shift key is held.
    #[serde(default)]
    pub shift: bool,
    /// Ctrl key is held.
    #[serde(default)]
    pub ctrl: bool,
}

/// Keys the ruler reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    /// Any other key, carrying the host's name for it.
    Other(String),
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a [`Key`].
    #[must_use]
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            " " | "Spacebar" => Self::Space,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Reference captured when the pointer goes down.
///
/// Never mutated during the gesture; replaced only by the next press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAnchor {
    /// Screen-space cursor position at press.
    pub cursor: Point,
    /// Client rectangle size at press.
    pub rect: Size,
    /// Cursor position relative to the window origin at press.
    pub offset: Point,
}

impl DragAnchor {
    /// Capture an anchor for a press at `screen` on a window with `geometry`.
    #[must_use]
    pub fn capture(screen: Point, geometry: &WindowGeometry) -> Self {
        Self { cursor: screen, rect: geometry.size(), offset: geometry.screen_to_local(screen) }
    }

    /// Window origin that keeps the grabbed point under `screen`.
    #[must_use]
    pub fn moved_origin(&self, screen: Point) -> Point {
        screen - self.offset
    }

    /// Window size for a resize of `region` with the cursor now at `screen`.
    ///
    /// Returns `None` for regions that do not resize live.
    #[must_use]
    pub fn resized(&self, region: ResizeRegion, screen: Point) -> Option<Size> {
        let delta = screen - self.cursor;
        match region {
            ResizeRegion::E => Some(Size::new(self.rect.width.saturating_add(delta.x), self.rect.height)),
            ResizeRegion::S => Some(Size::new(self.rect.width, self.rect.height.saturating_add(delta.y))),
            ResizeRegion::Se => Some(Size::new(
                self.rect.width.saturating_add(delta.x),
                self.rect.height.saturating_add(delta.y),
            )),
            ResizeRegion::None
            | ResizeRegion::N
            | ResizeRegion::Ne
            | ResizeRegion::Sw
            | ResizeRegion::W
            | ResizeRegion::Nw => None,
        }
    }
}

/// State of the pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No button held; waiting for the next press.
    #[default]
    Idle,
    /// The primary button went down and has not been released.
    Dragging {
        /// Resize region latched on the first move over a border band,
        /// [`ResizeRegion::None`] while the gesture is a move.
        region: ResizeRegion,
        /// Fixed reference for every delta in this gesture.
        anchor: DragAnchor,
    },
}

impl GestureState {
    /// Start a gesture, replacing any gesture in progress.
    pub fn press(&mut self, screen: Point, geometry: &WindowGeometry) {
        *self = Self::Dragging { region: ResizeRegion::None, anchor: DragAnchor::capture(screen, geometry) };
    }

    /// End the gesture. Safe to call when idle.
    pub fn release(&mut self) {
        *self = Self::Idle;
    }

    /// Latch a resize region into the current drag. No-op when idle.
    pub fn latch_region(&mut self, new_region: ResizeRegion) {
        if let Self::Dragging { region, .. } = self {
            *region = new_region;
        }
    }

    /// The resize region of the current drag; `None` when idle or moving.
    #[must_use]
    pub fn region(&self) -> ResizeRegion {
        match self {
            Self::Idle => ResizeRegion::None,
            Self::Dragging { region, .. } => *region,
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
