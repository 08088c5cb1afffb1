//! Shared numeric constants for the ruler crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// Width of the resize band along each window edge, in pixels.
pub const RESIZE_BORDER_PX: i32 = 5;

// ── Ticks ───────────────────────────────────────────────────────

/// Every `MINOR_TICK_STEP`th pixel gets a tick.
pub const MINOR_TICK_STEP: i32 = 2;

/// Every `MID_TICK_STEP`th pixel gets a taller tick.
pub const MID_TICK_STEP: i32 = 10;

/// Every `MAJOR_TICK_STEP`th pixel gets the tallest tick and a numeric label.
pub const MAJOR_TICK_STEP: i32 = 100;

pub const MINOR_TICK_PX: i32 = 5;
pub const MID_TICK_PX: i32 = 10;
pub const MAJOR_TICK_PX: i32 = 15;

/// Horizontal inset of the "N pixels" length label.
pub const LENGTH_LABEL_X: i32 = 10;

/// Line height of the label font, in pixels (10pt Tahoma at 96 dpi).
pub const FONT_HEIGHT_PX: i32 = 16;

/// CSS font used by canvas surfaces.
pub const FONT_CSS: &str = "13px Tahoma, sans-serif";

// ── Window defaults ─────────────────────────────────────────────

pub const DEFAULT_WIDTH: i32 = 400;
pub const DEFAULT_HEIGHT: i32 = 75;

/// Default window opacity, in percent.
pub const DEFAULT_OPACITY_PERCENT: u8 = 65;

/// Step between the entries of the opacity menu, in percent.
pub const OPACITY_MENU_STEP: u8 = 10;

// ── Keyboard ────────────────────────────────────────────────────

/// Arrow-key step without modifiers.
pub const NUDGE_COARSE_PX: i32 = 5;

/// Arrow-key step with Ctrl held.
pub const NUDGE_FINE_PX: i32 = 1;
