use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::command::{Command, MenuItem, MenuState, build_menu};
use crate::consts::{DEFAULT_OPACITY_PERCENT, RESIZE_BORDER_PX};
use crate::error::RulerError;
use crate::geometry::{Point, WindowGeometry};
use crate::gesture::{DragAnchor, GestureState, Key, Modifiers};
use crate::nudge::nudge;
use crate::orientation::{Orientation, render_oriented};
use crate::region::{CursorIcon, ResizeRegion, classify, validate_border_width};
use crate::render::Surface;
use crate::settings::Settings;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Smallest width or height the browser host lets the window shrink to.
pub const MIN_WINDOW_PX: i32 = 10;

/// Requests returned from input handlers for the host to carry out.
///
/// Geometry changes are written straight into the `&mut WindowGeometry` the
/// host passes in; they are announced with [`Action::RenderNeeded`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    RenderNeeded,
    SetCursor(CursorIcon),
    /// Show the given tooltip text, or remove the tooltip.
    SetToolTip(Option<String>),
    SetTopMost(bool),
    /// Window opacity in percent.
    SetOpacity(u8),
    ShowAbout(String),
    Close,
}

/// Size tooltip shown while the tooltip flag is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolTip {
    pub enabled: bool,
}

impl ToolTip {
    #[must_use]
    pub fn text(geometry: &WindowGeometry) -> String {
        format!("Width: {} pixels\nHeight: {} pixels", geometry.width, geometry.height)
    }
}

/// Text of the About box.
#[must_use]
pub fn about_text() -> String {
    format!("Ruler v{}", env!("CARGO_PKG_VERSION"))
}

/// Core ruler state: everything except the window itself.
///
/// Separated from `Engine` so it can be driven by any host and tested
/// without a browser.
#[derive(Debug, Clone)]
pub struct RulerCore {
    pub gesture: GestureState,
    pub orientation: Orientation,
    pub tool_tip: ToolTip,
    pub stay_on_top: bool,
    pub opacity_percent: u8,
    border_width: i32,
    cursor: CursorIcon,
    settings_applied: bool,
}

impl Default for RulerCore {
    fn default() -> Self {
        Self {
            gesture: GestureState::default(),
            orientation: Orientation::default(),
            tool_tip: ToolTip::default(),
            stay_on_top: false,
            opacity_percent: DEFAULT_OPACITY_PERCENT,
            border_width: RESIZE_BORDER_PX,
            cursor: CursorIcon::Default,
            settings_applied: false,
        }
    }
}

impl RulerCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a resize band of `border_width` pixels instead of the default.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::InvalidArgument`] if `border_width` is negative
    /// or too large to double.
    pub fn with_border_width(border_width: i32) -> Result<Self, RulerError> {
        let border_width = validate_border_width(border_width)?;
        Ok(Self { border_width, ..Self::default() })
    }

    // --- Pointer ---

    /// Primary button went down at `screen`.
    pub fn on_press(&mut self, screen: Point, geometry: &WindowGeometry) {
        self.gesture.press(screen, geometry);
        debug!(x = screen.x, y = screen.y, "drag started");
    }

    /// Pointer moved to `screen`.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::InvalidArgument`] if the region classifier
    /// rejects its input.
    pub fn on_move(
        &mut self,
        screen: Point,
        primary_held: bool,
        geometry: &mut WindowGeometry,
    ) -> Result<Vec<Action>, RulerError> {
        if let GestureState::Dragging { region, anchor } = self.gesture {
            if region != ResizeRegion::None {
                return Ok(self.resize(&anchor, region, screen, geometry));
            }
        }

        let local = geometry.screen_to_local(screen);
        let region = classify(local, geometry.size(), self.border_width)?;
        let mut actions = self.set_cursor(region.cursor());

        let GestureState::Dragging { anchor, .. } = self.gesture else {
            return Ok(actions);
        };
        if !primary_held {
            return Ok(actions);
        }

        if region == ResizeRegion::None {
            let origin = anchor.moved_origin(screen);
            if origin != geometry.origin() {
                geometry.left = origin.x;
                geometry.top = origin.y;
                actions.push(Action::RenderNeeded);
            }
        } else {
            self.gesture.latch_region(region);
            debug!(?region, "resize latched");
            actions.extend(self.resize(&anchor, region, screen, geometry));
        }
        Ok(actions)
    }

    /// Primary button released. Always returns to idle.
    pub fn on_release(&mut self) {
        if self.gesture.is_dragging() {
            debug!(region = ?self.gesture.region(), "drag ended");
        }
        self.gesture.release();
    }

    /// The host lost focus mid-gesture; treated as a release.
    pub fn on_focus_lost(&mut self) {
        self.on_release();
    }

    fn resize(
        &mut self,
        anchor: &DragAnchor,
        region: ResizeRegion,
        screen: Point,
        geometry: &mut WindowGeometry,
    ) -> Vec<Action> {
        let Some(size) = anchor.resized(region, screen) else {
            return Vec::new();
        };
        if size == geometry.size() {
            return Vec::new();
        }
        geometry.width = size.width;
        geometry.height = size.height;

        let mut actions = vec![Action::RenderNeeded];
        actions.extend(self.on_resize_completed(geometry));
        actions
    }

    fn set_cursor(&mut self, cursor: CursorIcon) -> Vec<Action> {
        if cursor == self.cursor {
            return Vec::new();
        }
        self.cursor = cursor;
        vec![Action::SetCursor(cursor)]
    }

    // --- Keyboard ---

    /// Key pressed: Space flips the orientation, arrows nudge.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers, geometry: &mut WindowGeometry) -> Vec<Action> {
        if *key == Key::Space {
            return self.toggle_orientation(geometry);
        }
        let Some(delta) = nudge(key, modifiers.ctrl, modifiers.shift) else {
            return Vec::new();
        };
        delta.apply(geometry);

        let mut actions = vec![Action::RenderNeeded];
        if delta.resizes() {
            actions.extend(self.on_resize_completed(geometry));
        }
        actions
    }

    // --- Paint / resize hooks ---

    /// Draw the ruler for the current window size and orientation.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the surface.
    pub fn on_paint<S: Surface>(&self, surface: &mut S, geometry: &WindowGeometry) -> Result<(), S::Error> {
        render_oriented(surface, geometry.width, geometry.height, self.orientation.vertical)
    }

    /// Post-resize hook: refreshes the size tooltip.
    ///
    /// Runs after every width/height change made by the core; hosts call it
    /// after their own resizes too.
    #[must_use]
    pub fn on_resize_completed(&self, geometry: &WindowGeometry) -> Vec<Action> {
        if self.tool_tip.enabled {
            vec![Action::SetToolTip(Some(ToolTip::text(geometry)))]
        } else {
            Vec::new()
        }
    }

    // --- Commands ---

    /// Run a menu command.
    ///
    /// # Errors
    ///
    /// Returns [`RulerError::InvalidArgument`] for an opacity outside `1..=100`.
    pub fn dispatch(&mut self, command: Command, geometry: &mut WindowGeometry) -> Result<Vec<Action>, RulerError> {
        debug!(?command, "dispatch");
        let actions = match command {
            Command::Exit => vec![Action::Close],
            Command::ToggleToolTip => self.set_show_tool_tip(!self.tool_tip.enabled, geometry),
            Command::ToggleOrientation => self.toggle_orientation(geometry),
            Command::ToggleStayOnTop => self.set_stay_on_top(!self.stay_on_top),
            Command::ShowAbout => vec![Action::ShowAbout(about_text())],
            Command::SetOpacity(percent) => {
                if !(1..=100).contains(&percent) {
                    return Err(RulerError::InvalidArgument(format!("opacity must be 1..=100 percent, got {percent}")));
                }
                self.opacity_percent = percent;
                vec![Action::SetOpacity(percent)]
            }
        };
        Ok(actions)
    }

    fn toggle_orientation(&mut self, geometry: &mut WindowGeometry) -> Vec<Action> {
        self.orientation.toggle(geometry);
        debug!(vertical = self.orientation.vertical, "orientation toggled");
        let mut actions = vec![Action::RenderNeeded];
        actions.extend(self.on_resize_completed(geometry));
        actions
    }

    // --- Flags ---

    #[must_use]
    pub fn vertical(&self) -> bool {
        self.orientation.vertical
    }

    /// Set the orientation, rotating the window if it changes.
    pub fn set_vertical(&mut self, vertical: bool, geometry: &mut WindowGeometry) -> Vec<Action> {
        if vertical == self.orientation.vertical {
            return Vec::new();
        }
        self.toggle_orientation(geometry)
    }

    #[must_use]
    pub fn stay_on_top(&self) -> bool {
        self.stay_on_top
    }

    pub fn set_stay_on_top(&mut self, stay_on_top: bool) -> Vec<Action> {
        self.stay_on_top = stay_on_top;
        vec![Action::SetTopMost(stay_on_top)]
    }

    #[must_use]
    pub fn show_tool_tip(&self) -> bool {
        self.tool_tip.enabled
    }

    pub fn set_show_tool_tip(&mut self, enabled: bool, geometry: &WindowGeometry) -> Vec<Action> {
        self.tool_tip.enabled = enabled;
        if enabled {
            self.on_resize_completed(geometry)
        } else {
            vec![Action::SetToolTip(None)]
        }
    }

    /// The flags a host persists at shutdown.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings { vertical: self.orientation.vertical, stay_on_top: self.stay_on_top }
    }

    /// Apply persisted flags when the window first activates.
    ///
    /// Only the first call has any effect.
    pub fn apply_settings(&mut self, settings: Settings, geometry: &mut WindowGeometry) -> Vec<Action> {
        if self.settings_applied {
            return Vec::new();
        }
        self.settings_applied = true;

        let mut actions = Vec::new();
        if settings.vertical {
            actions.extend(self.set_vertical(true, geometry));
        }
        if settings.stay_on_top {
            actions.extend(self.set_stay_on_top(true));
        }
        actions
    }

    // --- Queries ---

    /// The cursor icon most recently requested.
    #[must_use]
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    #[must_use]
    pub fn border_width(&self) -> i32 {
        self.border_width
    }

    /// The context menu as a view over the current flags.
    #[must_use]
    pub fn menu(&self) -> Vec<MenuItem> {
        build_menu(MenuState {
            stay_on_top: self.stay_on_top,
            vertical: self.orientation.vertical,
            show_tool_tip: self.tool_tip.enabled,
            opacity_percent: self.opacity_percent,
        })
    }
}

/// The browser host. Owns the canvas element standing in for the window.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub geometry: WindowGeometry,
    pub core: RulerCore,
}

impl Engine {
    /// Create an engine for `canvas`, positioned at `(left, top)` on the page.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, left: i32, top: i32) -> Self {
        let width = i32::try_from(canvas.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(canvas.height()).unwrap_or(i32::MAX);
        Self { canvas, geometry: WindowGeometry::new(left, top, width, height), core: RulerCore::new() }
    }

    // --- Delegated input ---

    pub fn on_pointer_down(&mut self, screen: Point) {
        self.core.on_press(screen, &self.geometry);
    }

    /// # Errors
    ///
    /// See [`RulerCore::on_move`].
    pub fn on_pointer_move(&mut self, screen: Point, primary_held: bool) -> Result<Vec<Action>, RulerError> {
        let mut actions = self.core.on_move(screen, primary_held, &mut self.geometry)?;
        actions.extend(self.enforce_min_size());
        Ok(actions)
    }

    pub fn on_pointer_up(&mut self) {
        self.core.on_release();
    }

    pub fn on_blur(&mut self) {
        self.core.on_focus_lost();
    }

    /// `dom_key` is the `KeyboardEvent.key` value.
    pub fn on_key_down(&mut self, dom_key: &str, modifiers: Modifiers) -> Vec<Action> {
        let key = Key::from_dom(dom_key);
        let mut actions = self.core.on_key_down(&key, modifiers, &mut self.geometry);
        actions.extend(self.enforce_min_size());
        actions
    }

    /// # Errors
    ///
    /// See [`RulerCore::dispatch`].
    pub fn dispatch(&mut self, command: Command) -> Result<Vec<Action>, RulerError> {
        self.core.dispatch(command, &mut self.geometry)
    }

    pub fn apply_settings(&mut self, settings: Settings) -> Vec<Action> {
        self.core.apply_settings(settings, &mut self.geometry)
    }

    fn enforce_min_size(&mut self) -> Vec<Action> {
        if self.geometry.clamp_size(MIN_WINDOW_PX) {
            self.core.on_resize_completed(&self.geometry)
        } else {
            Vec::new()
        }
    }

    // --- Render ---

    /// Match the canvas backing store to the geometry and draw the ruler.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        self.canvas.set_width(u32::try_from(self.geometry.width).unwrap_or(0));
        self.canvas.set_height(u32::try_from(self.geometry.height).unwrap_or(0));

        let mut ctx = self.context()?;
        ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        ctx.set_fill_style_str("#fff");
        ctx.fill_rect(0.0, 0.0, f64::from(self.geometry.width), f64::from(self.geometry.height));
        ctx.set_fill_style_str("#000");
        ctx.set_stroke_style_str("#000");
        ctx.set_line_width(1.0);

        self.core.on_paint(&mut ctx, &self.geometry)
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn menu(&self) -> Vec<MenuItem> {
        self.core.menu()
    }

    #[must_use]
    pub fn settings(&self) -> Settings {
        self.core.settings()
    }
}
