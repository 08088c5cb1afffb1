//! Rendering: draws the ruler scale onto a [`Surface`].
//!
//! The renderer only knows how to draw a horizontal ruler of a given logical
//! size. Vertical rulers are produced by [`crate::orientation`], which turns
//! the surface a quarter turn and hands the swapped dimensions back here.
//!
//! [`Surface`] is the drawing seam. The browser host implements it for
//! [`web_sys::CanvasRenderingContext2d`], the headless shell for SVG, and
//! [`RecordingSurface`] captures the call sequence for tests.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::convert::Infallible;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{
    FONT_CSS, FONT_HEIGHT_PX, LENGTH_LABEL_X, MAJOR_TICK_PX, MAJOR_TICK_STEP, MID_TICK_PX, MID_TICK_STEP,
    MINOR_TICK_PX, MINOR_TICK_STEP,
};

/// Minimal drawing API used by the ruler.
///
/// Coordinates are in the surface's current user space, after any
/// `rotate_degrees` / `translate` calls. Text is positioned by its top-left
/// corner.
pub trait Surface {
    type Error;

    /// Line height of the label font, in pixels.
    fn font_height(&self) -> i32;

    /// Outline a rectangle with a 1px black pen.
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), Self::Error>;

    /// Draw a 1px black line.
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), Self::Error>;

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;

    /// Rotate subsequent drawing clockwise by `degrees`.
    fn rotate_degrees(&mut self, degrees: f64) -> Result<(), Self::Error>;

    /// Translate subsequent drawing.
    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), Self::Error>;
}

/// Tick height for pixel `x`, or `None` if `x` carries no tick.
#[must_use]
pub fn tick_height(x: i32) -> Option<i32> {
    if x % MINOR_TICK_STEP != 0 {
        None
    } else if x % MAJOR_TICK_STEP == 0 {
        Some(MAJOR_TICK_PX)
    } else if x % MID_TICK_STEP == 0 {
        Some(MID_TICK_PX)
    } else {
        Some(MINOR_TICK_PX)
    }
}

/// Draw a horizontal ruler `logical_width` pixels long.
///
/// Draws the outer border, the "N pixels" label, and ticks from both the top
/// and bottom edges. Every 100th pixel is labeled near both edges. A
/// non-positive width or height draws the border only.
///
/// # Errors
///
/// Propagates the first error returned by the surface.
pub fn render_ruler<S: Surface>(surface: &mut S, logical_width: i32, logical_height: i32) -> Result<(), S::Error> {
    let width = logical_width.max(0);
    let height = logical_height.max(0);

    surface.stroke_rect(0.0, 0.0, f64::from((width - 1).max(0)), f64::from((height - 1).max(0)))?;
    if width == 0 || height == 0 {
        return Ok(());
    }

    let font_h = surface.font_height();
    let label_y = height / 2 - font_h / 2;
    surface.text(&format!("{width} pixels"), f64::from(LENGTH_LABEL_X), f64::from(label_y))?;

    for x in 0..width {
        let Some(tick) = tick_height(x) else {
            continue;
        };
        if tick == MAJOR_TICK_PX {
            draw_tick_label(surface, x, height, tick, font_h)?;
        }
        draw_tick(surface, x, height, tick)?;
    }
    Ok(())
}

fn draw_tick<S: Surface>(surface: &mut S, x: i32, height: i32, tick: i32) -> Result<(), S::Error> {
    let x = f64::from(x);
    surface.line(x, 0.0, x, f64::from(tick))?;
    surface.line(x, f64::from(height), x, f64::from(height - tick))
}

fn draw_tick_label<S: Surface>(surface: &mut S, x: i32, height: i32, tick: i32, font_h: i32) -> Result<(), S::Error> {
    let text = x.to_string();
    surface.text(&text, f64::from(x), f64::from(tick))?;
    surface.text(&text, f64::from(x), f64::from(height - tick - font_h))
}

// =============================================================
// Recording surface
// =============================================================

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    StrokeRect { x: f64, y: f64, w: f64, h: f64 },
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    Text { text: String, x: f64, y: f64 },
    Rotate { degrees: f64 },
    Translate { dx: f64, dy: f64 },
}

/// Surface that records calls instead of drawing.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
    font_height: i32,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(FONT_HEIGHT_PX)
    }
}

impl RecordingSurface {
    #[must_use]
    pub fn new(font_height: i32) -> Self {
        Self { calls: Vec::new(), font_height }
    }

    /// All lines drawn at horizontal position `x`.
    #[must_use]
    pub fn lines_at(&self, x: f64) -> Vec<&DrawCall> {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Line { x1, .. } if (*x1 - x).abs() < f64::EPSILON))
            .collect()
    }

    /// All text calls, in draw order.
    #[must_use]
    pub fn texts(&self) -> Vec<(&str, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, x, y } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn font_height(&self) -> i32 {
        self.font_height
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), Infallible> {
        self.calls.push(DrawCall::StrokeRect { x, y, w, h });
        Ok(())
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
        Ok(())
    }

    fn text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Text { text: text.to_owned(), x, y });
        Ok(())
    }

    fn rotate_degrees(&mut self, degrees: f64) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Rotate { degrees });
        Ok(())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Translate { dx, dy });
        Ok(())
    }
}

// =============================================================
// Canvas 2D surface
// =============================================================

/// Offset that centers 1px strokes on device pixels.
const HALF_PIXEL: f64 = 0.5;

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn font_height(&self) -> i32 {
        FONT_HEIGHT_PX
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::stroke_rect(self, x + HALF_PIXEL, y + HALF_PIXEL, w, h);
        Ok(())
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), JsValue> {
        self.begin_path();
        self.move_to(x1 + HALF_PIXEL, y1);
        self.line_to(x2 + HALF_PIXEL, y2);
        self.stroke();
        Ok(())
    }

    fn text(&mut self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        self.set_font(FONT_CSS);
        self.set_text_baseline("top");
        self.set_text_align("left");
        self.fill_text(text, x, y)
    }

    fn rotate_degrees(&mut self, degrees: f64) -> Result<(), JsValue> {
        self.rotate(degrees.to_radians())
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::translate(self, dx, dy)
    }
}
