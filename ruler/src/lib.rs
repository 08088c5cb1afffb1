//! Interaction and rendering core for the on-screen pixel ruler.
//!
//! The ruler is a borderless overlay window. This crate owns everything that
//! decides how that window reacts to the user: classifying the cursor into
//! resize bands, tracking a press/move/release gesture against a fixed anchor,
//! keyboard nudges, and drawing the tick scale in either orientation. The
//! host (a browser canvas via [`engine::Engine`], or the headless shell in the
//! `pixel-ruler` binary) owns the actual window geometry and applies the
//! [`engine::Action`]s returned by the core.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Shell boundary: [`engine::RulerCore`] and the browser [`engine::Engine`] |
//! | [`geometry`] | Integer points, sizes and window rectangles |
//! | [`region`] | Nine-region resize classifier and cursor icons |
//! | [`gesture`] | Drag/resize state machine and input types |
//! | [`nudge`] | Arrow-key move/resize table |
//! | [`render`] | Tick renderer and the [`render::Surface`] drawing seam |
//! | [`orientation`] | Quarter-turn adapter for the vertical layout |
//! | [`command`] | Menu commands and the menu view model |
//! | [`settings`] | The two persisted flags |
//! | [`consts`] | Shared numeric constants (border band, tick heights, defaults) |
//! | [`error`] | Contract-violation errors |

pub mod command;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod nudge;
pub mod orientation;
pub mod region;
pub mod render;
pub mod settings;

pub use error::RulerError;
