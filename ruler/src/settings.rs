//! The two flags persisted across runs.
//!
//! Storage is the host's business; the core only defines the shape and the
//! defaults a host falls back to when stored values are missing.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Start in the vertical orientation.
    pub vertical: bool,
    /// Keep the ruler above other windows.
    pub stay_on_top: bool,
}
