//! Menu commands.
//!
//! The context menu is a view over [`crate::engine::RulerCore`] state: each
//! row carries the [`Command`] it dispatches and a checked flag read from the
//! core, never the other way round.

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;

use serde::{Deserialize, Serialize};

use crate::consts::OPACITY_MENU_STEP;

/// Everything the menu can ask the core to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Exit,
    ToggleToolTip,
    ToggleOrientation,
    ToggleStayOnTop,
    ShowAbout,
    /// Window opacity in percent, `1..=100`.
    SetOpacity(u8),
}

/// One row of the context menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: String,
    /// `None` for separators and submenu headers.
    pub command: Option<Command>,
    pub checked: bool,
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    #[must_use]
    pub fn action(label: &str, command: Command, checked: bool) -> Self {
        Self { label: label.to_owned(), command: Some(command), checked, children: Vec::new() }
    }

    #[must_use]
    pub fn separator() -> Self {
        Self { label: "-".to_owned(), command: None, checked: false, children: Vec::new() }
    }

    #[must_use]
    pub fn submenu(label: &str, children: Vec<MenuItem>) -> Self {
        Self { label: label.to_owned(), command: None, checked: false, children }
    }

    #[must_use]
    pub fn is_separator(&self) -> bool {
        self.command.is_none() && self.children.is_empty()
    }
}

/// Checked state the menu reflects.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub stay_on_top: bool,
    pub vertical: bool,
    pub show_tool_tip: bool,
    pub opacity_percent: u8,
}

/// Build the context menu for the given state.
#[must_use]
pub fn build_menu(state: MenuState) -> Vec<MenuItem> {
    let opacity: Vec<MenuItem> = (1..=100 / OPACITY_MENU_STEP)
        .map(|i| i * OPACITY_MENU_STEP)
        .map(|p| MenuItem::action(&format!("{p}%"), Command::SetOpacity(p), p == state.opacity_percent))
        .collect();

    vec![
        MenuItem::action("Stay On Top", Command::ToggleStayOnTop, state.stay_on_top),
        MenuItem::action("Vertical", Command::ToggleOrientation, state.vertical),
        MenuItem::action("Tool Tip", Command::ToggleToolTip, state.show_tool_tip),
        MenuItem::submenu("Opacity", opacity),
        MenuItem::separator(),
        MenuItem::action("About", Command::ShowAbout, false),
        MenuItem::separator(),
        MenuItem::action("Exit", Command::Exit, false),
    ]
}
