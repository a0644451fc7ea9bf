//! UI layer
//!
//! Contains views, widgets, components, symbols, and theme definitions.

pub mod components;
pub mod symbols;
pub mod theme;
pub mod views;
pub mod widgets;

use std::io;

use crossterm::{execute, terminal::SetTitle};

/// Application name shown in the title bar and the terminal title
pub const APP_TITLE: &str = "Changelog Generator";

/// Set the terminal window title
pub fn set_terminal_title() -> io::Result<()> {
    execute!(io::stdout(), SetTitle(APP_TITLE))
}
