//! cellui - retained-mode terminal widgets
//!
//! Modules:
//! - ui: element contract, widgets, backends and the window event loop
//! - settings: JSON settings (key bindings, loading tick, placement)
//! - tui: crossterm input, terminal guard and the terminal run loop (`tui` feature)

pub mod settings;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
