//! Presentation layer with the terminal UI.

/// Terminal event helpers.
pub mod events;
/// Screens and orchestration.
pub mod ui;
/// Reusable widgets.
pub mod widgets;

pub use ui::App;
