//! Themes: fixed, adaptive, and the choice between them.
//!
//! A [`Theme`] maps semantic roles and console chrome (prompts, headings,
//! borders) to concrete styles. [`AdaptiveTheme`] selects between a light and
//! a dark variant based on the OS color mode.

mod adaptive;
mod choice;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{set_theme_detector, AdaptiveTheme, ColorMode};
pub use choice::ThemeChoice;
pub use theme::Theme;
