//! Adaptive themes that respond to the OS color mode.

use once_cell::sync::Lazy;
use std::sync::Mutex;
use tracing::debug;

use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A theme that adapts to the user's display mode.
///
/// Holds separate light and dark variants and picks the right one based on
/// OS settings when resolved.
///
/// # Example
///
/// ```rust
/// use consoleverse::{AdaptiveTheme, Color, Console, CustomStyle, Theme};
///
/// let light = Theme::default().with_heading(CustomStyle::new().fg(Color::Blue));
/// let dark = Theme::default().with_heading(CustomStyle::new().fg(Color::Cyan).bold());
/// let adaptive = AdaptiveTheme::new(light, dark);
///
/// let console = Console::builder().theme(&adaptive).build();
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Resolves to the variant matching the current color mode.
    pub(crate) fn resolve(&self) -> Theme {
        let mode = current_color_mode();
        debug!(?mode, "adaptive theme resolved");
        match mode {
            ColorMode::Light => self.light,
            ColorMode::Dark => self.dark,
        }
    }
}

// Process-wide probe, replaced wholesale on override.
static MODE_PROBE: Lazy<Mutex<fn() -> ColorMode>> = Lazy::new(|| Mutex::new(query_os_mode));

/// Replaces the probe that picks between the light and dark variants.
///
/// The override is process-wide; tests use it to pin the mode instead of
/// depending on OS settings.
pub fn set_theme_detector(detector: fn() -> ColorMode) {
    *MODE_PROBE.lock().unwrap() = detector;
}

pub(crate) fn current_color_mode() -> ColorMode {
    let probe = *MODE_PROBE.lock().unwrap();
    probe()
}

fn query_os_mode() -> ColorMode {
    match dark_light::detect() {
        dark_light::Mode::Dark => ColorMode::Dark,
        dark_light::Mode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, CustomStyle};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_adaptive_theme_uses_detector() {
        let light = Theme::default().with_heading(CustomStyle::new().fg(Color::Green));
        let dark = Theme::default().with_heading(CustomStyle::new().fg(Color::Red));
        let adaptive = AdaptiveTheme::new(light, dark);

        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(adaptive.resolve().heading.fg, Some(Color::Red));

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(adaptive.resolve().heading.fg, Some(Color::Green));
    }

    #[test]
    #[serial]
    fn test_detector_override_is_process_wide() {
        set_theme_detector(|| ColorMode::Dark);
        assert_eq!(current_color_mode(), ColorMode::Dark);

        set_theme_detector(|| ColorMode::Light);
        assert_eq!(current_color_mode(), ColorMode::Light);
    }
}
