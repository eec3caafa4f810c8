//! Theme selection for console construction.

use super::adaptive::AdaptiveTheme;
use super::theme::Theme;

/// Reference to either a fixed theme or an adaptive theme.
///
/// Lets [`crate::ConsoleBuilder::theme`] accept either a fixed theme or one
/// that follows the system color mode.
#[derive(Debug)]
pub enum ThemeChoice<'a> {
    /// A fixed theme that ignores the system color mode.
    Theme(&'a Theme),
    /// An adaptive theme resolved against the system color mode.
    Adaptive(&'a AdaptiveTheme),
}

impl ThemeChoice<'_> {
    /// Resolves to a concrete theme.
    ///
    /// For adaptive themes this detects the current color mode and returns
    /// the matching variant.
    pub(crate) fn resolve(&self) -> Theme {
        match self {
            ThemeChoice::Theme(theme) => **theme,
            ThemeChoice::Adaptive(adaptive) => adaptive.resolve(),
        }
    }
}

impl<'a> From<&'a Theme> for ThemeChoice<'a> {
    fn from(theme: &'a Theme) -> Self {
        ThemeChoice::Theme(theme)
    }
}

impl<'a> From<&'a AdaptiveTheme> for ThemeChoice<'a> {
    fn from(adaptive: &'a AdaptiveTheme) -> Self {
        ThemeChoice::Adaptive(adaptive)
    }
}
