//! Theme struct mapping semantic roles to concrete styles.

use crate::style::{Color, CustomStyle, Semantic};

/// A collection of styles for semantic messages and console chrome.
///
/// The default theme colors the four semantic roles the way most terminals
/// expect (green/red/yellow/blue) and keeps chrome understated.
///
/// # Example
///
/// ```rust
/// use consoleverse::{Color, CustomStyle, Theme};
///
/// let theme = Theme::default()
///     .with_success(CustomStyle::new().fg(Color::Green).bold())
///     .with_border(CustomStyle::new().dim());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Theme {
    pub success: CustomStyle,
    pub error: CustomStyle,
    pub warning: CustomStyle,
    pub info: CustomStyle,
    /// Style for input prompts.
    pub prompt: CustomStyle,
    /// Style for block titles and section rules.
    pub heading: CustomStyle,
    /// Style for table and panel borders.
    pub border: CustomStyle,
    /// Style for de-emphasized text.
    pub muted: CustomStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            success: CustomStyle::new().fg(Color::Green),
            error: CustomStyle::new().fg(Color::Red),
            warning: CustomStyle::new().fg(Color::Yellow),
            info: CustomStyle::new().fg(Color::Blue),
            prompt: CustomStyle::new().fg(Color::Cyan),
            heading: CustomStyle::new().fg(Color::Blue).bold(),
            border: CustomStyle::new().dim(),
            muted: CustomStyle::new().dim(),
        }
    }
}

impl Theme {
    /// A theme with no styling at all.
    pub fn plain() -> Self {
        Self {
            success: CustomStyle::new(),
            error: CustomStyle::new(),
            warning: CustomStyle::new(),
            info: CustomStyle::new(),
            prompt: CustomStyle::new(),
            heading: CustomStyle::new(),
            border: CustomStyle::new(),
            muted: CustomStyle::new(),
        }
    }

    pub fn with_success(mut self, style: CustomStyle) -> Self {
        self.success = style;
        self
    }

    pub fn with_error(mut self, style: CustomStyle) -> Self {
        self.error = style;
        self
    }

    pub fn with_warning(mut self, style: CustomStyle) -> Self {
        self.warning = style;
        self
    }

    pub fn with_info(mut self, style: CustomStyle) -> Self {
        self.info = style;
        self
    }

    pub fn with_prompt(mut self, style: CustomStyle) -> Self {
        self.prompt = style;
        self
    }

    pub fn with_heading(mut self, style: CustomStyle) -> Self {
        self.heading = style;
        self
    }

    pub fn with_border(mut self, style: CustomStyle) -> Self {
        self.border = style;
        self
    }

    pub fn with_muted(mut self, style: CustomStyle) -> Self {
        self.muted = style;
        self
    }

    /// Looks up the style for a semantic role.
    pub(crate) fn semantic(&self, role: Semantic) -> CustomStyle {
        match role {
            Semantic::Success => self.success,
            Semantic::Error => self.error,
            Semantic::Warning => self.warning,
            Semantic::Info => self.info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_colors() {
        let theme = Theme::default();
        assert_eq!(theme.success.fg, Some(Color::Green));
        assert_eq!(theme.error.fg, Some(Color::Red));
        assert_eq!(theme.warning.fg, Some(Color::Yellow));
        assert_eq!(theme.info.fg, Some(Color::Blue));
    }

    #[test]
    fn test_with_overrides_single_role() {
        let theme = Theme::default().with_success(CustomStyle::new().fg(Color::Cyan).bold());
        assert_eq!(theme.success.fg, Some(Color::Cyan));
        // Other roles keep their defaults.
        assert_eq!(theme.error.fg, Some(Color::Red));
    }

    #[test]
    fn test_semantic_lookup() {
        let theme = Theme::default();
        assert_eq!(theme.semantic(Semantic::Warning), theme.warning);
    }

    #[test]
    fn test_plain_theme_is_empty() {
        let theme = Theme::plain();
        assert_eq!(theme.success, CustomStyle::new());
        assert_eq!(theme.border, CustomStyle::new());
    }
}
