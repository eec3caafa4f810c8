//! Style specifications: explicit combinations and semantic roles.

use std::str::FromStr;

use console::Style;

use crate::error::Error;
use crate::style::Color;
use crate::theme::Theme;

/// Text weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight {
    #[default]
    Normal,
    Bold,
    Dim,
}

/// An explicit style: foreground and background color, weight, and attributes.
///
/// Built fluently:
///
/// ```rust
/// use consoleverse::{Color, CustomStyle};
///
/// let accent = CustomStyle::new().fg(Color::Cyan).bold().underline();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CustomStyle {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub weight: Weight,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
}

impl CustomStyle {
    /// An empty style that leaves text untouched.
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            weight: Weight::Normal,
            underline: false,
            blink: false,
            reverse: false,
        }
    }

    /// Sets the foreground color.
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = Weight::Bold;
        self
    }

    pub fn dim(mut self) -> Self {
        self.weight = Weight::Dim;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn blink(mut self) -> Self {
        self.blink = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Lowers this spec to a concrete [`console::Style`].
    pub(crate) fn to_console_style(self) -> Style {
        let mut style = Style::new();
        if let Some(fg) = self.fg {
            style = style.fg(fg.into());
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg.into());
        }
        match self.weight {
            Weight::Bold => style = style.bold(),
            Weight::Dim => style = style.dim(),
            Weight::Normal => {}
        }
        if self.underline {
            style = style.underlined();
        }
        if self.blink {
            style = style.blink();
        }
        if self.reverse {
            style = style.reverse();
        }
        style
    }
}

/// Semantic message roles whose presentation comes from the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Semantic {
    Success,
    Error,
    Warning,
    Info,
}

/// A style request.
///
/// Either a semantic role resolved through the active theme, or an explicit
/// combination of color, weight, and attributes. Resolution is deterministic:
/// the same spec against the same theme and surface capability always yields
/// the same formatting sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StyleSpec {
    Semantic(Semantic),
    Custom(CustomStyle),
}

impl StyleSpec {
    /// An empty spec that leaves text untouched.
    pub const fn plain() -> Self {
        StyleSpec::Custom(CustomStyle::new())
    }

    pub(crate) fn resolve(&self, theme: &Theme) -> Style {
        match self {
            StyleSpec::Semantic(role) => theme.semantic(*role).to_console_style(),
            StyleSpec::Custom(custom) => custom.to_console_style(),
        }
    }
}

impl Default for StyleSpec {
    fn default() -> Self {
        StyleSpec::plain()
    }
}

impl From<Semantic> for StyleSpec {
    fn from(role: Semantic) -> Self {
        StyleSpec::Semantic(role)
    }
}

impl From<CustomStyle> for StyleSpec {
    fn from(custom: CustomStyle) -> Self {
        StyleSpec::Custom(custom)
    }
}

impl From<Color> for StyleSpec {
    /// Shorthand for a foreground-only style.
    fn from(color: Color) -> Self {
        StyleSpec::Custom(CustomStyle::new().fg(color))
    }
}

impl FromStr for StyleSpec {
    type Err = Error;

    /// Parses a style from its name.
    ///
    /// Accepts, case-insensitively: the attribute names `BOLD`, `DIM`,
    /// `UNDERLINE`, `BLINK`, `REVERSE`; the semantic roles `SUCCESS`, `ERROR`,
    /// `WARNING`, `INFO`; and any color name (treated as a foreground color).
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let spec = match name.to_ascii_uppercase().as_str() {
            "BOLD" => CustomStyle::new().bold().into(),
            "DIM" => CustomStyle::new().dim().into(),
            "UNDERLINE" => CustomStyle::new().underline().into(),
            "BLINK" => CustomStyle::new().blink().into(),
            "REVERSE" => CustomStyle::new().reverse().into(),
            "SUCCESS" => Semantic::Success.into(),
            "ERROR" => Semantic::Error.into(),
            "WARNING" => Semantic::Warning.into(),
            "INFO" => Semantic::Info.into(),
            _ => name
                .parse::<Color>()
                .map(StyleSpec::from)
                .map_err(|_| Error::UnknownStyle(name.to_string()))?,
        };
        Ok(spec)
    }
}

/// Applies `style` to `text` for a surface with the given capability.
///
/// This is the single point where styling meets text. On a non-capable
/// surface the text comes back unchanged, never with raw escape sequences;
/// on a capable surface styling is forced so the result does not depend on
/// process-global color state.
pub(crate) fn paint(style: &Style, text: &str, styled: bool) -> String {
    if styled {
        style.clone().force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_unstyled_is_identity() {
        let style = CustomStyle::new().fg(Color::Red).bold().to_console_style();
        assert_eq!(paint(&style, "hello", false), "hello");
    }

    #[test]
    fn test_paint_styled_embeds_markers() {
        let style = CustomStyle::new().fg(Color::Red).to_console_style();
        let out = paint(&style, "hello", true);
        assert!(out.contains("\x1b[31m"));
        assert!(out.contains("hello"));
        assert!(out.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_paint_empty_style_adds_nothing() {
        let style = CustomStyle::new().to_console_style();
        assert_eq!(paint(&style, "hello", true), "hello");
    }

    #[test]
    fn test_paint_is_deterministic() {
        let style = CustomStyle::new().fg(Color::Blue).underline().to_console_style();
        let a = paint(&style, "x", true);
        let b = paint(&style, "x", true);
        assert_eq!(a, b);
    }

    #[test]
    fn test_resolve_semantic_uses_theme() {
        let theme = Theme::default();
        let spec = StyleSpec::Semantic(Semantic::Success);
        let out = paint(&spec.resolve(&theme), "ok", true);
        // Default theme renders success in green.
        assert!(out.contains("\x1b[32m"));
    }

    #[test]
    fn test_parse_attribute_names() {
        assert_eq!(
            "bold".parse::<StyleSpec>().unwrap(),
            StyleSpec::Custom(CustomStyle::new().bold())
        );
        assert_eq!(
            "UNDERLINE".parse::<StyleSpec>().unwrap(),
            StyleSpec::Custom(CustomStyle::new().underline())
        );
    }

    #[test]
    fn test_parse_color_name_as_foreground() {
        assert_eq!(
            "red".parse::<StyleSpec>().unwrap(),
            StyleSpec::Custom(CustomStyle::new().fg(Color::Red))
        );
    }

    #[test]
    fn test_parse_semantic_names() {
        assert_eq!(
            "success".parse::<StyleSpec>().unwrap(),
            StyleSpec::Semantic(Semantic::Success)
        );
    }

    #[test]
    fn test_parse_unknown_style_fails() {
        let err = "SPARKLE".parse::<StyleSpec>().unwrap_err();
        assert!(matches!(err, Error::UnknownStyle(name) if name == "SPARKLE"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_style_spec_serde() {
        let spec = StyleSpec::Custom(CustomStyle::new().fg(Color::Cyan).bold());
        let json = serde_json::to_string(&spec).unwrap();
        let back: StyleSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, back);
    }
}
