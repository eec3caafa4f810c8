//! Bordered text panels.

use crate::components::border::BorderStyle;
use crate::style::{paint, CustomStyle};
use crate::text::display_width;
use crate::theme::Theme;

/// A text box with a drawn border and an optional title.
///
/// # Example
///
/// ```rust
/// use consoleverse::{BorderStyle, Console, Panel};
///
/// let panel = Panel::new("All systems nominal.\nNothing to report.")
///     .title("Status")
///     .border(BorderStyle::Double);
///
/// let mut console = Console::builder().no_color().build();
/// console.print_panel(&panel).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Panel {
    text: String,
    title: Option<String>,
    border: BorderStyle,
    content_style: Option<CustomStyle>,
    border_style: Option<CustomStyle>,
}

impl Panel {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            title: None,
            border: BorderStyle::default(),
            content_style: None,
            border_style: None,
        }
    }

    /// Embeds a title in the top border.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Overrides the content style (plain by default).
    pub fn content_style(mut self, style: CustomStyle) -> Self {
        self.content_style = Some(style);
        self
    }

    /// Overrides the border style (theme border by default).
    pub fn border_style(mut self, style: CustomStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    /// Renders the panel to a multi-line string.
    ///
    /// Pure: the result depends only on the panel, the theme, and the
    /// capability flag.
    pub fn render(&self, theme: &Theme, styled: bool) -> String {
        let chars = self.border.chars();
        let border = self
            .border_style
            .unwrap_or(theme.border)
            .to_console_style();
        let content = self.content_style.unwrap_or_default().to_console_style();
        let title_style = theme.heading.to_console_style();

        let lines: Vec<&str> = if self.text.is_empty() {
            vec![""]
        } else {
            self.text.lines().collect()
        };

        // Inner span between the vertical borders: one space of padding on
        // each side of the widest line, widened further if the title needs it.
        let content_width = lines.iter().map(|l| display_width(l)).max().unwrap_or(0);
        let mut span = content_width + 2;
        if let Some(title) = &self.title {
            span = span.max(display_width(title) + 4);
        }

        let mut out = String::new();

        // Top border, with the title embedded when present.
        match &self.title {
            Some(title) => {
                let lead = format!("{}{} ", chars.top_left, chars.horizontal);
                let tail: String = std::iter::repeat(chars.horizontal)
                    .take(span - display_width(title) - 3)
                    .chain(std::iter::once(chars.top_right))
                    .collect();
                out.push_str(&paint(&border, &lead, styled));
                out.push_str(&paint(&title_style, title, styled));
                out.push_str(&paint(&border, &format!(" {}", tail), styled));
            }
            None => {
                let top: String = std::iter::once(chars.top_left)
                    .chain(std::iter::repeat(chars.horizontal).take(span))
                    .chain(std::iter::once(chars.top_right))
                    .collect();
                out.push_str(&paint(&border, &top, styled));
            }
        }
        out.push('\n');

        let vertical = paint(&border, &chars.vertical.to_string(), styled);
        let blank = format!("{}{}{}\n", vertical, " ".repeat(span), vertical);
        out.push_str(&blank);

        for line in &lines {
            let pad = span - 2 - display_width(line);
            let body = format!(" {}{} ", line, " ".repeat(pad));
            out.push_str(&vertical);
            out.push_str(&paint(&content, &body, styled));
            out.push_str(&vertical);
            out.push('\n');
        }

        out.push_str(&blank);

        let bottom: String = std::iter::once(chars.bottom_left)
            .chain(std::iter::repeat(chars.horizontal).take(span))
            .chain(std::iter::once(chars.bottom_right))
            .collect();
        out.push_str(&paint(&border, &bottom, styled));
        out.push('\n');

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(panel: &Panel) -> String {
        panel.render(&Theme::default(), false)
    }

    #[test]
    fn test_single_border_layout() {
        let rendered = plain(&Panel::new("hi"));
        let expected = "\
┌────┐
│    │
│ hi │
│    │
└────┘
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_double_border_layout() {
        let rendered = plain(&Panel::new("hi").border(BorderStyle::Double));
        assert!(rendered.starts_with("╔════╗\n"));
        assert!(rendered.ends_with("╚════╝\n"));
    }

    #[test]
    fn test_multiline_content_pads_to_widest() {
        let rendered = plain(&Panel::new("short\na much longer line"));
        for line in rendered.lines() {
            assert_eq!(display_width(line), display_width("a much longer line") + 4);
        }
    }

    #[test]
    fn test_title_in_top_border() {
        let rendered = plain(&Panel::new("body text").title("Note"));
        let top = rendered.lines().next().unwrap();
        assert_eq!(top, "┌─ Note ────┐");
        // All lines share the same width.
        for line in rendered.lines() {
            assert_eq!(display_width(line), display_width(top));
        }
    }

    #[test]
    fn test_wide_title_expands_panel() {
        let rendered = plain(&Panel::new("x").title("A Very Long Title"));
        let top = rendered.lines().next().unwrap();
        assert!(top.contains("A Very Long Title"));
        for line in rendered.lines() {
            assert_eq!(display_width(line), display_width(top));
        }
    }

    #[test]
    fn test_empty_text_renders_one_blank_row() {
        let rendered = plain(&Panel::new(""));
        assert_eq!(rendered.lines().count(), 5);
    }

    #[test]
    fn test_styled_render_marks_border() {
        use crate::style::Color;
        let panel = Panel::new("hi").border_style(CustomStyle::new().fg(Color::Magenta));
        let rendered = panel.render(&Theme::default(), true);
        assert!(rendered.contains("\x1b[35m"));
        // Unstyled render of the same panel carries no escapes.
        assert!(!plain(&panel).contains('\x1b'));
    }
}
