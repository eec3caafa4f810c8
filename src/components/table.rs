//! Matrix and table printing.

use crate::components::border::BorderStyle;
use crate::style::{paint, CustomStyle};
use crate::text::{display_width, pad_center};
use crate::theme::Theme;

/// How a table frames its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TableStyle {
    /// No frame at all, just the values.
    Bare,
    /// Dashed rule above and below, pipes on both sides.
    #[default]
    Box,
    /// Dashed rule above and pipes on the left only.
    SemiBox,
    /// Single box-drawing frame.
    SingleLine,
    /// Double box-drawing frame.
    DoubleLine,
}

impl TableStyle {
    fn frame(self) -> Option<BorderStyle> {
        match self {
            TableStyle::SingleLine => Some(BorderStyle::Single),
            TableStyle::DoubleLine => Some(BorderStyle::Double),
            _ => None,
        }
    }
}

/// Header or row-index labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Labels {
    /// Zero-based positional labels.
    #[default]
    Auto,
    /// No labels.
    None,
    /// Caller-supplied labels; missing entries render empty.
    Named(Vec<String>),
}

impl Labels {
    fn materialize(&self, n: usize) -> Option<Vec<String>> {
        match self {
            Labels::Auto => Some((0..n).map(|i| i.to_string()).collect()),
            Labels::None => None,
            Labels::Named(names) => Some(
                (0..n)
                    .map(|i| names.get(i).cloned().unwrap_or_default())
                    .collect(),
            ),
        }
    }
}

/// A two-dimensional table of string cells.
///
/// Column width is resolved from the data: every cell and header label is
/// measured and the widest wins, so all columns share one width and cells
/// are centered within it.
///
/// # Example
///
/// ```rust
/// use consoleverse::{Console, Table};
///
/// let table = Table::new(vec![vec!["1", "2", "3"], vec!["4", "5", "6"]]);
/// let mut console = Console::builder().no_color().build();
/// console.print_table(&table).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Vec<String>>,
    header: Labels,
    indexes: Labels,
    style: TableStyle,
    missing: String,
    cell_style: Option<CustomStyle>,
    label_style: Option<CustomStyle>,
    border_style: Option<CustomStyle>,
}

impl Table {
    pub fn new<R, C, S>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            header: Labels::default(),
            indexes: Labels::default(),
            style: TableStyle::default(),
            missing: String::new(),
            cell_style: None,
            label_style: None,
            border_style: None,
        }
    }

    /// Sets the column header labels.
    pub fn header(mut self, header: Labels) -> Self {
        self.header = header;
        self
    }

    /// Sets the row index labels.
    pub fn indexes(mut self, indexes: Labels) -> Self {
        self.indexes = indexes;
        self
    }

    pub fn style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Placeholder rendered for empty cells.
    pub fn missing(mut self, placeholder: impl Into<String>) -> Self {
        self.missing = placeholder.into();
        self
    }

    /// Overrides the cell style (plain by default).
    pub fn cell_style(mut self, style: CustomStyle) -> Self {
        self.cell_style = Some(style);
        self
    }

    /// Overrides the header and index style (theme heading by default).
    pub fn label_style(mut self, style: CustomStyle) -> Self {
        self.label_style = Some(style);
        self
    }

    /// Overrides the frame style (theme border by default).
    pub fn border_style(mut self, style: CustomStyle) -> Self {
        self.border_style = Some(style);
        self
    }

    /// Renders the table to a multi-line string.
    ///
    /// Pure: the result depends only on the table, the theme, and the
    /// capability flag. An empty table renders as an empty string.
    pub fn render(&self, theme: &Theme, styled: bool) -> String {
        let ncols = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        if self.rows.is_empty() || ncols == 0 {
            return String::new();
        }

        // Normalize: substitute the placeholder and square off ragged rows.
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                (0..ncols)
                    .map(|i| match row.get(i) {
                        Some(cell) if !cell.is_empty() => cell.clone(),
                        _ => self.missing.clone(),
                    })
                    .collect()
            })
            .collect();

        let header = self.header.materialize(ncols);
        let indexes = self.indexes.materialize(cells.len());

        let mut cell_w = cells
            .iter()
            .flatten()
            .map(|c| display_width(c))
            .max()
            .unwrap_or(0);
        if let Some(header) = &header {
            cell_w = cell_w.max(header.iter().map(|h| display_width(h)).max().unwrap_or(0));
        }
        let idx_w = indexes
            .as_ref()
            .map(|idx| idx.iter().map(|i| display_width(i)).max().unwrap_or(0))
            .unwrap_or(0);

        let border = self
            .border_style
            .unwrap_or(theme.border)
            .to_console_style();
        let label = self
            .label_style
            .unwrap_or(theme.heading)
            .to_console_style();
        let cell_style = self.cell_style.unwrap_or_default().to_console_style();

        let body_w = ncols * (cell_w + 2);
        let mut out = String::new();

        if let Some(header) = &header {
            let gutter = match self.style {
                TableStyle::Bare => idx_w,
                _ => idx_w + 3,
            };
            out.push_str(&" ".repeat(gutter));
            for label_text in header {
                out.push_str(&paint(
                    &label,
                    &format!(" {} ", pad_center(label_text, cell_w)),
                    styled,
                ));
            }
            out.push('\n');
        }

        let (left_sep, right_sep, top, bottom) = match self.style {
            TableStyle::Bare => (String::new(), String::new(), None, None),
            TableStyle::Box | TableStyle::SemiBox => {
                let rule = format!("{}{}", " ".repeat(idx_w + 3), "-".repeat(body_w));
                let right = if self.style == TableStyle::Box {
                    " |".to_string()
                } else {
                    String::new()
                };
                let bottom = (self.style == TableStyle::Box).then(|| rule.clone());
                (" | ".to_string(), right, Some(rule), bottom)
            }
            TableStyle::SingleLine | TableStyle::DoubleLine => {
                let chars = self.style.frame().unwrap_or_default().chars();
                let run: String = std::iter::repeat(chars.horizontal).take(body_w + 2).collect();
                let top = format!(
                    "{}{}{}{}",
                    " ".repeat(idx_w + 1),
                    chars.top_left,
                    run,
                    chars.top_right
                );
                let bottom = format!(
                    "{}{}{}{}",
                    " ".repeat(idx_w + 1),
                    chars.bottom_left,
                    run,
                    chars.bottom_right
                );
                (
                    format!(" {} ", chars.vertical),
                    format!(" {}", chars.vertical),
                    Some(top),
                    Some(bottom),
                )
            }
        };

        if let Some(top) = &top {
            out.push_str(&paint(&border, top, styled));
            out.push('\n');
        }

        for (i, row) in cells.iter().enumerate() {
            if let Some(indexes) = &indexes {
                let name = &indexes[i];
                let pad = " ".repeat(idx_w - display_width(name));
                out.push_str(&paint(&label, &format!("{}{}", pad, name), styled));
            }
            if !left_sep.is_empty() {
                out.push_str(&paint(&border, &left_sep, styled));
            }
            for cell in row {
                out.push_str(&paint(
                    &cell_style,
                    &format!(" {} ", pad_center(cell, cell_w)),
                    styled,
                ));
            }
            if !right_sep.is_empty() {
                out.push_str(&paint(&border, &right_sep, styled));
            }
            out.push('\n');
        }

        if let Some(bottom) = &bottom {
            out.push_str(&paint(&border, bottom, styled));
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(table: &Table) -> String {
        table.render(&Theme::default(), false)
    }

    fn sample() -> Table {
        Table::new(vec![vec!["1", "2", "3"], vec!["4", "5", "6"]])
    }

    #[test]
    fn test_box_layout() {
        let expected = concat!(
            "     0  1  2 \n",
            "    ---------\n",
            "0 |  1  2  3  |\n",
            "1 |  4  5  6  |\n",
            "    ---------\n",
        );
        assert_eq!(plain(&sample()), expected);
    }

    #[test]
    fn test_semibox_has_no_bottom_or_right() {
        let rendered = plain(&sample().style(TableStyle::SemiBox));
        assert!(rendered.contains("0 |  1  2  3 \n"));
        assert!(rendered.ends_with(" |  4  5  6 \n"));
    }

    #[test]
    fn test_single_line_frame_aligns() {
        let rendered = plain(&sample().style(TableStyle::SingleLine));
        let lines: Vec<&str> = rendered.lines().collect();
        // header, top, two rows, bottom
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "  ┌───────────┐");
        assert_eq!(lines[2], "0 │  1  2  3  │");
        assert_eq!(lines[4], "  └───────────┘");
        let corner = lines[1].char_indices().find(|(_, c)| *c == '┌').unwrap().0;
        let edge = lines[2].char_indices().find(|(_, c)| *c == '│').unwrap().0;
        assert_eq!(corner, edge);
    }

    #[test]
    fn test_double_line_frame() {
        let rendered = plain(&sample().style(TableStyle::DoubleLine));
        assert!(rendered.contains('╔'));
        assert!(rendered.contains('║'));
        assert!(rendered.contains('╝'));
    }

    #[test]
    fn test_bare_has_no_frame() {
        let rendered = plain(
            &sample()
                .style(TableStyle::Bare)
                .header(Labels::None)
                .indexes(Labels::None),
        );
        assert_eq!(rendered, " 1  2  3 \n 4  5  6 \n");
    }

    #[test]
    fn test_named_labels() {
        let table = sample()
            .header(Labels::Named(vec!["one".into(), "two".into(), "three".into()]))
            .indexes(Labels::Named(vec!["row1".into(), "row2".into()]))
            .style(TableStyle::SemiBox);
        let rendered = plain(&table);
        assert!(rendered.contains("one"));
        assert!(rendered.contains("row2 | "));
        // Widest label drives the shared column width.
        assert!(rendered.contains(" three "));
    }

    #[test]
    fn test_missing_placeholder_substitution() {
        let table = Table::new(vec![vec!["a", ""], vec!["b", "c"]]).missing("?");
        let rendered = plain(&table);
        assert!(rendered.contains('?'));
    }

    #[test]
    fn test_ragged_rows_are_squared_off() {
        let table = Table::new(vec![vec!["a", "b"], vec!["c"]])
            .missing("-")
            .header(Labels::None)
            .indexes(Labels::None)
            .style(TableStyle::Bare);
        assert_eq!(plain(&table), " a  b \n c  - \n");
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let empty: Vec<Vec<String>> = vec![];
        assert_eq!(plain(&Table::new(empty)), "");
    }

    #[test]
    fn test_styled_render_degrades_cleanly() {
        use crate::style::Color;
        let table = sample().cell_style(CustomStyle::new().fg(Color::Green));
        assert!(table.render(&Theme::default(), true).contains("\x1b[32m"));
        assert!(!table.render(&Theme::default(), false).contains('\x1b'));
    }
}
