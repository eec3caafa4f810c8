//! Progress bars and count-based progress tracking.

use crate::console::Console;
use crate::error::{Error, Result};
use crate::style::Semantic;

/// Shape of a textual progress bar.
///
/// # Example
///
/// ```rust
/// use consoleverse::ProgressBar;
///
/// let bar = ProgressBar::default();
/// assert_eq!(
///     bar.render(0.4).unwrap(),
///     format!("[{}{}] (40%)", "#".repeat(20), ".".repeat(30)),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ProgressBar {
    width: usize,
    fill: char,
    empty: char,
    brackets: (char, char),
    show_percent: bool,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            width: 50,
            fill: '#',
            empty: '.',
            brackets: ('[', ']'),
            show_percent: true,
        }
    }
}

impl ProgressBar {
    /// Width of the bar interior in characters.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    pub fn empty(mut self, empty: char) -> Self {
        self.empty = empty;
        self
    }

    pub fn brackets(mut self, open: char, close: char) -> Self {
        self.brackets = (open, close);
        self
    }

    pub fn show_percent(mut self, show: bool) -> Self {
        self.show_percent = show;
        self
    }

    /// Renders the bar for a completion fraction.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::ProgressOutOfRange`] when `fraction` falls outside
    /// `0.0..=1.0`.
    pub fn render(&self, fraction: f64) -> Result<String> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(Error::ProgressOutOfRange(fraction));
        }

        let filled = (fraction * self.width as f64) as usize;
        let mut out = String::with_capacity(self.width + 8);
        out.push(self.brackets.0);
        for _ in 0..filled {
            out.push(self.fill);
        }
        for _ in filled..self.width {
            out.push(self.empty);
        }
        out.push(self.brackets.1);
        if self.show_percent {
            out.push_str(&format!(" ({}%)", (fraction * 100.0) as u32));
        }
        Ok(out)
    }
}

/// Count-based progress reporting over a console.
///
/// Redraws in place with a carriage return on every update, then finishes
/// with a success line.
///
/// # Example
///
/// ```rust
/// use consoleverse::Console;
///
/// let mut console = Console::builder().no_color().build();
/// let mut tracker = console.progress(3, "importing");
/// for _ in 0..3 {
///     tracker.tick().unwrap();
/// }
/// tracker.finish().unwrap();
/// ```
pub struct ProgressTracker<'a> {
    console: &'a mut Console,
    bar: ProgressBar,
    label: String,
    total: usize,
    current: usize,
}

impl<'a> ProgressTracker<'a> {
    pub(crate) fn new(console: &'a mut Console, total: usize, label: impl Into<String>) -> Self {
        Self {
            console,
            bar: ProgressBar::default(),
            label: label.into(),
            total,
            current: 0,
        }
    }

    /// Replaces the default bar shape.
    pub fn with_bar(mut self, bar: ProgressBar) -> Self {
        self.bar = bar;
        self
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Advances by one item and redraws.
    pub fn tick(&mut self) -> Result<()> {
        self.set(self.current + 1)
    }

    /// Jumps to an absolute count and redraws. Counts clamp to the total.
    pub fn set(&mut self, current: usize) -> Result<()> {
        self.current = current.min(self.total);
        let fraction = if self.total == 0 {
            1.0
        } else {
            self.current as f64 / self.total as f64
        };
        let line = format!(
            "\r{}: {} {}/{}",
            self.label,
            self.bar.render(fraction)?,
            self.current,
            self.total
        );
        self.console.write_raw(&line)?;
        self.console.flush()
    }

    /// Ends the redraw line and reports completion.
    pub fn finish(self) -> Result<()> {
        let Self {
            console,
            label,
            total,
            ..
        } = self;
        console.write_raw("\n")?;
        console.println_styled(
            &format!("{} complete ({} items)", label, total),
            &Semantic::Success.into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default_shape() {
        let bar = ProgressBar::default();
        let out = bar.render(0.5).unwrap();
        assert!(out.starts_with('['));
        assert!(out.ends_with("] (50%)"));
        assert_eq!(out.matches('#').count(), 25);
        assert_eq!(out.matches('.').count(), 25);
    }

    #[test]
    fn test_render_bounds() {
        let bar = ProgressBar::default().width(10).show_percent(false);
        assert_eq!(bar.render(0.0).unwrap(), "[..........]");
        assert_eq!(bar.render(1.0).unwrap(), "[##########]");
    }

    #[test]
    fn test_render_out_of_range() {
        let bar = ProgressBar::default();
        assert!(matches!(
            bar.render(1.5),
            Err(Error::ProgressOutOfRange(_))
        ));
        assert!(matches!(
            bar.render(-0.1),
            Err(Error::ProgressOutOfRange(_))
        ));
    }

    #[test]
    fn test_custom_glyphs() {
        let bar = ProgressBar::default()
            .width(4)
            .fill('=')
            .empty(' ')
            .brackets('<', '>')
            .show_percent(false);
        assert_eq!(bar.render(0.5).unwrap(), "<==  >");
    }

    #[test]
    fn test_percent_truncates_toward_zero() {
        let bar = ProgressBar::default().width(3);
        let out = bar.render(0.999).unwrap();
        assert!(out.ends_with("(99%)"));
    }
}
