//! The [`Console`]: styled output, line input, indentation, and blocks.

use std::io::{self, BufRead, BufReader, IsTerminal, Write};

use tracing::debug;

use crate::components::{Panel, ProgressBar, ProgressTracker, Table};
use crate::error::{Error, Result};
use crate::style::{paint, Color, Semantic, StyleSpec};
use crate::theme::{Theme, ThemeChoice};

/// Controls whether styled output is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect capability from the target surface.
    #[default]
    Auto,
    /// Always emit styled output, even to non-terminal sinks.
    Always,
    /// Never emit styling; text passes through unchanged.
    Never,
}

/// Indentation state applied as a prefix to every printed line.
#[derive(Debug, Clone)]
struct Indent {
    ch: char,
    size: usize,
    level: usize,
}

impl Indent {
    fn prefix(&self) -> String {
        std::iter::repeat(self.ch)
            .take(self.size * self.level)
            .collect()
    }
}

/// A styled console bound to one output sink and one input source.
///
/// The surface capability is resolved once at construction: styled output is
/// only emitted when the sink was judged capable (or styling was forced), so
/// piped and redirected output never receives raw escape sequences.
///
/// All operations are synchronous and run on the calling thread. The console
/// performs no internal locking; callers sharing a sink across threads must
/// serialize access themselves.
///
/// # Example
///
/// ```rust
/// use consoleverse::Console;
///
/// let mut console = Console::stdout();
/// console.println("Hello, world!").unwrap();
/// console.success("It works.").unwrap();
/// ```
pub struct Console {
    out: Box<dyn Write + Send>,
    input: Box<dyn BufRead + Send>,
    theme: Theme,
    styled: bool,
    indent: Indent,
    at_line_start: bool,
}

/// Builder for [`Console`].
pub struct ConsoleBuilder {
    writer: Option<Box<dyn Write + Send>>,
    reader: Option<Box<dyn BufRead + Send>>,
    color: ColorChoice,
    theme: Option<Theme>,
    indent_ch: char,
    indent_size: usize,
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self {
            writer: None,
            reader: None,
            color: ColorChoice::Auto,
            theme: None,
            indent_ch: ' ',
            indent_size: 2,
        }
    }
}

impl ConsoleBuilder {
    /// Replaces the output sink (standard output by default).
    ///
    /// The sink is used for writing only and is never closed; dropping the
    /// console merely drops the handle.
    pub fn writer(mut self, writer: impl Write + Send + 'static) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Replaces the input source (standard input by default).
    pub fn reader(mut self, reader: impl BufRead + Send + 'static) -> Self {
        self.reader = Some(Box::new(reader));
        self
    }

    pub fn color(mut self, choice: ColorChoice) -> Self {
        self.color = choice;
        self
    }

    /// Shorthand for [`ColorChoice::Never`].
    pub fn no_color(self) -> Self {
        self.color(ColorChoice::Never)
    }

    /// Shorthand for [`ColorChoice::Always`].
    pub fn force_styling(self) -> Self {
        self.color(ColorChoice::Always)
    }

    /// Sets the theme, fixed or adaptive.
    pub fn theme<'a>(mut self, theme: impl Into<ThemeChoice<'a>>) -> Self {
        self.theme = Some(theme.into().resolve());
        self
    }

    /// Sets the indentation unit (two spaces by default).
    pub fn indent_with(mut self, ch: char, size: usize) -> Self {
        self.indent_ch = ch;
        self.indent_size = size;
        self
    }

    /// Resolves the surface capability and builds the console.
    ///
    /// With [`ColorChoice::Auto`], styling is enabled only when writing to
    /// standard output, that output is a terminal, and `NO_COLOR` is unset.
    /// A caller-supplied sink is never assumed to be a terminal.
    pub fn build(self) -> Console {
        let custom_sink = self.writer.is_some();
        let styled = match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                !custom_sink
                    && std::env::var_os("NO_COLOR").is_none()
                    && io::stdout().is_terminal()
            }
        };
        debug!(styled, custom_sink, "console capability resolved");

        Console {
            out: self.writer.unwrap_or_else(|| Box::new(io::stdout())),
            input: self
                .reader
                .unwrap_or_else(|| Box::new(BufReader::new(io::stdin()))),
            theme: self.theme.unwrap_or_default(),
            styled,
            indent: Indent {
                ch: self.indent_ch,
                size: self.indent_size,
                level: 0,
            },
            at_line_start: true,
        }
    }
}

impl Console {
    /// A console on standard output and input with auto-detected capability.
    pub fn stdout() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    /// Whether this console's surface received styling capability.
    pub fn is_styled(&self) -> bool {
        self.styled
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Formats `text` per `spec` for this console's surface without writing.
    ///
    /// On a non-capable surface this returns the text unchanged.
    pub fn styled(&self, text: &str, spec: &StyleSpec) -> String {
        paint(&spec.resolve(&self.theme), text, self.styled)
    }

    pub(crate) fn write_raw(&mut self, text: &str) -> Result<()> {
        self.out.write_all(text.as_bytes()).map_err(Error::Write)
    }

    /// Flushes the output sink.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().map_err(Error::Write)
    }

    fn write_styled(&mut self, text: &str, spec: &StyleSpec, terminator: &str) -> Result<()> {
        let body = self.styled(text, spec);
        // The indent prefix belongs at the start of a line only; successive
        // terminator-less prints continue the current one.
        if self.at_line_start {
            let prefix = self.indent.prefix();
            self.write_raw(&prefix)?;
        }
        self.write_raw(&body)?;
        self.write_raw(terminator)?;
        self.at_line_start = match terminator {
            "" => text.ends_with('\n'),
            _ => terminator.ends_with('\n'),
        };
        Ok(())
    }

    // ── printing ────────────────────────────────────────────────────────

    /// Writes `text` followed by a line terminator.
    pub fn println(&mut self, text: &str) -> Result<()> {
        self.write_styled(text, &StyleSpec::plain(), "\n")
    }

    /// Writes `text` without a terminator.
    pub fn print(&mut self, text: &str) -> Result<()> {
        self.write_styled(text, &StyleSpec::plain(), "")
    }

    pub fn println_styled(&mut self, text: &str, spec: &StyleSpec) -> Result<()> {
        self.write_styled(text, spec, "\n")
    }

    pub fn print_styled(&mut self, text: &str, spec: &StyleSpec) -> Result<()> {
        self.write_styled(text, spec, "")
    }

    /// Writes a bare line terminator, ignoring indentation.
    pub fn newline(&mut self) -> Result<()> {
        self.write_raw("\n")?;
        self.at_line_start = true;
        Ok(())
    }

    // ── semantic messages ───────────────────────────────────────────────
    //
    // All four route through the same styled-print path and differ only in
    // the StyleSpec drawn from the theme.

    pub fn success(&mut self, text: &str) -> Result<()> {
        self.println_styled(text, &Semantic::Success.into())
    }

    pub fn error(&mut self, text: &str) -> Result<()> {
        self.println_styled(text, &Semantic::Error.into())
    }

    pub fn warning(&mut self, text: &str) -> Result<()> {
        self.println_styled(text, &Semantic::Warning.into())
    }

    pub fn info(&mut self, text: &str) -> Result<()> {
        self.println_styled(text, &Semantic::Info.into())
    }

    // ── input ───────────────────────────────────────────────────────────

    /// Prompts and reads one line, with the theme's prompt style.
    pub fn input(&mut self, prompt: &str) -> Result<String> {
        let spec = StyleSpec::Custom(self.theme.prompt);
        self.input_styled(prompt, &spec)
    }

    /// Prompts with an explicit style and reads one line.
    ///
    /// The prompt is written without a terminator and the sink is flushed
    /// before blocking. The returned line has its trailing `\n` or `\r\n`
    /// stripped.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::EndOfInput`] when the input source is exhausted
    /// before a line could be read; a closed source never yields an empty
    /// string.
    pub fn input_styled(&mut self, prompt: &str, spec: &StyleSpec) -> Result<String> {
        self.write_styled(prompt, spec, "")?;
        self.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(Error::Read)?;
        if read == 0 {
            return Err(Error::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        // The terminal echo of the entered line moved the cursor to a fresh line.
        self.at_line_start = true;
        Ok(line)
    }

    // ── rules and sections ──────────────────────────────────────────────

    /// Prints a horizontal rule of the default `-- ` pattern.
    pub fn rule(&mut self) -> Result<()> {
        self.rule_with("-- ", 30)
    }

    /// Prints a horizontal rule built from `pattern` repeated `repeat` times.
    pub fn rule_with(&mut self, pattern: &str, repeat: usize) -> Result<()> {
        let line = pattern.repeat(repeat);
        let line = line.trim_end();
        self.println_styled(line, &StyleSpec::Custom(self.theme.border))
    }

    /// Prints a section heading: `─── title ───`.
    pub fn section(&mut self, title: &str) -> Result<()> {
        let text = format!("─── {} ───", title);
        self.println_styled(&text, &StyleSpec::Custom(self.theme.heading))
    }

    // ── indentation and blocks ──────────────────────────────────────────

    /// Increases the indentation level by one.
    pub fn indent(&mut self) {
        self.indent.level += 1;
    }

    /// Decreases the indentation level by one, saturating at zero.
    pub fn dedent(&mut self) {
        self.indent.level = self.indent.level.saturating_sub(1);
    }

    pub fn indent_level(&self) -> usize {
        self.indent.level
    }

    /// Opens a titled block: prints `START <TITLE>` and indents.
    pub fn begin_block(&mut self, title: &str) -> Result<()> {
        let heading = format!("START {}", title.to_uppercase());
        self.println_styled(&heading, &StyleSpec::Custom(self.theme.heading))?;
        self.indent();
        Ok(())
    }

    /// Closes a titled block: dedents and prints `END <TITLE>`.
    pub fn end_block(&mut self, title: &str) -> Result<()> {
        self.dedent();
        let heading = format!("END {}", title.to_uppercase());
        self.println_styled(&heading, &StyleSpec::Custom(self.theme.heading))?;
        self.newline()
    }

    /// Runs `f` inside a titled block, restoring indentation afterwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use consoleverse::Console;
    ///
    /// let mut console = Console::builder().no_color().build();
    /// console
    ///     .block("setup", |c| c.println("loading configuration"))
    ///     .unwrap();
    /// ```
    pub fn block<T>(
        &mut self,
        title: &str,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.begin_block(title)?;
        self.newline()?;
        let value = f(self)?;
        self.newline()?;
        self.end_block(title)?;
        Ok(value)
    }

    // ── screen control ──────────────────────────────────────────────────

    /// Clears the screen and homes the cursor. No-op on unstyled surfaces.
    pub fn clear_screen(&mut self) -> Result<()> {
        if self.styled {
            self.write_raw("\x1b[2J\x1b[H")?;
            self.flush()?;
        }
        Ok(())
    }

    // ── components ──────────────────────────────────────────────────────

    /// Renders and prints a table, honoring the current indentation.
    pub fn print_table(&mut self, table: &Table) -> Result<()> {
        let rendered = table.render(&self.theme, self.styled);
        self.write_block(&rendered)
    }

    /// Renders and prints a panel, honoring the current indentation.
    pub fn print_panel(&mut self, panel: &Panel) -> Result<()> {
        let rendered = panel.render(&self.theme, self.styled);
        self.write_block(&rendered)
    }

    /// Renders a progress bar at `fraction` and prints it as one line.
    pub fn print_progress(&mut self, bar: &ProgressBar, fraction: f64) -> Result<()> {
        let line = bar.render(fraction)?;
        self.println(&line)
    }

    /// Starts count-based progress tracking over this console.
    pub fn progress(&mut self, total: usize, label: &str) -> ProgressTracker<'_> {
        ProgressTracker::new(self, total, label)
    }

    fn write_block(&mut self, rendered: &str) -> Result<()> {
        let prefix = self.indent.prefix();
        for line in rendered.lines() {
            self.write_raw(&prefix)?;
            self.write_raw(line)?;
            self.write_raw("\n")?;
        }
        self.at_line_start = true;
        Ok(())
    }

    // ── discovery helpers ───────────────────────────────────────────────

    /// Prints a sample of every named color and text attribute.
    pub fn print_palette(&mut self) -> Result<()> {
        self.println("Colors:")?;
        self.indent();
        for (name, color) in Color::NAMED {
            let sample = self.styled("consoleverse", &(*color).into());
            let line = format!("{:<8} {}", name, sample);
            self.println(&line)?;
        }
        self.dedent();

        self.println("Styles:")?;
        self.indent();
        for name in ["BOLD", "DIM", "UNDERLINE", "BLINK", "REVERSE"] {
            let spec: StyleSpec = name.parse()?;
            let sample = self.styled("consoleverse", &spec);
            let line = format!("{:<10} {}", name, sample);
            self.println(&line)?;
        }
        self.dedent();
        Ok(())
    }
}
