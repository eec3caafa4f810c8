//! Styled console output and input for command-line programs.
//!
//! `consoleverse` wraps an output sink and an input source in a [`Console`]
//! that knows whether its surface can display styling. Styled printing,
//! semantic success/error/warning/info messages, prompted input, indentation
//! and titled blocks, tables, panels, and progress bars all degrade to plain
//! text automatically when the surface is not a capable terminal.
//!
//! # Example
//!
//! ```rust
//! use consoleverse::{Color, Console, CustomStyle};
//!
//! let mut console = Console::builder().no_color().build();
//! console.println("Deploying...")?;
//! console.success("Deployed in 3.2s.")?;
//!
//! let accent = CustomStyle::new().fg(Color::Cyan).bold();
//! console.println_styled("3 warnings", &accent.into())?;
//! # Ok::<(), consoleverse::Error>(())
//! ```
//!
//! Capability is resolved once, when the console is built: with the default
//! [`ColorChoice::Auto`], styling is enabled only for a real terminal on
//! standard output with `NO_COLOR` unset. Piped output never receives escape
//! sequences unless styling is forced explicitly.

mod components;
mod console;
mod error;
mod style;
mod text;
mod theme;

pub use self::components::{BorderStyle, Labels, Panel, ProgressBar, ProgressTracker, Table, TableStyle};
pub use self::console::{ColorChoice, Console, ConsoleBuilder};
pub use self::error::{Error, Result};
pub use self::style::{Color, CustomStyle, Semantic, StyleSpec, Weight};
pub use self::text::{display_width, pad_center, rgb_to_ansi256, truncate_to_width};
pub use self::theme::{set_theme_detector, AdaptiveTheme, ColorMode, Theme, ThemeChoice};
