//! Ready-made output components: tables, panels, and progress bars.
//!
//! Components render to plain strings through a pure `render` step, so the
//! same value produces identical output for a given theme and surface
//! capability. The [`crate::Console`] print methods handle the writing.

mod border;
mod panel;
mod progress;
mod table;

pub use border::BorderStyle;
pub use panel::Panel;
pub use progress::{ProgressBar, ProgressTracker};
pub use table::{Labels, Table, TableStyle};
