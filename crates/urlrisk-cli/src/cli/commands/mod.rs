//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod output;
mod watch;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use output::OutputOptions;
pub use watch::run_watch;
