//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target, keeping
//! data collection separate from terminal formatting.

mod output;
mod scaffold;

pub use output::{Output, Report, TerminalOutput};
pub use scaffold::ScaffoldReport;
