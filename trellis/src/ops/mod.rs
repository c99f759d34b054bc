//! Side-effectful operations behind the commands.

mod scaffold;

pub use scaffold::{ScaffoldOptions, scaffold};
