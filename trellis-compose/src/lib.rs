//! Template composition for the trellis scaffolder.
//!
//! A scaffolded project is a left fold: an ordered sequence of template
//! fragments applied onto one destination root, followed by a single
//! language-conversion pass and the generated README and lint config.

mod convert;
mod eslint;
mod package_manager;
mod plan;
mod readme;
mod template;

pub use convert::{DEFAULT_PRESERVED_SCRIPTS, LanguageConverter, convert_language};
pub use eslint::render_eslint;
pub use package_manager::{PackageManager, run_command};
pub use plan::{Features, fragment_sequence};
pub use readme::Readme;
pub use template::apply_template;
