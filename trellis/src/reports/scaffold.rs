//! Scaffold command report.

use std::path::PathBuf;

use trellis_compose::{PackageManager, run_command};

use super::output::{Output, Report};

/// Report data from a completed scaffold.
#[derive(Debug)]
pub struct ScaffoldReport {
    /// Destination root of the new project.
    pub root: PathBuf,
    /// Directory the command was invoked from.
    pub cwd: PathBuf,
    /// Package manager the instructions target.
    pub package_manager: PackageManager,
    /// Whether a format script was generated.
    pub needs_prettier: bool,
}

impl ScaffoldReport {
    /// The `cd` argument relative to the invocation directory, quoted if
    /// it contains a space. `None` when scaffolding in place.
    fn cd_target(&self) -> Option<String> {
        if self.root == self.cwd {
            return None;
        }
        let relative = self.root.strip_prefix(&self.cwd).unwrap_or(&self.root);
        let display = relative.display().to_string();
        if display.contains(' ') {
            Some(format!("\"{display}\""))
        } else {
            Some(display)
        }
    }
}

impl Report for ScaffoldReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.line("Done. Now run:");
        out.newline();
        if let Some(target) = self.cd_target() {
            out.command(&format!("cd {target}"));
        }
        out.command(&run_command(self.package_manager, "install"));
        if self.needs_prettier {
            out.command(&run_command(self.package_manager, "format"));
        }
        out.command(&run_command(self.package_manager, "dev"));
        out.newline();
    }
}
