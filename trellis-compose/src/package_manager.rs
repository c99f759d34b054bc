//! Package-manager detection and command rendering.

use std::fmt;

/// The package manager the generated instructions should target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
}

impl PackageManager {
    /// Sniff the manager that invoked us from `npm_config_user_agent`,
    /// the variable every manager sets for child processes.
    pub fn detect() -> Self {
        let user_agent = std::env::var("npm_config_user_agent").unwrap_or_default();
        Self::from_user_agent(&user_agent)
    }

    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("pnpm") {
            Self::Pnpm
        } else if user_agent.contains("yarn") {
            Self::Yarn
        } else {
            Self::Npm
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The shell command that runs `script` under the given manager.
///
/// npm needs `run` for project scripts, and a bare `yarn` installs.
pub fn run_command(pm: PackageManager, script: &str) -> String {
    if script == "install" {
        return match pm {
            PackageManager::Yarn => "yarn".to_string(),
            other => format!("{other} install"),
        };
    }
    match pm {
        PackageManager::Npm => format!("npm run {script}"),
        other => format!("{other} {script}"),
    }
}
