use std::env;
use std::path::PathBuf;

use clap::Args;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use eyre::{Context, Result, bail};
use trellis_compose::Features;
use trellis_core::{can_skip_emptying, is_valid_package_name, to_valid_package_name};

use crate::ops::{ScaffoldOptions, scaffold};
use crate::reports::{Report, TerminalOutput};

const DEFAULT_PROJECT_NAME: &str = "vue-project";
const TEMPLATE_ROOT_ENV: &str = "TRELLIS_TEMPLATE_ROOT";

#[derive(Args)]
pub struct CreateCommand {
    /// Target directory for the new project
    pub target_dir: Option<String>,

    /// Scaffold with defaults, skipping all feature prompts
    #[arg(long)]
    pub default: bool,

    /// Add TypeScript
    #[arg(long, visible_alias = "ts")]
    pub typescript: bool,

    /// Add JSX support
    #[arg(long)]
    pub jsx: bool,

    /// Add Vue Router for Single Page Application development
    #[arg(long, visible_alias = "vue-router")]
    pub router: bool,

    /// Add Pinia for state management
    #[arg(long)]
    pub pinia: bool,

    /// Add both Vitest and Cypress
    #[arg(long = "with-tests", visible_alias = "tests")]
    pub with_tests: bool,

    /// Add Vitest for unit testing
    #[arg(long)]
    pub vitest: bool,

    /// Add Cypress for end-to-end testing
    #[arg(long)]
    pub cypress: bool,

    /// Add Playwright for end-to-end testing
    #[arg(long)]
    pub playwright: bool,

    /// Add ESLint for code quality
    #[arg(long)]
    pub eslint: bool,

    /// Add ESLint with Prettier formatting
    #[arg(long = "eslint-with-prettier")]
    pub eslint_with_prettier: bool,

    /// Overwrite a non-empty target directory without asking
    #[arg(short, long)]
    pub force: bool,

    /// Directory holding the template fragments
    #[arg(long)]
    pub template_root: Option<PathBuf>,
}

impl CreateCommand {
    pub fn run(&self) -> Result<()> {
        let theme = ColorfulTheme::default();
        let cwd = env::current_dir().wrap_err("failed to get current directory")?;

        let target_dir = match &self.target_dir {
            Some(dir) => dir.clone(),
            None => {
                let name: String = Input::with_theme(&theme)
                    .with_prompt("Project name")
                    .default(DEFAULT_PROJECT_NAME.to_string())
                    .interact_text()
                    .wrap_err("failed to read project name")?;
                let name = name.trim().to_string();
                if name.is_empty() {
                    DEFAULT_PROJECT_NAME.to_string()
                } else {
                    name
                }
            }
        };
        let root = cwd.join(&target_dir);

        let mut should_overwrite = self.force;
        if !can_skip_emptying(&root)? && !self.force {
            let dir_label = if target_dir == "." {
                "Current directory".to_string()
            } else {
                format!("Target directory \"{target_dir}\"")
            };
            let confirmed = Confirm::with_theme(&theme)
                .with_prompt(format!(
                    "{dir_label} is not empty. Remove existing files and continue?"
                ))
                .default(false)
                .interact()
                .wrap_err("failed to read overwrite confirmation")?;
            if !confirmed {
                bail!("Operation cancelled");
            }
            should_overwrite = true;
        }

        let package_name = if is_valid_package_name(&target_dir) {
            target_dir.clone()
        } else {
            Input::with_theme(&theme)
                .with_prompt("Package name")
                .default(to_valid_package_name(&target_dir))
                .validate_with(|input: &String| {
                    if is_valid_package_name(input) {
                        Ok(())
                    } else {
                        Err("Invalid package.json name")
                    }
                })
                .interact_text()
                .wrap_err("failed to read package name")?
        };

        let features = match self.flag_features() {
            Some(features) => features,
            None => Self::prompt_features(&theme)?,
        };

        println!();
        println!("Scaffolding project in {}...", root.display());

        let report = scaffold(&ScaffoldOptions {
            root: &root,
            cwd: &cwd,
            package_name: &package_name,
            template_root: &self.resolve_template_root(),
            features,
            overwrite: should_overwrite,
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// The feature set encoded on the command line, or `None` when no
    /// feature flag was given and the prompts should run.
    fn flag_features(&self) -> Option<Features> {
        let any_flag = self.default
            || self.typescript
            || self.jsx
            || self.router
            || self.pinia
            || self.with_tests
            || self.vitest
            || self.cypress
            || self.playwright
            || self.eslint
            || self.eslint_with_prettier;
        if !any_flag {
            return None;
        }
        Some(Features {
            typescript: self.typescript,
            jsx: self.jsx,
            router: self.router,
            pinia: self.pinia,
            vitest: self.vitest || self.with_tests,
            cypress: self.cypress || self.with_tests,
            playwright: self.playwright,
            eslint: self.eslint || self.eslint_with_prettier,
            prettier: self.eslint_with_prettier,
        })
    }

    fn prompt_features(theme: &ColorfulTheme) -> Result<Features> {
        let toggle = |prompt: &str| -> Result<bool> {
            Confirm::with_theme(theme)
                .with_prompt(prompt)
                .default(false)
                .interact()
                .wrap_err("failed to read feature selection")
        };

        let typescript = toggle("Add TypeScript?")?;
        let jsx = toggle("Add JSX Support?")?;
        let router = toggle("Add Vue Router for Single Page Application development?")?;
        let pinia = toggle("Add Pinia for state management?")?;
        let vitest = toggle("Add Vitest for Unit Testing?")?;
        let e2e = Select::with_theme(theme)
            .with_prompt("Add an End-to-End Testing Solution?")
            .items(&["No", "Cypress", "Playwright"])
            .default(0)
            .interact()
            .wrap_err("failed to read e2e selection")?;
        let eslint = toggle("Add ESLint for code quality?")?;
        let prettier = if eslint {
            toggle("Add Prettier for code formatting?")?
        } else {
            false
        };

        Ok(Features {
            typescript,
            jsx,
            router,
            pinia,
            vitest,
            cypress: e2e == 1,
            playwright: e2e == 2,
            eslint,
            prettier,
        })
    }

    fn resolve_template_root(&self) -> PathBuf {
        if let Some(root) = &self.template_root {
            return root.clone();
        }
        if let Ok(root) = env::var(TEMPLATE_ROOT_ENV) {
            return PathBuf::from(root);
        }
        if let Ok(exe) = env::current_exe() {
            if let Some(dir) = exe.parent() {
                let bundled = dir.join("templates");
                if bundled.is_dir() {
                    return bundled;
                }
            }
        }
        PathBuf::from("templates")
    }
}
