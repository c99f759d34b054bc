//! README generation for the scaffolded project.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use trellis_core::GeneratedFile;

use crate::{Features, PackageManager, run_command};

/// The project README, rendered once at the end of composition.
pub struct Readme<'a> {
    pub project_name: &'a str,
    pub package_manager: PackageManager,
    pub features: &'a Features,
}

impl Readme<'_> {
    fn command_block(&self, out: &mut String, heading: &str, scripts: &[&str]) {
        let _ = writeln!(out, "### {heading}\n");
        out.push_str("```sh\n");
        for script in scripts {
            let _ = writeln!(out, "{}", run_command(self.package_manager, script));
        }
        out.push_str("```\n\n");
    }
}

impl GeneratedFile for Readme<'_> {
    fn path(&self, root: &Path) -> PathBuf {
        root.join("README.md")
    }

    fn render(&self) -> String {
        let features = self.features;
        let mut out = String::new();

        let _ = writeln!(out, "# {}\n", self.project_name);
        out.push_str(
            "This template should help get you started developing with Vue 3 in Vite.\n\n",
        );

        out.push_str("## Recommended IDE Setup\n\n");
        out.push_str(
            "[VSCode](https://code.visualstudio.com/) + [Volar](https://marketplace.visualstudio.com/items?itemName=Vue.volar) (and disable Vetur).\n\n",
        );

        if features.typescript {
            out.push_str("## Type Support for `.vue` Imports in TS\n\n");
            out.push_str(
                "TypeScript cannot handle type information for `.vue` imports by default, so we replace the `tsc` CLI with `vue-tsc` for type checking. In editors, we need [TypeScript Vue Plugin (Volar)](https://marketplace.visualstudio.com/items?itemName=Vue.vscode-typescript-vue-plugin) to make the TypeScript language service aware of `.vue` types.\n\n",
            );
        }

        out.push_str("## Customize configuration\n\n");
        out.push_str("See [Vite Configuration Reference](https://vitejs.dev/config/).\n\n");

        out.push_str("## Project Setup\n\n");
        out.push_str("```sh\n");
        let _ = writeln!(out, "{}", run_command(self.package_manager, "install"));
        out.push_str("```\n\n");

        self.command_block(&mut out, "Compile and Hot-Reload for Development", &["dev"]);

        let build_heading = if features.typescript {
            "Type-Check, Compile and Minify for Production"
        } else {
            "Compile and Minify for Production"
        };
        self.command_block(&mut out, build_heading, &["build"]);

        if features.vitest {
            self.command_block(
                &mut out,
                "Run Unit Tests with [Vitest](https://vitest.dev/)",
                &["test:unit"],
            );
        }
        if features.cypress_ct() {
            self.command_block(
                &mut out,
                "Run Unit Tests with [Cypress Component Testing](https://docs.cypress.io/guides/component-testing/introduction)",
                &["test:unit"],
            );
        }
        if features.cypress {
            self.command_block(
                &mut out,
                "Run End-to-End Tests with [Cypress](https://www.cypress.io/)",
                &["test:e2e:dev"],
            );
        }
        if features.playwright {
            self.command_block(
                &mut out,
                "Run End-to-End Tests with [Playwright](https://playwright.dev)",
                &["build", "test:e2e"],
            );
        }
        if features.eslint {
            self.command_block(
                &mut out,
                "Lint with [ESLint](https://eslint.org/)",
                &["lint"],
            );
        }

        out.truncate(out.trim_end_matches('\n').len());
        out.push('\n');
        out
    }
}
