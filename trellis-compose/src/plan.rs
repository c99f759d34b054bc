//! Feature flags and the fragment sequence they select.

/// The feature set a project is scaffolded with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub typescript: bool,
    pub jsx: bool,
    pub router: bool,
    pub pinia: bool,
    pub vitest: bool,
    pub cypress: bool,
    pub playwright: bool,
    pub eslint: bool,
    pub prettier: bool,
}

impl Features {
    /// Cypress Component Testing stands in for unit tests when Vitest
    /// was not selected.
    pub fn cypress_ct(&self) -> bool {
        self.cypress && !self.vitest
    }
}

/// The ordered list of fragment names to fold onto the destination.
///
/// Order matters: the base fragment seeds the tree, feature fragments
/// layer config on top, and the code/entry fragments land last so a
/// language- or router-specific variant can override a shared file.
pub fn fragment_sequence(features: &Features) -> Vec<String> {
    let mut fragments = vec!["base".to_string()];

    let mut config = |name: &str| fragments.push(format!("config/{name}"));
    if features.jsx {
        config("jsx");
    }
    if features.router {
        config("router");
    }
    if features.pinia {
        config("pinia");
    }
    if features.vitest {
        config("vitest");
    }
    if features.cypress {
        config("cypress");
    }
    if features.cypress_ct() {
        config("cypress-ct");
    }
    if features.playwright {
        config("playwright");
    }

    if features.typescript {
        fragments.push("config/typescript".to_string());

        fragments.push("tsconfig/base".to_string());
        if features.cypress {
            fragments.push("tsconfig/cypress".to_string());
        }
        if features.cypress_ct() {
            fragments.push("tsconfig/cypress-ct".to_string());
        }
        if features.playwright {
            fragments.push("tsconfig/playwright".to_string());
        }
        if features.vitest {
            fragments.push("tsconfig/vitest".to_string());
        }
    }

    let code = format!(
        "code/{}{}",
        if features.typescript { "typescript-" } else { "" },
        if features.router { "router" } else { "default" }
    );
    fragments.push(code);

    let entry = match (features.pinia, features.router) {
        (true, true) => "entry/router-and-pinia",
        (true, false) => "entry/pinia",
        (false, true) => "entry/router",
        (false, false) => "entry/default",
    };
    fragments.push(entry.to_string());

    fragments
}
