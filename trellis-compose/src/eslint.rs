//! Lint configuration rendering.
//!
//! Produces a manifest fragment (scripts and devDependencies) and the
//! lint dotfiles, then pushes the fragment through the same merge-and-sort
//! path the composer uses for template manifests.

use std::path::Path;

use eyre::Result;
use indexmap::IndexMap;
use serde_json::{Value, json};
use trellis_core::File;
use trellis_manifest::{MANIFEST_FILENAME, Manifest};

use crate::{Features, template::into_report};

pub fn render_eslint(root: &Path, features: &Features) -> Result<()> {
    let manifest_path = root.join(MANIFEST_FILENAME);
    let mut manifest = Manifest::from_path(&manifest_path).map_err(into_report)?;

    let fragment = match manifest_fragment(features) {
        Value::Object(map) => Manifest::from_object(map),
        // json! with an object literal always yields an object
        _ => unreachable!(),
    };
    manifest.merge(fragment);
    manifest.sort_dependencies();
    manifest.write_to(&manifest_path).map_err(into_report)?;

    for (filename, content) in config_files(features) {
        File::new(root.join(filename), content).write()?;
    }
    Ok(())
}

fn manifest_fragment(features: &Features) -> Value {
    let lint = if features.typescript {
        "eslint . --ext .vue,.js,.jsx,.cjs,.mjs,.ts,.tsx,.cts,.mts --fix --ignore-path .gitignore"
    } else {
        "eslint . --ext .vue,.js,.jsx,.cjs,.mjs --fix --ignore-path .gitignore"
    };

    let mut scripts = json!({ "lint": lint });
    let mut dev_dependencies = json!({
        "eslint": "^8.49.0",
        "eslint-plugin-vue": "^9.17.0",
    });

    if features.typescript {
        dev_dependencies["@vue/eslint-config-typescript"] = json!("^12.0.0");
    }
    if features.cypress {
        dev_dependencies["eslint-plugin-cypress"] = json!("^2.15.1");
    }
    if features.prettier {
        // format only src/ to keep the noise down; users can append paths
        scripts["format"] = json!("prettier --write src/");
        dev_dependencies["@vue/eslint-config-prettier"] = json!("^8.0.0");
        dev_dependencies["prettier"] = json!("^3.0.3");
    }

    json!({ "scripts": scripts, "devDependencies": dev_dependencies })
}

fn config_files(features: &Features) -> IndexMap<&'static str, String> {
    let mut files = IndexMap::new();
    files.insert(".eslintrc.cjs", eslintrc(features));
    if features.prettier {
        files.insert(".prettierrc.json", prettierrc());
        files.insert(".prettierignore", prettierignore());
    }
    files
}

fn eslintrc(features: &Features) -> String {
    let mut extends = vec!["'plugin:vue/vue3-essential'", "'eslint:recommended'"];
    if features.typescript {
        extends.push("'@vue/eslint-config-typescript'");
    }
    if features.prettier {
        extends.push("'@vue/eslint-config-prettier/skip-formatting'");
    }
    let extends = extends
        .iter()
        .map(|e| format!("    {e}"))
        .collect::<Vec<_>>()
        .join(",\n");

    let overrides = if features.cypress {
        let files = if features.cypress_ct() {
            "[\n        '**/__tests__/*.{cy,spec}.{js,ts,jsx,tsx}',\n        'cypress/e2e/**/*.{cy,spec}.{js,ts,jsx,tsx}'\n      ]"
        } else {
            "['cypress/e2e/**/*.{cy,spec}.{js,ts,jsx,tsx}']"
        };
        format!(
            "  overrides: [\n    {{\n      files: {files},\n      'extends': ['plugin:cypress/recommended']\n    }}\n  ],\n"
        )
    } else {
        String::new()
    };

    format!(
        "/* eslint-env node */\nmodule.exports = {{\n  root: true,\n  'extends': [\n{extends}\n  ],\n{overrides}  parserOptions: {{\n    ecmaVersion: 'latest'\n  }}\n}}\n"
    )
}

fn prettierrc() -> String {
    concat!(
        "{\n",
        "  \"$schema\": \"https://json.schemastore.org/prettierrc\",\n",
        "  \"semi\": false,\n",
        "  \"tabWidth\": 2,\n",
        "  \"singleQuote\": true,\n",
        "  \"printWidth\": 100,\n",
        "  \"trailingComma\": \"none\"\n",
        "}\n"
    )
    .to_string()
}

fn prettierignore() -> String {
    "/dist/*\n.local\n.output.js\n/node_modules/**\n\n**/*.svg\n**/*.sh\n\n/public/*\n".to_string()
}
