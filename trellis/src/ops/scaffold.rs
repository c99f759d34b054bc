//! The scaffold operation: compose template fragments into a project.

use std::fs;
use std::path::Path;

use eyre::{Context, Result};
use trellis_compose::{
    Features, PackageManager, Readme, apply_template, convert_language, fragment_sequence,
    render_eslint,
};
use trellis_core::{GeneratedFile, empty_dir};
use trellis_manifest::{MANIFEST_FILENAME, Manifest};

use crate::reports::ScaffoldReport;

/// Options for the scaffold operation.
pub struct ScaffoldOptions<'a> {
    /// Destination root of the new project.
    pub root: &'a Path,
    /// Directory the command was invoked from (for the `cd` hint).
    pub cwd: &'a Path,
    /// Name written into the seeded package.json.
    pub package_name: &'a str,
    /// Directory holding the template fragments.
    pub template_root: &'a Path,
    /// Selected feature set.
    pub features: Features,
    /// Empty a non-empty destination before composing.
    pub overwrite: bool,
}

/// Execute the scaffold operation.
///
/// Fragments are applied in sequence with no rollback: a failure part-way
/// leaves the destination partially composed, and the caller surfaces the
/// error and exits.
pub fn scaffold(opts: &ScaffoldOptions) -> Result<ScaffoldReport> {
    if opts.root.exists() {
        if opts.overwrite {
            empty_dir(opts.root).wrap_err("failed to empty target directory")?;
        }
    } else {
        fs::create_dir_all(opts.root).wrap_err("failed to create target directory")?;
    }

    Manifest::seed(opts.package_name, "0.0.0")
        .write_to(&opts.root.join(MANIFEST_FILENAME))
        .wrap_err("failed to seed package.json")?;

    for fragment in fragment_sequence(&opts.features) {
        apply_template(&opts.template_root.join(&fragment), opts.root)
            .wrap_err_with(|| format!("failed to apply template fragment '{fragment}'"))?;
    }

    if opts.features.eslint {
        render_eslint(opts.root, &opts.features).wrap_err("failed to render lint config")?;
    }

    convert_language(opts.root, opts.features.typescript)
        .wrap_err("failed to convert project language")?;

    let package_manager = PackageManager::detect();
    Readme {
        project_name: opts.package_name,
        package_manager,
        features: &opts.features,
    }
    .write(opts.root)
    .wrap_err("failed to write README.md")?;

    Ok(ScaffoldReport {
        root: opts.root.to_path_buf(),
        cwd: opts.cwd.to_path_buf(),
        package_manager,
        needs_prettier: opts.features.prettier,
    })
}
