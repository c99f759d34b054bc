//! Applying a template fragment onto the destination root.

use std::{fs, path::Path};

use eyre::{Result, WrapErr};
use trellis_manifest::{MANIFEST_FILENAME, Manifest};

/// Recursively mirror `src` onto `dest`.
///
/// Three kinds of files get special treatment:
/// - `package.json` deep-merges into an existing destination manifest,
///   with dependency tables re-sorted afterwards;
/// - `_gitignore` merges by concatenation when `.gitignore` already exists;
/// - any other name with a leading `_` is written with a leading `.`
///   instead (fragment trees cannot reliably ship dotfiles).
///
/// Everything else is a byte copy; an existing destination file is
/// overwritten, so the last applied fragment wins. Entries named `.git`
/// are never copied, so a fragment root that is itself a git checkout
/// does not leak repository state into the project.
pub fn apply_template(src: &Path, dest: &Path) -> Result<()> {
    if src.is_dir() {
        fs::create_dir_all(dest)
            .wrap_err_with(|| format!("failed to create {}", dest.display()))?;
        for entry in fs::read_dir(src)? {
            let entry = entry?;
            if entry.file_name() == ".git" {
                continue;
            }
            apply_template(&entry.path(), &dest.join(entry.file_name()))?;
        }
        return Ok(());
    }

    let filename = src
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    if filename == MANIFEST_FILENAME && dest.exists() {
        return merge_manifest(src, dest);
    }

    let dest = match filename.strip_prefix('_') {
        Some(rest) => dest.with_file_name(format!(".{rest}")),
        None => dest.to_path_buf(),
    };

    if filename == "_gitignore" && dest.exists() {
        let existing = fs::read_to_string(&dest)?;
        let incoming = fs::read_to_string(src)?;
        fs::write(&dest, format!("{existing}\n{incoming}"))?;
        return Ok(());
    }

    fs::copy(src, &dest)
        .wrap_err_with(|| format!("failed to copy {} to {}", src.display(), dest.display()))?;
    Ok(())
}

fn merge_manifest(src: &Path, dest: &Path) -> Result<()> {
    let mut existing = Manifest::from_path(dest).map_err(into_report)?;
    let incoming = Manifest::from_path(src).map_err(into_report)?;
    existing.merge(incoming);
    existing.sort_dependencies();
    existing.write_to(dest).map_err(into_report)?;
    Ok(())
}

/// Render the manifest diagnostic through miette so spans survive the
/// trip through eyre.
pub(crate) fn into_report(err: Box<trellis_manifest::Error>) -> eyre::Report {
    eyre::eyre!("{:?}", miette::Report::new(*err))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use super::*;

    fn write(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_mirrors_directory_tree() {
        let temp = TempDir::new().unwrap();
        let fragment = temp.path().join("fragment");
        let root = temp.path().join("root");
        write(&fragment.join("src").join("App.vue"), "<template/>");
        write(&fragment.join("vite.config.js"), "export default {}");

        apply_template(&fragment, &root).unwrap();

        assert_eq!(
            fs::read_to_string(root.join("src").join("App.vue")).unwrap(),
            "<template/>"
        );
        assert!(root.join("vite.config.js").exists());
    }

    #[test]
    fn test_underscore_files_become_dotfiles() {
        let temp = TempDir::new().unwrap();
        let fragment = temp.path().join("fragment");
        let root = temp.path().join("root");
        write(&fragment.join("_gitignore"), "node_modules\n");
        write(&fragment.join("_npmrc"), "shamefully-hoist=true\n");

        apply_template(&fragment, &root).unwrap();

        assert!(root.join(".gitignore").exists());
        assert!(root.join(".npmrc").exists());
        assert!(!root.join("_gitignore").exists());
    }

    #[test]
    fn test_gitignore_fragments_concatenate() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        let root = temp.path().join("root");
        write(&a.join("_gitignore"), "node_modules\n");
        write(&b.join("_gitignore"), "coverage\n");

        apply_template(&a, &root).unwrap();
        apply_template(&b, &root).unwrap();

        let merged = fs::read_to_string(root.join(".gitignore")).unwrap();
        assert!(merged.contains("node_modules"));
        assert!(merged.contains("coverage"));
    }

    #[test]
    fn test_manifest_merges_instead_of_overwriting() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        let root = temp.path().join("root");
        write(
            &a.join("package.json"),
            r#"{"dependencies": {"vue": "^3.3.4", "foo": "1.0.0"}}"#,
        );
        write(
            &b.join("package.json"),
            r#"{"dependencies": {"foo": "2.0.0", "axios": "^1.5.0"}}"#,
        );

        apply_template(&a, &root).unwrap();
        apply_template(&b, &root).unwrap();

        let manifest = Manifest::from_path(&root.join("package.json")).unwrap();
        assert_eq!(
            manifest.get("dependencies").unwrap()["foo"],
            serde_json::json!("2.0.0")
        );

        // dependency keys come out sorted
        let rendered = manifest.to_json_string();
        let axios = rendered.find("axios").unwrap();
        let foo = rendered.find("foo").unwrap();
        let vue = rendered.find("vue").unwrap();
        assert!(axios < foo);
        assert!(foo < vue);
    }

    #[test]
    fn test_plain_files_last_fragment_wins() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        let root = temp.path().join("root");
        write(&a.join("vite.config.js"), "base");
        write(&b.join("vite.config.js"), "override");

        apply_template(&a, &root).unwrap();
        apply_template(&b, &root).unwrap();

        assert_eq!(
            fs::read_to_string(root.join("vite.config.js")).unwrap(),
            "override"
        );
    }

    #[test]
    fn test_malformed_destination_manifest_aborts() {
        let temp = TempDir::new().unwrap();
        let fragment = temp.path().join("fragment");
        let root = temp.path().join("root");
        write(&fragment.join("package.json"), r#"{"name": "ok"}"#);
        write(&root.join("package.json"), "{ not json");

        let result = apply_template(&fragment, &root);
        assert!(result.is_err());
    }
}
