//! The `package.json` model used during template composition.
//!
//! A manifest is a key-ordered JSON object. Fragments are folded into the
//! destination manifest with [`deep_merge`], and dependency tables are
//! re-sorted before every write so output is deterministic and diffable.

mod error;
mod merge;

use std::path::Path;

pub use error::{Error, Result};
pub use merge::deep_merge;
use serde_json::{Map, Value};

pub const MANIFEST_FILENAME: &str = "package.json";

/// A parsed `package.json`, preserving key order.
#[derive(Debug, Clone)]
pub struct Manifest {
    root: Map<String, Value>,
}

impl Manifest {
    /// The minimal manifest written before any template fragment is applied.
    pub fn seed(name: &str, version: &str) -> Self {
        let mut root = Map::new();
        root.insert("name".to_string(), Value::String(name.to_string()));
        root.insert("version".to_string(), Value::String(version.to_string()));
        Self { root }
    }

    /// Wrap an already-built JSON object.
    pub fn from_object(root: Map<String, Value>) -> Self {
        Self { root }
    }

    pub fn from_str(src: &str, filename: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(src).map_err(|e| Error::parse(e, src, filename))?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(Error::not_an_object(src, filename)),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(MANIFEST_FILENAME);
        Self::from_str(&src, filename)
    }

    /// Fold another manifest into this one (later source wins on conflicts).
    pub fn merge(&mut self, overlay: Manifest) {
        let base = std::mem::take(&mut self.root);
        match deep_merge(Value::Object(base), Value::Object(overlay.root)) {
            Value::Object(root) => self.root = root,
            // deep_merge of two objects always yields an object
            _ => unreachable!(),
        }
    }

    /// Re-sort `dependencies` and `devDependencies` keys in case-sensitive
    /// lexical order. Cosmetic, but required for reproducible output.
    pub fn sort_dependencies(&mut self) {
        for table in ["dependencies", "devDependencies"] {
            if let Some(Value::Object(deps)) = self.root.get_mut(table) {
                let mut entries: Vec<(String, Value)> = std::mem::take(deps).into_iter().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));
                *deps = entries.into_iter().collect();
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    /// 2-space pretty JSON with a trailing newline.
    pub fn to_json_string(&self) -> String {
        // serializing a string-keyed map cannot fail
        let mut out = serde_json::to_string_pretty(&self.root).expect("manifest serialization");
        out.push('\n');
        out
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json_string()).map_err(|e| Error::io(path, e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_seed_has_name_and_version() {
        let manifest = Manifest::seed("my-app", "0.0.0");
        assert_eq!(manifest.get("name"), Some(&json!("my-app")));
        assert_eq!(manifest.get("version"), Some(&json!("0.0.0")));
    }

    #[test]
    fn test_merge_later_fragment_wins() {
        let mut a =
            Manifest::from_str(r#"{"dependencies": {"foo": "1.0.0"}}"#, "package.json").unwrap();
        let b =
            Manifest::from_str(r#"{"dependencies": {"foo": "2.0.0"}}"#, "package.json").unwrap();
        a.merge(b);
        assert_eq!(a.get("dependencies"), Some(&json!({"foo": "2.0.0"})));
    }

    #[test]
    fn test_sort_dependencies_lexical() {
        let mut manifest = Manifest::from_str(
            r#"{"dependencies": {"b": "1", "a": "1"}, "devDependencies": {"z": "1", "Y": "1"}}"#,
            "package.json",
        )
        .unwrap();
        manifest.sort_dependencies();

        let rendered = manifest.to_json_string();
        let a = rendered.find("\"a\"").unwrap();
        let b = rendered.find("\"b\"").unwrap();
        assert!(a < b);

        // case-sensitive: 'Y' < 'z'
        let y = rendered.find("\"Y\"").unwrap();
        let z = rendered.find("\"z\"").unwrap();
        assert!(y < z);
    }

    #[test]
    fn test_sort_leaves_other_tables_alone() {
        let mut manifest = Manifest::from_str(
            r#"{"scripts": {"dev": "vite", "build": "vite build"}}"#,
            "package.json",
        )
        .unwrap();
        manifest.sort_dependencies();

        let rendered = manifest.to_json_string();
        assert!(rendered.find("\"dev\"").unwrap() < rendered.find("\"build\"").unwrap());
    }

    #[test]
    fn test_parse_error_is_diagnostic() {
        let err = Manifest::from_str("{ not json", "package.json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_rejects_non_object_root() {
        let err = Manifest::from_str("[1, 2]", "package.json").unwrap_err();
        assert!(matches!(*err, Error::NotAnObject { .. }));
    }

    #[test]
    fn test_write_and_reread_round_trip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("package.json");

        let manifest = Manifest::seed("round-trip", "0.0.0");
        manifest.write_to(&path).unwrap();

        let reread = Manifest::from_path(&path).unwrap();
        assert_eq!(reread.name(), Some("round-trip"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::from_path(&temp.path().join("absent.json")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
