//! Language conversion pass run once after all fragments are applied.
//!
//! Templates share as many files as possible between JavaScript and
//! TypeScript; where sharing is impossible the `.ts` variant sits next
//! to the `.js` one and this pass cleans up whichever side loses.

use std::{ffi::OsStr, fs, path::Path};

use eyre::Result;
use trellis_core::walk_pre_order;

/// Script files that must stay executable as plain JavaScript no matter
/// which project language was chosen.
pub const DEFAULT_PRESERVED_SCRIPTS: &[&str] = &["deploy.js", "deployConfig.js"];

const LOOSE_JS_CONFIG: &str = "jsconfig.json";
const HTML_ENTRY: &str = "index.html";

/// Converts a composed tree between the JavaScript and TypeScript flavors.
pub struct LanguageConverter {
    preserved: Vec<String>,
}

impl LanguageConverter {
    pub fn new() -> Self {
        Self {
            preserved: DEFAULT_PRESERVED_SCRIPTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Replace the denylist of file names exempt from promotion.
    pub fn with_preserved(preserved: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            preserved: preserved.into_iter().map(Into::into).collect(),
        }
    }

    pub fn convert(&self, root: &Path, to_typescript: bool) -> Result<()> {
        if to_typescript {
            self.promote(root)
        } else {
            strip(root)
        }
    }

    /// Promote the tree to TypeScript: rename every `.js` file to `.ts`,
    /// unless a hand-authored `.ts` sibling exists (the sibling wins and
    /// the `.js` file is deleted). `jsconfig.json` is deleted outright,
    /// superseded by the tsconfig fragments. Finally the `index.html`
    /// entry reference is pointed at the `.ts` entry file.
    fn promote(&self, root: &Path) -> Result<()> {
        walk_pre_order(
            root,
            |_| Ok(()),
            |file| {
                let filename = file.file_name().and_then(OsStr::to_str).unwrap_or_default();
                if self.preserved.iter().any(|p| p == filename) {
                    return Ok(());
                }
                if file.extension() == Some(OsStr::new("js")) {
                    let sibling = file.with_extension("ts");
                    if sibling.exists() {
                        fs::remove_file(file)?;
                    } else {
                        fs::rename(file, &sibling)?;
                    }
                } else if filename == LOOSE_JS_CONFIG {
                    fs::remove_file(file)?;
                }
                Ok(())
            },
        )?;

        let entry = root.join(HTML_ENTRY);
        if entry.exists() {
            let content = fs::read_to_string(&entry)?;
            fs::write(&entry, content.replace("src/main.js", "src/main.ts"))?;
        }
        Ok(())
    }
}

impl Default for LanguageConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Delete every `.ts` file. TypeScript-only files have no JavaScript
/// fallback because the composer already applied the JavaScript fragments.
fn strip(root: &Path) -> Result<()> {
    walk_pre_order(
        root,
        |_| Ok(()),
        |file| {
            if file.extension() == Some(OsStr::new("ts")) {
                fs::remove_file(file)?;
            }
            Ok(())
        },
    )
}

/// Run the conversion with the default preserved-scripts denylist.
pub fn convert_language(root: &Path, to_typescript: bool) -> Result<()> {
    LanguageConverter::new().convert(root, to_typescript)
}
