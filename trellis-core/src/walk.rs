//! Recursive directory traversal with pre-order and post-order variants.
//!
//! Callbacks may mutate the tree they are walking: the pre-order walker
//! re-checks that a directory still exists after its callback before
//! descending into it. Entries named `.git` are never visited at any depth.

use std::{fs, path::Path};

use eyre::Result;

/// Walk `dir` visiting each directory before its children.
///
/// `on_dir` may delete the directory it is handed; the walker treats a
/// vanished directory as a normal skip rather than an error.
pub fn walk_pre_order<D, F>(dir: &Path, mut on_dir: D, mut on_file: F) -> Result<()>
where
    D: FnMut(&Path) -> Result<()>,
    F: FnMut(&Path) -> Result<()>,
{
    pre_order(dir, &mut on_dir, &mut on_file)
}

fn pre_order<D, F>(dir: &Path, on_dir: &mut D, on_file: &mut F) -> Result<()>
where
    D: FnMut(&Path) -> Result<()>,
    F: FnMut(&Path) -> Result<()>,
{
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name() == ".git" {
            continue;
        }
        let path = entry.path();
        // symlink_metadata semantics: a symlink to a directory is a file here
        if entry.file_type()?.is_dir() {
            on_dir(&path)?;
            if path.exists() {
                pre_order(&path, on_dir, on_file)?;
            }
            continue;
        }
        on_file(&path)?;
    }
    Ok(())
}

/// Walk `dir` visiting each directory after its children.
///
/// Children are processed before their parents, which is what makes
/// deletion of non-empty trees safe with an operation that only removes
/// empty directories.
pub fn walk_post_order<D, F>(dir: &Path, mut on_dir: D, mut on_file: F) -> Result<()>
where
    D: FnMut(&Path) -> Result<()>,
    F: FnMut(&Path) -> Result<()>,
{
    post_order(dir, &mut on_dir, &mut on_file)
}

fn post_order<D, F>(dir: &Path, on_dir: &mut D, on_file: &mut F) -> Result<()>
where
    D: FnMut(&Path) -> Result<()>,
    F: FnMut(&Path) -> Result<()>,
{
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_name() == ".git" {
            continue;
        }
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            post_order(&path, on_dir, on_file)?;
            on_dir(&path)?;
            continue;
        }
        on_file(&path)?;
    }
    Ok(())
}

/// Remove every entry under `dir`, leaving `dir` itself as an empty
/// directory. A `.git` entry survives untouched. No-op if `dir` does
/// not exist.
pub fn empty_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Ok(());
    }
    walk_post_order(
        dir,
        |dir| Ok(fs::remove_dir(dir)?),
        |file| Ok(fs::remove_file(file)?),
    )
}

/// Whether `dir` can be scaffolded into without destroying anything:
/// it does not exist, is empty, or contains only a `.git` directory.
pub fn can_skip_emptying(dir: &Path) -> Result<bool> {
    if !dir.exists() {
        return Ok(true);
    }
    let mut entries = fs::read_dir(dir)?;
    match entries.next() {
        None => Ok(true),
        Some(entry) => Ok(entry?.file_name() == ".git" && entries.next().is_none()),
    }
}
