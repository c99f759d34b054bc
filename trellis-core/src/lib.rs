//! Filesystem primitives for the trellis scaffolder.
//!
//! This crate provides the directory traversal and file-writing
//! machinery used across the trellis workspace.

mod file;
mod name;
mod walk;

// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Package-name utilities
pub use name::{is_valid_package_name, to_valid_package_name};
// Directory traversal
pub use walk::{can_skip_emptying, empty_dir, walk_post_order, walk_pre_order};
