//! In-memory virtual filesystem with a small shell on top.
//!
//! The tree lives in [`vfs`]; parsing, dispatch and the interactive/script
//! loops live in [`shell_core`]. This crate glues them together for the
//! `vfs-shell` binary.

use std::path::Path;

pub use shell_core;
pub use vfs;

use vfs::image::{self, LoadError};
use vfs::Tree;

/// The tree to start from: a JSON image if one is given, else the default
/// layout.
pub fn open_tree(image_path: Option<&Path>) -> Result<Tree, LoadError> {
    match image_path {
        Some(path) => image::load(path),
        None => Ok(Tree::default_layout()),
    }
}
