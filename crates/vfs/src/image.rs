//! JSON tree images.
//!
//! An image describes a whole tree. Children are listed as arrays so the
//! document order becomes the listing order:
//!
//! ```json
//! { "type": "directory", "children": [
//!     { "name": "motd", "type": "file", "perms": "600", "content": "hello\n" }
//! ] }
//! ```

use std::fs;
use std::io;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Directory, File, Node, Permissions, Tree, VfsError};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read tree image: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse tree image: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] VfsError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryImage {
    Directory {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        perms: Option<String>,
        #[serde(default)]
        children: Vec<NamedEntry>,
    },
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        perms: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<u64>,
        #[serde(default)]
        content: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedEntry {
    pub name: String,
    #[serde(flatten)]
    pub entry: EntryImage,
}

pub fn from_str(json: &str) -> Result<Tree, LoadError> {
    let image: EntryImage = serde_json::from_str(json)?;
    let root = match build(&image, "/")? {
        Node::Directory(dir) => dir,
        Node::File(_) => return Err(VfsError::InvalidImage("root must be a directory".into()).into()),
    };
    Ok(Tree::from_root(root))
}

pub fn load(path: &Path) -> Result<Tree, LoadError> {
    let json = fs::read_to_string(path)?;
    let tree = from_str(&json)?;
    info!("loaded tree image from {}", path.display());
    Ok(tree)
}

fn perms_or(raw: &Option<String>, default: Permissions) -> Result<Permissions, VfsError> {
    raw.as_deref().map_or(Ok(default), |s| s.parse())
}

fn build(image: &EntryImage, at: &str) -> Result<Node, VfsError> {
    match image {
        EntryImage::File { perms, size, content } => {
            let declared = size.unwrap_or(content.len() as u64);
            let file = File::new(content.as_bytes(), declared).with_permissions(perms_or(perms, Permissions::FILE)?);
            Ok(Node::File(file))
        }
        EntryImage::Directory { perms, children } => {
            let mut dir = Directory::with_permissions(perms_or(perms, Permissions::DIRECTORY)?);
            for child in children {
                let name = child.name.as_str();
                if name.is_empty() || name.contains('/') || name == "." || name == ".." {
                    return Err(VfsError::InvalidImage(format!("bad entry name {name:?} under {at}")));
                }
                let path = if at == "/" { format!("/{name}") } else { format!("{at}/{name}") };
                let node = build(&child.entry, &path)?;
                dir.insert(name, node).map_err(|_| VfsError::InvalidImage(format!("duplicate entry {path}")))?;
            }
            Ok(Node::Directory(dir))
        }
    }
}
