use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::VfsError;

/// Three octal digits, stored as their numeric values.
///
/// Permissions are metadata only: nothing in the tree checks them against the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Permissions([u8; 3]);

impl Permissions {
    pub const DIRECTORY: Permissions = Permissions([7, 5, 5]);
    pub const FILE: Permissions = Permissions([6, 4, 4]);

    pub fn digits(&self) -> [u8; 3] {
        self.0
    }
}

impl FromStr for Permissions {
    type Err = VfsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(|b| (b'0'..=b'7').contains(b)) {
            return Err(VfsError::InvalidPermissions(s.to_string()));
        }
        Ok(Permissions([bytes[0] - b'0', bytes[1] - b'0', bytes[2] - b'0']))
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [u, g, o] = self.0;
        write!(f, "{u}{g}{o}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    children: IndexMap<String, Node>,
    pub permissions: Permissions,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    pub fn new() -> Self {
        Self::with_permissions(Permissions::DIRECTORY)
    }

    pub fn with_permissions(permissions: Permissions) -> Self {
        Self { children: IndexMap::new(), permissions }
    }

    /// Builder-style insert used when assembling fixed layouts.
    pub fn with_child(mut self, name: &str, node: impl Into<Node>) -> Self {
        self.children.insert(name.to_string(), node.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    /// Append a new entry. Existing names are never overwritten.
    pub fn insert(&mut self, name: &str, node: Node) -> Result<(), VfsError> {
        if self.children.contains_key(name) {
            return Err(VfsError::AlreadyExists(name.to_string()));
        }
        self.children.insert(name.to_string(), node);
        Ok(())
    }

    /// Remove an entry, keeping the order of its siblings.
    pub fn remove(&mut self, name: &str) -> Option<Node> {
        self.children.shift_remove(name)
    }

    /// Children in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(name, node)| (name.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    content: Vec<u8>,
    /// Size as declared when the file was created. Never reconciled with
    /// `content.len()`.
    pub declared_size: u64,
    pub permissions: Permissions,
}

impl File {
    pub fn new(content: impl Into<Vec<u8>>, declared_size: u64) -> Self {
        Self { content: content.into(), declared_size, permissions: Permissions::FILE }
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(File),
}

impl Node {
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn permissions(&self) -> Permissions {
        match self {
            Node::Directory(dir) => dir.permissions,
            Node::File(file) => file.permissions,
        }
    }

    pub fn set_permissions(&mut self, permissions: Permissions) {
        match self {
            Node::Directory(dir) => dir.permissions = permissions,
            Node::File(file) => file.permissions = permissions,
        }
    }

    pub fn as_dir(&self) -> Option<&Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_dir_mut(&mut self) -> Option<&mut Directory> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }
}

impl From<Directory> for Node {
    fn from(dir: Directory) -> Self {
        Node::Directory(dir)
    }
}

impl From<File> for Node {
    fn from(file: File) -> Self {
        Node::File(file)
    }
}
