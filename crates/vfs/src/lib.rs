// Virtual File System (VFS)
// An in-memory tree of directories and files. Nothing here touches the host
// filesystem; the tree lives for as long as its owner does.

mod error;
pub mod image;
mod node;
mod path;
mod tree;

pub use error::VfsError;
pub use node::{Directory, File, Node, Permissions};
pub use path::VfsPath;
pub use tree::Tree;

pub type VfsResult<T> = Result<T, VfsError>;

/// Operations the shell performs against a tree.
///
/// Every path handed to these methods is already absolute; relative input is
/// joined onto the working directory with [`VfsPath::join`] first.
pub trait Vfs {
    fn lookup(&self, path: &VfsPath) -> Option<&Node>;
    fn lookup_mut(&mut self, path: &VfsPath) -> Option<&mut Node>;

    /// Resolve raw user input against `cwd`.
    fn resolve(&self, path: &str, cwd: &VfsPath) -> Option<&Node> {
        self.lookup(&cwd.join(path))
    }

    fn directory(&self, path: &VfsPath) -> VfsResult<&Directory> {
        match self.lookup(path) {
            Some(Node::Directory(dir)) => Ok(dir),
            Some(Node::File(_)) => Err(VfsError::NotADirectory(path.to_string())),
            None => Err(VfsError::NotFound(path.to_string())),
        }
    }

    fn file(&self, path: &VfsPath) -> VfsResult<&File> {
        match self.lookup(path) {
            Some(Node::File(file)) => Ok(file),
            Some(Node::Directory(_)) => Err(VfsError::IsADirectory(path.to_string())),
            None => Err(VfsError::NotFound(path.to_string())),
        }
    }

    fn copy_file(&mut self, src: &VfsPath, dst: &VfsPath) -> VfsResult<()>;
    fn remove_dir(&mut self, path: &VfsPath) -> VfsResult<()>;
    fn set_permissions(&mut self, path: &VfsPath, perms: Permissions) -> VfsResult<()>;
}
