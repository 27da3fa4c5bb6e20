use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    #[error("path {0} does not exist")]
    NotFound(String),

    #[error("{0} is not a directory")]
    NotADirectory(String),

    #[error("{0} is a directory")]
    IsADirectory(String),

    #[error("{0} already exists")]
    AlreadyExists(String),

    #[error("directory {0} is not empty")]
    DirectoryNotEmpty(String),

    #[error("invalid permissions '{0}': expected three octal digits")]
    InvalidPermissions(String),

    #[error("cannot remove the root directory")]
    RootRemoval,

    #[error("invalid destination '{0}'")]
    InvalidDestination(String),

    #[error("invalid tree image: {0}")]
    InvalidImage(String),
}
