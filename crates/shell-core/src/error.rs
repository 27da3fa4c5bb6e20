use thiserror::Error;
use vfs::VfsError;

/// Broad classes of command failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    NotFound,
    TypeMismatch,
    ConstraintViolation,
    UnknownCommand,
    Usage,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("Syntax error: {0}")]
    Syntax(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Error: {0}")]
    Usage(&'static str),

    #[error("Error: invalid line count '{0}'")]
    InvalidCount(String),

    #[error("Error: already in root directory")]
    AlreadyAtRoot,

    #[error("Error: {0}")]
    Vfs(#[from] VfsError),
}

impl ShellError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ShellError::Syntax(_) => ErrorKind::Syntax,
            ShellError::UnknownCommand(_) => ErrorKind::UnknownCommand,
            ShellError::Usage(_) | ShellError::InvalidCount(_) => ErrorKind::Usage,
            ShellError::AlreadyAtRoot => ErrorKind::ConstraintViolation,
            ShellError::Vfs(err) => match err {
                VfsError::NotFound(_) => ErrorKind::NotFound,
                VfsError::NotADirectory(_) | VfsError::IsADirectory(_) => ErrorKind::TypeMismatch,
                VfsError::AlreadyExists(_)
                | VfsError::DirectoryNotEmpty(_)
                | VfsError::InvalidPermissions(_)
                | VfsError::RootRemoval
                | VfsError::InvalidDestination(_)
                | VfsError::InvalidImage(_) => ErrorKind::ConstraintViolation,
            },
        }
    }
}

pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines() {
        assert_eq!(ShellError::UnknownCommand("badcmd".into()).to_string(), "Unknown command: badcmd");
        assert_eq!(
            ShellError::Vfs(VfsError::NotFound("/nope".into())).to_string(),
            "Error: path /nope does not exist"
        );
        assert_eq!(ShellError::AlreadyAtRoot.to_string(), "Error: already in root directory");
    }

    #[test]
    fn kinds() {
        assert_eq!(ShellError::Vfs(VfsError::IsADirectory("/etc".into())).kind(), ErrorKind::TypeMismatch);
        assert_eq!(ShellError::Vfs(VfsError::RootRemoval).kind(), ErrorKind::ConstraintViolation);
        assert_eq!(ShellError::Syntax("x".into()).kind(), ErrorKind::Syntax);
        assert_eq!(ShellError::InvalidCount("x".into()).kind(), ErrorKind::Usage);
    }
}
