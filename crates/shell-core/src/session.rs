use log::debug;
use vfs::{Tree, Vfs, VfsPath};

use crate::controller::Output;
use crate::{registry, tokenize, Flow, ShellError};

/// How a single command line ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure(ShellError),
    Exit,
}

/// Result of one command line: what it printed and how it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: Status,
    pub lines: Vec<String>,
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, Status::Failure(_))
    }

    pub fn error(&self) -> Option<&ShellError> {
        match &self.status {
            Status::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Write the command output, then the error report if it failed.
    pub fn write_to<O: Output + ?Sized>(&self, out: &mut O) {
        for line in &self.lines {
            out.write_line(line);
        }
        if let Some(err) = self.error() {
            out.write_error(&err.to_string());
        }
    }
}

/// The tree plus the current working directory.
pub struct Session {
    vfs: Box<dyn Vfs>,
    cwd: VfsPath,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tree::default_layout())
    }
}

impl Session {
    pub fn new(vfs: impl Vfs + 'static) -> Self {
        Self { vfs: Box::new(vfs), cwd: VfsPath::root() }
    }

    pub fn vfs(&self) -> &dyn Vfs {
        self.vfs.as_ref()
    }

    pub fn vfs_mut(&mut self) -> &mut dyn Vfs {
        self.vfs.as_mut()
    }

    pub fn cwd(&self) -> &VfsPath {
        &self.cwd
    }

    /// Callers must have checked that `cwd` names a directory.
    pub(crate) fn set_cwd(&mut self, cwd: VfsPath) {
        debug!("cwd {} -> {}", self.cwd, cwd);
        self.cwd = cwd;
    }

    /// Turn raw user input into an absolute path.
    pub fn path(&self, raw: &str) -> VfsPath {
        self.cwd.join(raw)
    }

    /// Run one line end to end. No error escapes; failures become
    /// [`Status::Failure`].
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        let mut lines = Vec::new();
        let result = tokenize(line.trim()).and_then(|tokens| registry::dispatch(self, &tokens, &mut lines));
        let status = match result {
            Ok(Flow::Continue) => Status::Success,
            Ok(Flow::Exit) => Status::Exit,
            Err(err) => {
                debug!("command failed: {err}");
                Status::Failure(err)
            }
        };
        Outcome { status, lines }
    }
}
