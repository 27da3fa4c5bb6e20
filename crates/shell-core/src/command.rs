//! Command trait and context definitions.

use crate::Session;
use crate::ShellResult;

/// What the caller should do after a command succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Number of argument tokens a command accepts, checked before it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    min: usize,
    max: Option<usize>,
}

impl Arity {
    pub const NONE: Arity = Arity::exactly(0);

    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: Some(n) }
    }

    pub const fn range(min: usize, max: usize) -> Self {
        Self { min, max: Some(max) }
    }

    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub fn accepts(&self, count: usize) -> bool {
        count >= self.min && self.max.is_none_or(|max| count <= max)
    }
}

/// Everything a handler may touch while it runs.
pub struct CommandContext<'a> {
    pub session: &'a mut Session,
    /// Arguments after the command name.
    pub args: &'a [String],
    output: &'a mut Vec<String>,
}

impl<'a> CommandContext<'a> {
    pub fn new(session: &'a mut Session, args: &'a [String], output: &'a mut Vec<String>) -> Self {
        Self { session, args, output }
    }

    pub fn print(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }
}

/// Trait for implementing commands.
///
/// Commands are registered statically and looked up by name.
pub trait Command: Sync {
    fn name(&self) -> &'static str;

    /// Short description (shown in help list).
    fn description(&self) -> &'static str;

    /// One-line usage, also used as the message when arguments do not fit.
    fn usage(&self) -> &'static str;

    fn arity(&self) -> Arity {
        Arity::NONE
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> ShellResult<Flow>;
}
