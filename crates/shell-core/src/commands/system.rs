//! Session-level commands.

use chrono::Local;

use crate::{Command, CommandContext, Flow, ShellResult};

/// `ctime`-style layout: `Fri Oct 16 14:03:07 2026`.
pub const DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

pub static DATE: DateCommand = DateCommand;

pub struct DateCommand;

impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }

    fn description(&self) -> &'static str {
        "Print the current date and time"
    }

    fn usage(&self) -> &'static str {
        "usage: date"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> ShellResult<Flow> {
        ctx.print(Local::now().format(DATE_FORMAT).to_string());
        Ok(Flow::Continue)
    }
}

pub static EXIT: ExitCommand = ExitCommand;

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "End the session"
    }

    fn usage(&self) -> &'static str {
        "usage: exit"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> ShellResult<Flow> {
        Ok(Flow::Exit)
    }
}
