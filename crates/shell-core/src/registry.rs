//! Command registry - static command registration and lookup.

use log::debug;

use crate::commands;
use crate::{Command, CommandContext, Flow, Session, ShellError, ShellResult};

/// Every command the shell understands, in the order `help` lists them.
static COMMANDS: &[&dyn Command] = &[
    &commands::LS,
    &commands::CD,
    &commands::HEAD,
    &commands::DATE,
    &commands::CP,
    &commands::RMDIR,
    &commands::CHMOD,
    &commands::HELP,
    &commands::EXIT,
];

pub fn find_command(name: &str) -> Option<&'static dyn Command> {
    COMMANDS.iter().copied().find(|cmd| cmd.name() == name)
}

pub fn all_commands() -> &'static [&'static dyn Command] {
    COMMANDS
}

/// Run one tokenized line. Empty input is a no-op.
pub fn dispatch(session: &mut Session, tokens: &[String], output: &mut Vec<String>) -> ShellResult<Flow> {
    let Some((name, args)) = tokens.split_first() else {
        return Ok(Flow::Continue);
    };
    let command = find_command(name).ok_or_else(|| ShellError::UnknownCommand(name.clone()))?;
    if !command.arity().accepts(args.len()) {
        return Err(ShellError::Usage(command.usage()));
    }

    debug!("dispatching {name} with {} argument(s)", args.len());
    command.execute(&mut CommandContext::new(session, args, output))
}
