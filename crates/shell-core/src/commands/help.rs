use crate::registry;
use crate::{Arity, Command, CommandContext, Flow, ShellError, ShellResult};

pub static HELP: HelpCommand = HelpCommand;

pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "List commands, or show usage for one"
    }

    fn usage(&self) -> &'static str {
        "usage: help [command]"
    }

    fn arity(&self) -> Arity {
        Arity::range(0, 1)
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> ShellResult<Flow> {
        if let Some(name) = ctx.args.first() {
            let cmd = registry::find_command(name).ok_or_else(|| ShellError::UnknownCommand(name.clone()))?;
            ctx.print(cmd.usage());
            return Ok(Flow::Continue);
        }
        for cmd in registry::all_commands() {
            ctx.print(format!("{:<8} {}", cmd.name(), cmd.description()));
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use crate::{registry, Session, Status};

    #[test]
    fn lists_every_command() {
        let mut session = Session::default();
        let outcome = session.execute_line("help");
        assert_eq!(outcome.lines.len(), registry::all_commands().len());
        assert!(outcome.lines[0].starts_with("ls "));
    }

    #[test]
    fn usage_for_one_command() {
        let mut session = Session::default();
        assert_eq!(session.execute_line("help chmod").lines, ["usage: chmod <perm> <path>"]);
        assert!(matches!(session.execute_line("help nope").status, Status::Failure(_)));
    }
}
