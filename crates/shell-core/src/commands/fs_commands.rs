//! Filesystem commands.

use vfs::{Node, Permissions, VfsError, VfsPath};

use crate::{Arity, Command, CommandContext, Flow, ShellError, ShellResult};

const HEAD_DEFAULT_LINES: i64 = 10;

/// List directory contents.
pub static LS: LsCommand = LsCommand;

pub struct LsCommand;

fn long_entry(name: &str, node: &Node) -> String {
    match node {
        Node::Directory(dir) => format!("d{} {name}", dir.permissions),
        Node::File(file) => format!("f{} {name} {}b", file.permissions, file.declared_size),
    }
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn description(&self) -> &'static str {
        "List directory contents"
    }

    fn usage(&self) -> &'static str {
        "usage: ls [-l] [path]"
    }

    fn arity(&self) -> Arity {
        Arity::at_least(0)
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> ShellResult<Flow> {
        let args = ctx.args;
        let long = args.iter().any(|arg| arg == "-l");
        let mut paths = args.iter().filter(|arg| *arg != "-l");
        let target = match (paths.next(), paths.next()) {
            (None, _) => ctx.session.cwd().clone(),
            (Some(path), None) => ctx.session.path(path),
            (Some(_), Some(_)) => return Err(ShellError::Usage(self.usage())),
        };

        let dir = ctx.session.vfs().directory(&target)?;
        let items: Vec<String> = dir
            .entries()
            .map(|(name, node)| if long { long_entry(name, node) } else { name.to_string() })
            .collect();
        ctx.print(items.join(" "));
        Ok(Flow::Continue)
    }
}

/// Change directory.
pub static CD: CdCommand = CdCommand;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn description(&self) -> &'static str {
        "Change current working directory"
    }

    fn usage(&self) -> &'static str {
        "usage: cd <path>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> ShellResult<Flow> {
        let target = match ctx.args[0].as_str() {
            "/" => VfsPath::root(),
            ".." => ctx.session.cwd().parent().ok_or(ShellError::AlreadyAtRoot)?,
            raw => {
                let path = ctx.session.path(raw);
                ctx.session.vfs().directory(&path)?;
                path
            }
        };
        ctx.session.set_cwd(target);
        let line = format!("Current directory: {}", ctx.session.cwd());
        ctx.print(line);
        Ok(Flow::Continue)
    }
}

/// Print the first lines of a file.
pub static HEAD: HeadCommand = HeadCommand;

pub struct HeadCommand;

impl Command for HeadCommand {
    fn name(&self) -> &'static str {
        "head"
    }

    fn description(&self) -> &'static str {
        "Print the first lines of a file"
    }

    fn usage(&self) -> &'static str {
        "usage: head [-n count] <path>"
    }

    fn arity(&self) -> Arity {
        Arity::range(1, 3)
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> ShellResult<Flow> {
        let args = ctx.args;
        let mut count = HEAD_DEFAULT_LINES;
        let mut path = None;
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            if arg == "-n" {
                let raw = iter.next().ok_or(ShellError::Usage(self.usage()))?;
                count = raw.parse().map_err(|_| ShellError::InvalidCount(raw.clone()))?;
            } else if path.replace(arg.as_str()).is_some() {
                return Err(ShellError::Usage(self.usage()));
            }
        }
        let path = path.ok_or(ShellError::Usage(self.usage()))?;

        let file = ctx.session.vfs().file(&ctx.session.path(path))?;
        let text = String::from_utf8_lossy(file.content()).into_owned();
        // Negative counts print nothing.
        let take = usize::try_from(count).unwrap_or(0);
        for line in text.lines().take(take) {
            ctx.print(line);
        }
        Ok(Flow::Continue)
    }
}

/// Copy a file.
pub static CP: CpCommand = CpCommand;

pub struct CpCommand;

impl Command for CpCommand {
    fn name(&self) -> &'static str {
        "cp"
    }

    fn description(&self) -> &'static str {
        "Copy a file"
    }

    fn usage(&self) -> &'static str {
        "usage: cp <source> <destination>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(2)
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> ShellResult<Flow> {
        let src = ctx.session.path(&ctx.args[0]);
        let dst = ctx.session.path(&ctx.args[1]);
        ctx.session.vfs_mut().copy_file(&src, &dst)?;
        Ok(Flow::Continue)
    }
}

/// Remove an empty directory.
pub static RMDIR: RmdirCommand = RmdirCommand;

pub struct RmdirCommand;

impl Command for RmdirCommand {
    fn name(&self) -> &'static str {
        "rmdir"
    }

    fn description(&self) -> &'static str {
        "Remove an empty directory"
    }

    fn usage(&self) -> &'static str {
        "usage: rmdir <path>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(1)
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> ShellResult<Flow> {
        let path = ctx.session.path(&ctx.args[0]);
        if path.is_root() {
            return Err(VfsError::RootRemoval.into());
        }
        ctx.session.vfs_mut().remove_dir(&path)?;

        // Only an empty directory can go, so the cwd is at most the removed one.
        if ctx.session.cwd().starts_with(&path) {
            ctx.session.set_cwd(path.parent().unwrap_or_default());
        }
        Ok(Flow::Continue)
    }
}

/// Change permissions.
pub static CHMOD: ChmodCommand = ChmodCommand;

pub struct ChmodCommand;

impl Command for ChmodCommand {
    fn name(&self) -> &'static str {
        "chmod"
    }

    fn description(&self) -> &'static str {
        "Set the permissions of a file or directory"
    }

    fn usage(&self) -> &'static str {
        "usage: chmod <perm> <path>"
    }

    fn arity(&self) -> Arity {
        Arity::exactly(2)
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> ShellResult<Flow> {
        let perms: Permissions = ctx.args[0].parse()?;
        let path = ctx.session.path(&ctx.args[1]);
        ctx.session.vfs_mut().set_permissions(&path, perms)?;
        Ok(Flow::Continue)
    }
}
