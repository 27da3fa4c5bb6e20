use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use log::{info, warn};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use vfs_shell::shell_core::{run_interactive, run_script_file, LineSource, Output, ScriptOutcome, Session, GREETING};
use vfs_shell::vfs::VfsPath;

#[derive(Parser, Debug)]
#[command(name = "vfs-shell", version, about = "Shell over an in-memory virtual filesystem")]
struct Cli {
    /// Script to run before the interactive prompt
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// JSON tree image to load instead of the default layout
    #[arg(short, long, value_name = "FILE")]
    tree: Option<PathBuf>,

    /// Exit after the script instead of starting the prompt
    #[arg(short, long)]
    batch: bool,

    /// Do not color error lines
    #[arg(long)]
    no_color: bool,
}

struct Console;

impl Output for Console {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }

    fn write_error(&mut self, line: &str) {
        println!("{}", line.red());
    }
}

/// rustyline-backed prompt: `user@host:/cwd$ `.
struct Prompt {
    editor: DefaultEditor,
    user: String,
    host: String,
}

impl Prompt {
    fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("failed to initialise line editor")?;
        let user = std::env::var("USER").unwrap_or_else(|_| "user".to_string());
        let host = std::env::var("HOSTNAME").unwrap_or_else(|_| "localhost".to_string());
        Ok(Self { editor, user, host })
    }
}

impl LineSource for Prompt {
    fn read_line(&mut self, cwd: &VfsPath) -> io::Result<Option<String>> {
        let prompt = format!("{}@{}:{}$ ", self.user, self.host, cwd);
        match self.editor.readline(&prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to add history entry: {e}");
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("\nShutting down...");
                Ok(None)
            }
            Err(ReadlineError::Io(err)) => Err(err),
            Err(err) => Err(io::Error::other(err.to_string())),
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let tree = vfs_shell::open_tree(cli.tree.as_deref()).context("failed to build the tree")?;
    let mut session = Session::new(tree);
    let mut console = Console;

    println!("{}", "=".repeat(50));
    println!("{GREETING}");
    match &cli.tree {
        Some(path) => println!("Tree: {}", path.display()),
        None => println!("Tree: default layout"),
    }
    match &cli.script {
        Some(path) => println!("Script: {}", path.display()),
        None => println!("Script: not specified"),
    }
    println!("{}", "=".repeat(50));

    if let Some(script) = &cli.script {
        console.write_line(&format!("# Executing script: {}", script.display()));
        let outcome = run_script_file(&mut session, script, &mut console)
            .with_context(|| format!("failed to open script {}", script.display()))?;

        if let ScriptOutcome::Exited { .. } = outcome {
            return Ok(ExitCode::SUCCESS);
        }
        if cli.batch {
            return Ok(if outcome.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE });
        }
        if outcome.is_success() {
            println!("\n=== Script completed successfully, switching to interactive mode ===");
        } else {
            println!("\n=== Script execution failed, switching to interactive mode ===");
        }
    } else if cli.batch {
        return Ok(ExitCode::SUCCESS);
    }

    println!("\nInteractive mode. Type 'exit' to quit");
    let mut prompt = Prompt::new()?;
    let summary = run_interactive(&mut session, &mut prompt, &mut console).context("failed to read input")?;
    info!("session ended after {} command(s), {} failed", summary.commands, summary.failures);
    Ok(ExitCode::SUCCESS)
}
