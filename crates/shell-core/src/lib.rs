//! Command-execution core for the VFS shell.
//!
//! A line goes through [`tokenize`], the command [`registry`], and one of the
//! handlers in [`commands`]; [`Session::execute_line`] folds the result into an
//! [`Outcome`]. The [`controller`] loops decide what a failure means: the
//! interactive loop reports it and carries on, a script stops.

pub mod command;
pub mod commands;
pub mod controller;
mod error;
pub mod registry;
mod session;
mod tokenizer;

pub use command::{Arity, Command, CommandContext, Flow};
pub use controller::{
    run_interactive, run_script, run_script_file, InteractiveSummary, LineSource, Output, ScriptOutcome,
};
pub use error::{ErrorKind, ShellError, ShellResult};
pub use session::{Outcome, Session, Status};
pub use tokenizer::tokenize;

pub const GREETING: &str = "VFS shell started";
