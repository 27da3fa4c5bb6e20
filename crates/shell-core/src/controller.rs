//! Interactive and scripted execution loops.
//!
//! Both loops feed lines to [`Session::execute_line`]; they differ only in
//! what a failed line means. Interactive input keeps going, a script stops at
//! the first failure.

use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use vfs::VfsPath;

use crate::{Session, ShellError, Status};

/// Where command output goes.
pub trait Output {
    fn write_line(&mut self, line: &str);

    /// Error reports. Defaults to the normal stream.
    fn write_error(&mut self, line: &str) {
        self.write_line(line);
    }
}

impl Output for Vec<String> {
    fn write_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// One line per prompt cycle. `Ok(None)` ends the session.
pub trait LineSource {
    fn read_line(&mut self, cwd: &VfsPath) -> io::Result<Option<String>>;
}

impl LineSource for VecDeque<String> {
    fn read_line(&mut self, _cwd: &VfsPath) -> io::Result<Option<String>> {
        Ok(self.pop_front())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractiveSummary {
    pub commands: usize,
    pub failures: usize,
    /// `exit` was typed, as opposed to the input running out.
    pub exited: bool,
}

pub fn run_interactive<S, O>(session: &mut Session, source: &mut S, out: &mut O) -> io::Result<InteractiveSummary>
where
    S: LineSource + ?Sized,
    O: Output + ?Sized,
{
    let mut summary = InteractiveSummary::default();
    while let Some(line) = source.read_line(session.cwd())? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let outcome = session.execute_line(line);
        summary.commands += 1;
        outcome.write_to(out);
        match outcome.status {
            Status::Success => {}
            Status::Failure(_) => summary.failures += 1,
            Status::Exit => {
                summary.exited = true;
                break;
            }
        }
    }
    Ok(summary)
}

/// How a script run ended. Line numbers count from 1 and include skipped lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOutcome {
    Completed { executed: usize },
    Exited { line: usize },
    Aborted { line: usize, error: ShellError },
    ReadFailed { line: usize, message: String },
}

impl ScriptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ScriptOutcome::Completed { .. } | ScriptOutcome::Exited { .. })
    }
}

pub fn run_script<R, O>(session: &mut Session, reader: R, out: &mut O) -> ScriptOutcome
where
    R: BufRead,
    O: Output + ?Sized,
{
    let mut executed = 0;
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("script read failed at line {number}: {err}");
                out.write_error(&format!("Script reading error: {err}"));
                return ScriptOutcome::ReadFailed { line: number, message: err.to_string() };
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        out.write_line(&format!("[Script:{number}] > {line}"));
        let outcome = session.execute_line(line);
        executed += 1;
        outcome.write_to(out);
        match outcome.status {
            Status::Success => {}
            Status::Exit => {
                info!("script exited at line {number}");
                return ScriptOutcome::Exited { line: number };
            }
            Status::Failure(error) => {
                warn!("script aborted at line {number}: {error}");
                out.write_error(&format!("Script stopped at line {number} due to error"));
                return ScriptOutcome::Aborted { line: number, error };
            }
        }
    }
    info!("script completed, {executed} command(s) executed");
    ScriptOutcome::Completed { executed }
}

/// Open `path` and run it as a script. The file is closed when this returns.
pub fn run_script_file<O: Output + ?Sized>(session: &mut Session, path: &Path, out: &mut O) -> io::Result<ScriptOutcome> {
    let file = File::open(path)?;
    info!("executing script {}", path.display());
    Ok(run_script(session, BufReader::new(file), out))
}
