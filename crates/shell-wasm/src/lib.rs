use wasm_bindgen::prelude::*;

use shell_core::{run_script, ScriptOutcome, Session, GREETING};
use vfs::Tree;

#[wasm_bindgen]
pub fn init_shell() -> String {
    format!("{GREETING} (wasm)")
}

/// Run `source` as a script against a fresh default tree and return the
/// transcript, one line per output line, ending with a status line.
#[wasm_bindgen]
pub fn run_script_source(source: &str) -> String {
    let mut session = Session::new(Tree::default_layout());
    let mut transcript: Vec<String> = Vec::new();
    let status = match run_script(&mut session, source.as_bytes(), &mut transcript) {
        ScriptOutcome::Completed { executed } => format!("completed ({executed} command(s))"),
        ScriptOutcome::Exited { line } => format!("exited at line {line}"),
        ScriptOutcome::Aborted { line, .. } => format!("aborted at line {line}"),
        ScriptOutcome::ReadFailed { line, .. } => format!("read failed at line {line}"),
    };
    transcript.push(format!("== {status}"));
    transcript.join("\n")
}
