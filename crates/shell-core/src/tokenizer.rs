//! Command-line tokenizer.

use crate::{ShellError, ShellResult};

/// Split a line into argument tokens.
///
/// `'` and `"` open a quoted span that runs to the next matching quote; the
/// other quote character is literal inside it. Only the ASCII space separates
/// tokens.
pub fn tokenize(line: &str) -> ShellResult<Vec<String>> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match (quote, ch) {
            (None, '"' | '\'') => quote = Some(ch),
            (Some(open), _) if ch == open => quote = None,
            (None, ' ') => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if quote.is_some() {
        return Err(ShellError::Syntax("Unclosed quotes in command".into()));
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    Ok(tokens)
}
