//! CLI command handlers.

pub mod auth;
pub mod config;
pub mod vault;

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, Result};

/// Reads one line from stdin, prompting on stderr when interactive.
///
/// The prompt goes to stderr so stdout stays clean for scripting; piped
/// input gets no prompt at all.
pub(crate) fn read_line(prompt: &str) -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("{prompt}");
        std::io::stderr().flush().context("flush stderr")?;
    }

    let mut line = String::new();
    let read = stdin.lock().read_line(&mut line).context("read stdin")?;
    if read == 0 {
        anyhow::bail!("Unexpected end of input");
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Reads a password line; rejects empty input.
pub(crate) fn read_password(prompt: &str) -> Result<String> {
    let password = read_line(prompt)?;
    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }
    Ok(password)
}
