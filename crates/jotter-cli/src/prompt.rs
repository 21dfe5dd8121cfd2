//! Console input adapter.
//!
//! Command handlers take structured parameters; this module fills in the
//! missing ones. On a terminal it prompts, on a pipe it reads stdin
//! silently, and an explicit argument always wins. No command handler
//! reads stdin directly.

use anyhow::Result;
use std::io::{self, BufRead, IsTerminal, Read, Write};

/// Resolve a single-line value: argument, terminal prompt, or one line of
/// piped stdin, in that order.
///
/// Prompted and piped values are trimmed of surrounding whitespace. An
/// explicit argument is taken verbatim.
pub fn line_or_prompt(arg: Option<&str>, label: &str) -> Result<String> {
    if let Some(value) = arg {
        return Ok(value.to_string());
    }

    if io::stdin().is_terminal() {
        print!("{}: ", label);
        io::stdout().flush()?;
    }

    let mut buffer = String::new();
    io::stdin().lock().read_line(&mut buffer)?;
    Ok(buffer.trim().to_string())
}

/// Resolve note content: argument, terminal prompt, or the rest of piped
/// stdin, in that order.
///
/// Unlike names, content keeps its interior and leading whitespace; only
/// one trailing newline is stripped (the one `echo` and heredocs append).
pub fn content_or_prompt(arg: Option<&str>, label: &str) -> Result<String> {
    if let Some(value) = arg {
        return Ok(value.to_string());
    }

    let mut buffer = String::new();
    if io::stdin().is_terminal() {
        print!("{}: ", label);
        io::stdout().flush()?;
        io::stdin().lock().read_line(&mut buffer)?;
    } else {
        io::stdin().lock().read_to_string(&mut buffer)?;
    }
    Ok(trim_line_ending(&buffer).to_string())
}

/// Strip at most one trailing newline (LF or CRLF)
fn trim_line_ending(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}
