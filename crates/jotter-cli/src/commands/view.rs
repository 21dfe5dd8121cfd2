use anyhow::Result;
use jotter_core::{NoteName, StoreError};

use crate::context::Context;
use crate::prompt;

/// Print a note's content under a delimited header.
///
/// A missing note is an expected outcome, not an internal error: it gets
/// the fixed not-found line on stderr and exit code 1.
pub fn handle(ctx: &Context, name: Option<String>) -> Result<()> {
    let raw = prompt::line_or_prompt(name.as_deref(), "Note name")?;
    let name = NoteName::new(raw)?;

    match ctx.store().read(&name) {
        Ok(content) => {
            print!("{}", render(&name, &content));
            Ok(())
        }
        Err(StoreError::NotFound(_)) => {
            eprintln!("Note '{}' not found.", name);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

/// Render a note for display: a blank separator line, `--- <name> ---`,
/// then the content followed by a newline.
fn render(name: &NoteName, content: &str) -> String {
    format!("\n--- {} ---\n{}\n", name, content)
}
