use anyhow::Result;
use jotter_core::NoteName;

use crate::context::Context;
use crate::prompt;

/// Create a note from arguments, prompts, or piped stdin.
///
/// An existing note with the same name is overwritten without warning; the
/// latest write wins.
pub fn handle(ctx: &Context, name: Option<String>, content: Option<String>) -> Result<()> {
    let raw = prompt::line_or_prompt(name.as_deref(), "Note name")?;
    let name = NoteName::new(raw)?;
    let content = prompt::content_or_prompt(content.as_deref(), "Content")?;

    ctx.store().create(&name, &content)?;
    println!("Created note '{}'.", name);
    Ok(())
}
