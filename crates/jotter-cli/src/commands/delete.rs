use anyhow::Result;
use jotter_core::{NoteName, StoreError};

use crate::context::Context;
use crate::prompt;

/// Delete a note permanently. No confirmation, no undo.
pub fn handle(ctx: &Context, name: Option<String>) -> Result<()> {
    let raw = prompt::line_or_prompt(name.as_deref(), "Note name")?;
    let name = NoteName::new(raw)?;

    match ctx.store().delete(&name) {
        Ok(()) => {
            println!("Deleted note '{}'.", name);
            Ok(())
        }
        Err(StoreError::NotFound(_)) => {
            eprintln!("Note '{}' not found.", name);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
