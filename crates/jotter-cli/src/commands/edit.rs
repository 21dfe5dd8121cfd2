use anyhow::Result;
use jotter_core::NoteName;

use crate::context::Context;
use crate::prompt;
use crate::services::editor::EditorService;

/// Open an existing note in the user's editor and wait for it to close.
pub fn handle(ctx: &Context, name: Option<String>) -> Result<()> {
    let raw = prompt::line_or_prompt(name.as_deref(), "Note name")?;
    let name = NoteName::new(raw)?;

    if !ctx.store().exists(&name) {
        eprintln!("Note '{}' not found.", name);
        std::process::exit(1);
    }

    let path = ctx.store().path_of(&name);
    EditorService::open_file(&path, ctx.config().editor.command.as_deref())
}
