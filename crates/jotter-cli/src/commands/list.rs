use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

use crate::context::Context;

/// List stored notes.
///
/// The default output is the human listing rendered by [`render`]. With
/// `--paths` each name carries its backing file, and with `--json` the
/// listing becomes a machine-readable array of name/path objects.
pub fn handle(ctx: &Context, json: bool, paths: bool) -> Result<()> {
    let names = ctx.store().list()?;

    if json {
        let entries: Vec<_> = names
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "path": note_path(ctx, name).display().to_string(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if paths && !names.is_empty() {
        println!("Available notes:");
        for name in &names {
            println!("  {} ({})", name, note_path(ctx, name).display());
        }
        return Ok(());
    }

    print!("{}", render(&names));
    Ok(())
}

/// Render the human listing: a fixed line for an empty store, otherwise a
/// header followed by one name per line.
fn render(names: &[String]) -> String {
    if names.is_empty() {
        return "No notes found.\n".to_string();
    }

    let mut out = String::from("Available notes:\n");
    for name in names {
        out.push_str("  ");
        out.push_str(name);
        out.push('\n');
    }
    out
}

fn note_path(ctx: &Context, stem: &str) -> PathBuf {
    ctx.store()
        .root()
        .join(format!("{}.{}", stem, ctx.store().extension()))
}
