use anyhow::Result;

use crate::context::Context;
use crate::prompt;

/// Find notes whose name or content contains the query, case-insensitively.
pub fn handle(ctx: &Context, query: Option<String>) -> Result<()> {
    let query = prompt::line_or_prompt(query.as_deref(), "Search query")?;
    let matches = ctx.store().search(&query)?;

    if matches.is_empty() {
        println!("No notes match '{}'.", query);
        return Ok(());
    }

    println!("Notes matching '{}':", query);
    for name in &matches {
        println!("  {}", name);
    }
    Ok(())
}
