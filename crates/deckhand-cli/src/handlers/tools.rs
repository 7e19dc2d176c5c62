//! Tool definition listing.

use std::io::Write;

use anyhow::Result;
use deckhand_markdown::tool_definitions;
use serde_json::Value;

/// Print the conversion tool definitions as a JSON array.
pub fn execute<W: Write>(out: &mut W) -> Result<()> {
    let defs: Vec<Value> = tool_definitions().iter().map(|def| def.to_json()).collect();
    serde_json::to_writer_pretty(&mut *out, &defs)?;
    writeln!(out)?;
    Ok(())
}
