//! Table generation handler.

use std::io::Write;

use anyhow::Result;
use deckhand_deck::generate_tables;

use crate::bootstrap::CliContext;

/// Write the LaTeX tables into the configured directory.
pub fn execute<W: Write>(ctx: &CliContext, out: &mut W) -> Result<()> {
    generate_tables(ctx.config.tables_dir(), out)?;
    Ok(())
}
