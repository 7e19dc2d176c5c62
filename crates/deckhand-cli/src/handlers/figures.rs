//! Figure generation handler.

use std::io::Write;

use anyhow::Result;
use deckhand_deck::generate_figures;

use crate::bootstrap::CliContext;

/// Render the deck figures into the configured directory.
pub fn execute<W: Write>(ctx: &CliContext, out: &mut W) -> Result<()> {
    generate_figures(
        ctx.config.figures_dir(),
        &ctx.config.deck.theme,
        &ctx.renderer,
        out,
    )?;
    Ok(())
}
