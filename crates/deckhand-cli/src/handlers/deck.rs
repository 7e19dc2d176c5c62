//! Full deck asset build: figures, then tables.

use std::io::Write;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::handlers::{figures, tables};

pub fn execute<W: Write>(ctx: &CliContext, out: &mut W) -> Result<()> {
    figures::execute(ctx, out)?;
    writeln!(out)?;
    tables::execute(ctx, out)
}
