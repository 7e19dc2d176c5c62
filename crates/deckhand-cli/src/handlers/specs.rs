//! System specification report.

use std::io::Write;

use anyhow::Result;
use deckhand_core::{SystemProbePort, filter_gpu_lines, format_memory_gb};
use tracing::debug;

const RULE: &str = "------------------------------";

/// Print total memory and GPU descriptor lines.
///
/// Probe failures are printed in place of the section they affect; the two
/// sections are independent. Only a failing `out` is an error.
pub fn execute<W: Write>(probe: &dyn SystemProbePort, out: &mut W) -> Result<()> {
    writeln!(out, "Checking system specifications...")?;
    writeln!(out, "{RULE}")?;

    match probe.total_memory_bytes() {
        Ok(bytes) => writeln!(out, "Total Memory: {} GB", format_memory_gb(bytes))?,
        Err(e) => {
            debug!("Memory probe failed: {e:?}");
            writeln!(out, "Could not retrieve memory info: {e}")?;
        }
    }

    writeln!(out, "{RULE}")?;

    match probe.gpu_descriptor_lines() {
        Ok(lines) => {
            for line in filter_gpu_lines(&lines) {
                writeln!(out, "{line}")?;
            }
        }
        Err(e) => {
            debug!("GPU probe failed: {e:?}");
            writeln!(out, "Could not retrieve GPU info: {e}")?;
        }
    }

    Ok(())
}
