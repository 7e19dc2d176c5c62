//! Probe command execution.

use std::process::Command;

use deckhand_core::ports::{SystemProbeError, SystemProbeResult};
use tracing::debug;

/// Run `program` with `args` and return its standard output.
///
/// A missing binary or a non-zero exit status is reported as
/// [`SystemProbeError::CommandFailed`].
#[cfg_attr(not(unix), allow(dead_code))]
pub fn run_command(program: &str, args: &[&str]) -> SystemProbeResult<String> {
    let command = command_line(program, args);
    debug!(command = %command, "Running probe command");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| SystemProbeError::CommandFailed {
            command: command.clone(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let reason = match stderr.trim() {
            "" => format!("exited with {}", output.status),
            message => message.to_string(),
        };
        return Err(SystemProbeError::CommandFailed {
            command,
            reason,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

fn command_line(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
