//! GPU descriptor line collection.
//!
//! Returns raw lines; the reporter keeps only the descriptor lines it prints.

use deckhand_core::ports::SystemProbeResult;
#[cfg(not(any(target_os = "macos", target_os = "linux")))]
use deckhand_core::ports::SystemProbeError;

#[cfg(target_os = "macos")]
pub fn gpu_descriptor_lines() -> SystemProbeResult<Vec<String>> {
    let output = super::commands::run_command("system_profiler", &["SPDisplaysDataType"])?;
    Ok(output.lines().map(str::to_string).collect())
}

/// Display controllers from `lspci`, followed by VRAM from `nvidia-smi`.
///
/// Fails only when neither source produced anything.
#[cfg(target_os = "linux")]
pub fn gpu_descriptor_lines() -> SystemProbeResult<Vec<String>> {
    use super::commands::run_command;
    use super::parse::{parse_lspci_display_controllers, parse_nvidia_vram};
    use tracing::debug;

    let pci = run_command("lspci", &["-vmm"]);
    let vram = run_command(
        "nvidia-smi",
        &["--query-gpu=memory.total", "--format=csv,noheader,nounits"],
    )
    .map(|out| parse_nvidia_vram(&out))
    .unwrap_or_else(|e| {
        debug!("No NVIDIA VRAM information: {e}");
        Vec::new()
    });

    match pci {
        Ok(output) => {
            let mut lines: Vec<String> = parse_lspci_display_controllers(&output)
                .iter()
                .flat_map(|c| c.descriptor_lines())
                .collect();
            lines.extend(vram);
            Ok(lines)
        }
        Err(_) if !vram.is_empty() => Ok(vram),
        Err(e) => Err(e),
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub fn gpu_descriptor_lines() -> SystemProbeResult<Vec<String>> {
    Err(SystemProbeError::UnsupportedPlatform(
        std::env::consts::OS.to_string(),
    ))
}
