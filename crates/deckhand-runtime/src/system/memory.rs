//! Total physical memory detection.

use deckhand_core::ports::{SystemProbeError, SystemProbeResult};
#[cfg(not(target_os = "macos"))]
use sysinfo::System;

/// Total physical memory in bytes, read from `sysctl` on macOS.
#[cfg(target_os = "macos")]
pub fn total_memory_bytes() -> SystemProbeResult<u64> {
    let output = super::commands::run_command("sysctl", &["hw.memsize"])?;
    let bytes = super::parse::parse_sysctl_memsize(&output)?;
    non_zero(bytes)
}

/// Total physical memory in bytes, read through `sysinfo`.
#[cfg(not(target_os = "macos"))]
pub fn total_memory_bytes() -> SystemProbeResult<u64> {
    let mut sys = System::new();
    sys.refresh_memory();
    non_zero(sys.total_memory())
}

fn non_zero(bytes: u64) -> SystemProbeResult<u64> {
    if bytes == 0 {
        return Err(SystemProbeError::MemoryQueryFailed(
            "reported total memory is 0 bytes".to_string(),
        ));
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_memory_is_reasonable() {
        // RAM should always be detected and be a reasonable value (> 256MB)
        let bytes = total_memory_bytes().unwrap();
        assert!(bytes > 256 * 1024 * 1024);
    }

    #[test]
    fn test_zero_reading_is_an_error() {
        assert!(matches!(
            non_zero(0),
            Err(SystemProbeError::MemoryQueryFailed(_))
        ));
        assert_eq!(non_zero(42).unwrap(), 42);
    }
}
