//! System probe implementation for deckhand-runtime.
//!
//! This module provides the `DefaultSystemProbe` which implements
//! `SystemProbePort` from deckhand-core. It performs active system probing
//! via command execution and `sysinfo` queries.

mod commands;
mod gpu;
mod memory;
pub mod parse;

use deckhand_core::ports::{SystemProbePort, SystemProbeResult};

/// Default implementation of `SystemProbePort`.
///
/// This struct provides active system probing by executing commands
/// and querying hardware. It should be constructed in CLI's main.rs
/// and passed to the handler that prints the report.
///
/// # Example
///
/// ```ignore
/// use deckhand_runtime::system::DefaultSystemProbe;
/// use deckhand_core::ports::SystemProbePort;
///
/// let probe = DefaultSystemProbe::new();
/// let bytes = probe.total_memory_bytes()?;
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DefaultSystemProbe;

impl DefaultSystemProbe {
    /// Create a new default system probe.
    pub const fn new() -> Self {
        Self
    }
}

impl Default for DefaultSystemProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbePort for DefaultSystemProbe {
    fn total_memory_bytes(&self) -> SystemProbeResult<u64> {
        memory::total_memory_bytes()
    }

    fn gpu_descriptor_lines(&self) -> SystemProbeResult<Vec<String>> {
        gpu::gpu_descriptor_lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_is_object_safe() {
        let probe: Box<dyn SystemProbePort> = Box::new(DefaultSystemProbe::new());
        // Only the memory query is stable across CI hosts
        if cfg!(target_os = "linux") {
            assert!(probe.total_memory_bytes().unwrap() > 0);
        }
    }
}
