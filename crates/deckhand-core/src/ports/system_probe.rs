//! System probe port for memory and GPU detection.
//!
//! This port abstracts active system probing (command execution, hardware detection)
//! from the core domain. Implementations live in adapters (e.g., deckhand-runtime).
//!
//! # Design Notes
//!
//! - Core owns the trait and error type (pure)
//! - Runtime owns the implementation (active probing via `Command::new`)
//! - CLI injects the probe via main.rs

use thiserror::Error;

/// Errors that can occur during system probing.
#[derive(Debug, Error)]
pub enum SystemProbeError {
    /// A probe command could not be started or exited unsuccessfully.
    #[error("Command '{command}' failed: {reason}")]
    CommandFailed { command: String, reason: String },

    /// A probe command ran but its output was not understood.
    #[error("Could not parse output of '{command}': {reason}")]
    ParseFailed { command: String, reason: String },

    /// System memory query failed.
    #[error("Memory query failed: {0}")]
    MemoryQueryFailed(String),

    /// The probe has no strategy for this operating system.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),
}

/// Result type for system probe operations.
pub type SystemProbeResult<T> = Result<T, SystemProbeError>;

/// Port for probing host memory and graphics hardware.
///
/// The two queries are independent: a failure of one must not prevent the
/// other from being attempted.
///
/// # Example
///
/// ```ignore
/// use deckhand_core::ports::SystemProbePort;
///
/// fn report(probe: &dyn SystemProbePort) {
///     let memory = probe.total_memory_bytes();
///     let gpu = probe.gpu_descriptor_lines();
///     // ...
/// }
/// ```
pub trait SystemProbePort: Send + Sync {
    /// Total physical memory in bytes.
    fn total_memory_bytes(&self) -> SystemProbeResult<u64>;

    /// Raw `Key: Value` lines describing the installed GPUs.
    ///
    /// Lines are returned unfiltered; callers pick the ones they report.
    fn gpu_descriptor_lines(&self) -> SystemProbeResult<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock implementation for testing.
    struct MockSystemProbe {
        memory: Option<u64>,
        gpu: Vec<String>,
    }

    impl SystemProbePort for MockSystemProbe {
        fn total_memory_bytes(&self) -> SystemProbeResult<u64> {
            self.memory
                .ok_or_else(|| SystemProbeError::MemoryQueryFailed("no reading".to_string()))
        }

        fn gpu_descriptor_lines(&self) -> SystemProbeResult<Vec<String>> {
            Ok(self.gpu.clone())
        }
    }

    #[test]
    fn test_mock_probe() {
        let probe = MockSystemProbe {
            memory: None,
            gpu: vec!["Chipset Model: Apple M1".to_string()],
        };

        let err = probe.total_memory_bytes().unwrap_err();
        assert_eq!(err.to_string(), "Memory query failed: no reading");
        assert_eq!(probe.gpu_descriptor_lines().unwrap().len(), 1);
    }

    #[test]
    fn test_command_failed_message_names_command() {
        let err = SystemProbeError::CommandFailed {
            command: "sysctl hw.memsize".to_string(),
            reason: "No such file or directory (os error 2)".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sysctl hw.memsize"));
        assert!(msg.contains("os error 2"));
    }
}
