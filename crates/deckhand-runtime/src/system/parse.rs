//! Parsers for probe command output.
//!
//! Kept free of process execution so they can be tested with captured output
//! on any host.

use deckhand_core::ports::{SystemProbeError, SystemProbeResult};

/// PCI class names that identify a display controller in `lspci -vmm` output.
const DISPLAY_CLASSES: [&str; 3] = ["VGA", "3D", "Display"];

/// Parse the output of `sysctl hw.memsize`, e.g. `hw.memsize: 17179869184`.
pub fn parse_sysctl_memsize(output: &str) -> SystemProbeResult<u64> {
    let parse_error = |reason: String| SystemProbeError::ParseFailed {
        command: "sysctl hw.memsize".to_string(),
        reason,
    };

    let (_, value) = output
        .trim()
        .split_once(':')
        .ok_or_else(|| parse_error(format!("no ':' in '{}'", output.trim())))?;

    value
        .trim()
        .parse::<u64>()
        .map_err(|e| parse_error(format!("'{}': {e}", value.trim())))
}

/// A display controller found by `lspci -vmm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayController {
    pub vendor: String,
    pub device: String,
}

impl DisplayController {
    /// Report lines in the same shape `system_profiler` uses on macOS.
    pub fn descriptor_lines(&self) -> [String; 2] {
        [
            format!("Chipset Model: {}", self.device),
            format!("Vendor: {}", self.vendor),
        ]
    }
}

/// Extract display controllers from `lspci -vmm` output.
///
/// Records are blank-line separated blocks of `Key:\tValue` pairs; only
/// records whose `Class` names a display controller are kept.
pub fn parse_lspci_display_controllers(output: &str) -> Vec<DisplayController> {
    let mut controllers = Vec::new();

    for record in output.split("\n\n") {
        let mut class = None;
        let mut vendor = None;
        let mut device = None;

        for line in record.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();
            match key.trim() {
                "Class" => class = Some(value),
                "Vendor" => vendor = Some(value),
                "Device" => device = Some(value),
                _ => {}
            }
        }

        if let (Some(class), Some(vendor), Some(device)) = (class, vendor, device)
            && DISPLAY_CLASSES.iter().any(|c| class.contains(c))
        {
            controllers.push(DisplayController {
                vendor: vendor.to_string(),
                device: device.to_string(),
            });
        }
    }

    controllers
}

/// Turn `nvidia-smi --query-gpu=memory.total --format=csv,noheader,nounits`
/// output into `VRAM (Total): <n> MB` lines, one per GPU.
pub fn parse_nvidia_vram(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| line.trim().parse::<u64>().ok())
        .map(|mib| format!("VRAM (Total): {mib} MB"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LSPCI_LAPTOP: &str = "Slot:\t00:00.0\nClass:\tHost bridge\nVendor:\tIntel Corporation\nDevice:\tXeon E3-1200 v6/7th Gen Core Processor Host Bridge/DRAM Registers\nSVendor:\tLenovo\nRev:\t08\n\nSlot:\t00:02.0\nClass:\tVGA compatible controller\nVendor:\tIntel Corporation\nDevice:\tUHD Graphics 620\nSVendor:\tLenovo\nRev:\t07\n\nSlot:\t01:00.0\nClass:\t3D controller\nVendor:\tNVIDIA Corporation\nDevice:\tGP108M [GeForce MX150]\nRev:\ta1\n";

    #[test]
    fn test_parse_sysctl_memsize() {
        assert_eq!(
            parse_sysctl_memsize("hw.memsize: 17179869184\n").unwrap(),
            17_179_869_184
        );
    }

    #[test]
    fn test_parse_sysctl_memsize_rejects_garbage() {
        assert!(matches!(
            parse_sysctl_memsize("hw.memsize"),
            Err(SystemProbeError::ParseFailed { .. })
        ));
        assert!(matches!(
            parse_sysctl_memsize("hw.memsize: lots"),
            Err(SystemProbeError::ParseFailed { .. })
        ));
    }

    #[test]
    fn test_lspci_keeps_display_classes_only() {
        let controllers = parse_lspci_display_controllers(LSPCI_LAPTOP);
        assert_eq!(controllers.len(), 2);
        assert_eq!(controllers[0].device, "UHD Graphics 620");
        assert_eq!(controllers[1].vendor, "NVIDIA Corporation");
    }

    #[test]
    fn test_descriptor_lines_pass_gpu_filter() {
        let controller = &parse_lspci_display_controllers(LSPCI_LAPTOP)[1];
        let lines = controller.descriptor_lines();
        assert_eq!(lines[0], "Chipset Model: GP108M [GeForce MX150]");
        assert_eq!(lines[1], "Vendor: NVIDIA Corporation");
        assert_eq!(deckhand_core::filter_gpu_lines(&lines).len(), 2);
    }

    #[test]
    fn test_lspci_without_display_controller() {
        let headless = "Slot:\t00:00.0\nClass:\tHost bridge\nVendor:\tIntel Corporation\nDevice:\t440FX\n";
        assert!(parse_lspci_display_controllers(headless).is_empty());
        assert!(parse_lspci_display_controllers("").is_empty());
    }

    #[test]
    fn test_parse_nvidia_vram() {
        assert_eq!(
            parse_nvidia_vram("8192\n24576\n"),
            vec!["VRAM (Total): 8192 MB", "VRAM (Total): 24576 MB"]
        );
        assert!(parse_nvidia_vram("[N/A]\n").is_empty());
    }
}
