//! Formatting rules of the system specification report.

/// Substrings that mark a GPU descriptor line worth reporting.
pub const GPU_DESCRIPTOR_KEYS: [&str; 3] = ["Chipset Model", "VRAM", "Vendor"];

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Whether a raw GPU line names the model, the video memory or the vendor.
pub fn is_gpu_descriptor_line(line: &str) -> bool {
    GPU_DESCRIPTOR_KEYS.iter().any(|key| line.contains(key))
}

/// Keep the descriptor lines, trimmed, in their original order.
pub fn filter_gpu_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter(|line| is_gpu_descriptor_line(line.as_ref()))
        .map(|line| line.as_ref().trim().to_string())
        .collect()
}

/// Render a byte count as gigabytes (GiB) with two decimals.
pub fn format_memory_gb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / BYTES_PER_GIB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_gpu_lines_keeps_descriptors_only() {
        let raw = "Graphics/Displays:\n\n    Apple M2 Pro:\n\n      Chipset Model: Apple M2 Pro\n      Type: GPU\n      Bus: Built-In\n      Total Number of Cores: 19\n      Vendor: Apple (0x106b)\n      Metal Support: Metal 3\n";
        let lines = filter_gpu_lines(raw.lines());
        assert_eq!(
            lines,
            vec![
                "Chipset Model: Apple M2 Pro".to_string(),
                "Vendor: Apple (0x106b)".to_string()
            ]
        );
    }

    #[test]
    fn test_filter_gpu_lines_matches_vram_variants() {
        let lines = filter_gpu_lines(["  VRAM (Total): 8 GB  ", "  VRAM (Dynamic, Max): 1536 MB"]);
        assert_eq!(
            lines,
            vec!["VRAM (Total): 8 GB", "VRAM (Dynamic, Max): 1536 MB"]
        );
    }

    #[test]
    fn test_descriptor_match_is_case_sensitive() {
        assert!(!is_gpu_descriptor_line("vendor: lowercase"));
        assert!(is_gpu_descriptor_line("Vendor: NVIDIA"));
    }

    #[test]
    fn test_format_memory_gb() {
        assert_eq!(format_memory_gb(17_179_869_184), "16.00");
        assert_eq!(format_memory_gb(8 * 1024 * 1024 * 1024 + 512 * 1024 * 1024), "8.50");
        assert_eq!(format_memory_gb(0), "0.00");
    }
}
