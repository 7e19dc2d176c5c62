#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    Anchor, Annotation, Axis, Bars, Figure, FigureSize, Layer, Legend, LegendEntry,
    LegendMarker, LegendPosition, Orientation, Palette, Rgb, TableArtifact,
    TextStyle, Theme, Ticks, filter_gpu_lines, format_memory_gb, is_gpu_descriptor_line,
};
pub use paths::{
    DEFAULT_FIGURES_DIR, DEFAULT_TABLES_DIR, PathError, absolute_path, ensure_directory,
};
pub use ports::{
    ConversionError, ConversionErrorKind, ConvertedDocument, DocumentConverterPort,
    FigureRenderer, RenderError, SystemProbeError, SystemProbePort, SystemProbeResult,
};

// Silence unused dev-dependency warnings for crates only used by integration tests
#[cfg(test)]
use tempfile as _;
