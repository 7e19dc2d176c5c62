//! Pure domain types.

mod figure;
mod system;
mod table;
mod theme;

pub use figure::{
    Anchor, Annotation, Axis, Bars, Figure, FigureSize, Layer, Legend, LegendEntry, LegendMarker,
    LegendPosition, Orientation, TextStyle, Ticks,
};
pub use system::{GPU_DESCRIPTOR_KEYS, filter_gpu_lines, format_memory_gb, is_gpu_descriptor_line};
pub use table::TableArtifact;
pub use theme::{Palette, Rgb, Theme};
