//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `reqwest`, `plotters` or `sysinfo` types in any signature
//! - Failures are classified where they are observed and carried as typed
//!   errors; human-readable messages are produced at the boundary

pub mod document_converter;
pub mod figure_renderer;
pub mod system_probe;

pub use document_converter::{
    ConversionError, ConversionErrorKind, ConvertedDocument, DocumentConverterPort,
};
pub use figure_renderer::{FigureRenderer, RenderError};
pub use system_probe::{SystemProbeError, SystemProbePort, SystemProbeResult};
