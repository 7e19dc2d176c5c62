#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

mod config;
mod error;
pub mod figures;
mod generate;
pub mod render;
pub mod tables;

pub use config::DeckConfig;
pub use error::DeckError;
pub use figures::{FIGURES, FigureDefinition};
pub use generate::{GenerationReport, fallback_notice, generate_figures, generate_tables};
pub use render::RendererAvailability;
#[cfg(feature = "plotting")]
pub use render::PlottersRenderer;
pub use tables::TABLES;
