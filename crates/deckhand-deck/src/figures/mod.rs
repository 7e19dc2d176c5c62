//! Figure definitions for the deck.

mod catalog;
pub mod numeric;

use deckhand_core::{Figure, Palette};

/// One entry of the figure set: how to announce it and how to build it.
#[derive(Debug, Clone, Copy)]
pub struct FigureDefinition {
    /// Position in the generation order, starting at 1.
    pub number: u32,
    /// Short description used in progress output.
    pub description: &'static str,
    /// Output file name without extension.
    pub file_stem: &'static str,
    build: fn(&Palette) -> Figure,
}

impl FigureDefinition {
    /// Build the figure's data. Called only when a renderer will consume it.
    pub fn build(&self, palette: &Palette) -> Figure {
        (self.build)(palette)
    }

    /// File name of the rendered image.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.file_stem)
    }
}

/// The eight deck figures, in generation order.
pub const FIGURES: [FigureDefinition; 8] = [
    FigureDefinition {
        number: 1,
        description: "Data Science domains",
        file_stem: "fig_ds_domains",
        build: catalog::ds_domains,
    },
    FigureDefinition {
        number: 2,
        description: "Data growth timeline",
        file_stem: "fig_data_growth",
        build: catalog::data_growth,
    },
    FigureDefinition {
        number: 3,
        description: "Data science pipeline",
        file_stem: "fig_pipeline",
        build: catalog::pipeline,
    },
    FigureDefinition {
        number: 4,
        description: "Analytics types",
        file_stem: "fig_analytics_types",
        build: catalog::analytics_types,
    },
    FigureDefinition {
        number: 5,
        description: "ML categories",
        file_stem: "fig_ml_categories",
        build: catalog::ml_categories,
    },
    FigureDefinition {
        number: 6,
        description: "Bias-variance tradeoff",
        file_stem: "fig_bias_variance",
        build: catalog::bias_variance,
    },
    FigureDefinition {
        number: 7,
        description: "Data scientist skills",
        file_stem: "fig_skills",
        build: catalog::skills,
    },
    FigureDefinition {
        number: 8,
        description: "Sample analysis visualization",
        file_stem: "fig_sample_analysis",
        build: catalog::sample_analysis,
    },
];
