//! Figure and table generation with progress output.
//!
//! Progress lines go to the supplied writer (stdout in the CLI); diagnostics
//! go through `tracing`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use deckhand_core::{Theme, absolute_path, ensure_directory};
use tracing::{info, warn};

use crate::error::DeckError;
use crate::figures::FIGURES;
use crate::render::RendererAvailability;
use crate::tables::TABLES;

const SUMMARY_RULE: &str = "========================================";

/// What a generator run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Absolute output directory.
    pub output_dir: PathBuf,
    /// Files written, in generation order.
    pub written: Vec<PathBuf>,
    /// Artifacts that were announced but not produced.
    pub skipped: Vec<&'static str>,
}

impl GenerationReport {
    fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            written: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Notice printed once when figures cannot be rendered.
pub fn fallback_notice(reason: &str) -> String {
    format!("Plotting backend not available ({reason}) - figures will be skipped")
}

/// Render the eight deck figures into `dir`.
///
/// The directory is created when missing and existing images are
/// overwritten. When rendering is unavailable every figure is announced and
/// skipped, a single notice is printed and no file is written.
pub fn generate_figures<W: Write>(
    dir: &Path,
    theme: &Theme,
    renderer: &RendererAvailability,
    out: &mut W,
) -> Result<GenerationReport, DeckError> {
    ensure_directory(dir)?;
    let mut report = GenerationReport::new(absolute_path(dir)?);

    if let RendererAvailability::Unavailable { reason } = renderer {
        writeln!(out, "{}", fallback_notice(reason))?;
    }

    for def in &FIGURES {
        writeln!(out, "Generating Figure {}: {}...", def.number, def.description)?;

        match renderer {
            RendererAvailability::Available(renderer) => {
                let figure = def.build(&theme.palette);
                let path = dir.join(figure.file_name());
                renderer
                    .render(&figure, theme, &path)
                    .map_err(|source| DeckError::Render {
                        figure: def.file_stem,
                        source,
                    })?;
                info!("Wrote {}", path.display());
                report.written.push(path);
            }
            RendererAvailability::Unavailable { .. } => {
                report.skipped.push(def.file_stem);
            }
        }
    }

    let status = if report.skipped.is_empty() {
        "All figures generated successfully!"
    } else {
        warn!("{} figures skipped", report.skipped.len());
        "No figures generated"
    };
    write_summary(out, status, &report.output_dir)?;
    Ok(report)
}

/// Write the six LaTeX tables into `dir`, overwriting existing files.
pub fn generate_tables<W: Write>(dir: &Path, out: &mut W) -> Result<GenerationReport, DeckError> {
    ensure_directory(dir)?;
    let mut report = GenerationReport::new(absolute_path(dir)?);

    for table in &TABLES {
        writeln!(
            out,
            "Generating Table {}: {}...",
            table.number, table.description
        )?;
        let path = dir.join(table.file_name);
        fs::write(&path, table.content).map_err(|source| DeckError::WriteTable {
            path: path.clone(),
            source,
        })?;
        info!("Wrote {}", path.display());
        report.written.push(path);
    }

    write_summary(out, "All tables generated successfully!", &report.output_dir)?;
    Ok(report)
}

fn write_summary<W: Write>(out: &mut W, status: &str, dir: &Path) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{SUMMARY_RULE}")?;
    writeln!(out, "{status}")?;
    writeln!(out, "Output directory: {}", dir.display())?;
    writeln!(out, "{SUMMARY_RULE}")
}
