//! Figure rendering capability.
//!
//! Whether figures can be drawn is decided once, before any figure is built,
//! and carried as an explicit value through the generator.

#[cfg(feature = "plotting")]
mod fonts;
#[cfg(feature = "plotting")]
mod plotters_renderer;

use std::fmt;

use deckhand_core::FigureRenderer;
use tracing::{debug, warn};

#[cfg(feature = "plotting")]
pub use plotters_renderer::PlottersRenderer;

/// Outcome of the one-time renderer capability check.
pub enum RendererAvailability {
    /// Figures are rendered with this renderer.
    Available(Box<dyn FigureRenderer>),
    /// Figures are skipped.
    Unavailable { reason: String },
}

impl RendererAvailability {
    /// Resolve the renderer compiled into this build.
    pub fn detect() -> Self {
        let availability = Self::detect_inner();
        match &availability {
            Self::Available(renderer) => debug!("Figure renderer: {}", renderer.name()),
            Self::Unavailable { reason } => warn!("Figure rendering unavailable: {reason}"),
        }
        availability
    }

    #[cfg(feature = "plotting")]
    fn detect_inner() -> Self {
        match PlottersRenderer::new() {
            Ok(renderer) => Self::Available(Box::new(renderer)),
            Err(e) => Self::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    #[cfg(not(feature = "plotting"))]
    fn detect_inner() -> Self {
        Self::Unavailable {
            reason: "built without the `plotting` feature".to_string(),
        }
    }

    /// Explicitly unavailable, e.g. when the user disabled rendering.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }
}

impl fmt::Debug for RendererAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(renderer) => f
                .debug_tuple("Available")
                .field(&renderer.name())
                .finish(),
            Self::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_matches_build_features() {
        let availability = RendererAvailability::detect();
        assert_eq!(availability.is_available(), cfg!(feature = "plotting"));
    }

    #[test]
    fn test_unavailable_debug_shows_reason() {
        let availability = RendererAvailability::unavailable("no backend");
        assert!(!availability.is_available());
        assert!(format!("{availability:?}").contains("no backend"));
    }
}
