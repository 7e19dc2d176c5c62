//! Embedded fonts for text rendering.
//!
//! The bitmap backend has no access to system fonts, so DejaVu Sans is
//! compiled in and registered under the `sans-serif` family.

use std::sync::OnceLock;

use deckhand_core::RenderError;
use plotters::style::{FontStyle, register_font};

const FAMILY: &str = "sans-serif";

static REGULAR: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");
static BOLD: &[u8] = include_bytes!("../../assets/DejaVuSans-Bold.ttf");
static OBLIQUE: &[u8] = include_bytes!("../../assets/DejaVuSans-Oblique.ttf");

static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();

/// Register the embedded fonts. Later calls return the first outcome.
pub fn ensure_registered() -> Result<(), RenderError> {
    REGISTERED
        .get_or_init(|| {
            [
                (FontStyle::Normal, REGULAR, "DejaVuSans"),
                (FontStyle::Bold, BOLD, "DejaVuSans-Bold"),
                (FontStyle::Italic, OBLIQUE, "DejaVuSans-Oblique"),
                (FontStyle::Oblique, OBLIQUE, "DejaVuSans-Oblique"),
            ]
            .into_iter()
            .try_for_each(|(style, bytes, name)| {
                register_font(FAMILY, style, bytes).map_err(|_| format!("{name} is not a valid font"))
            })
        })
        .clone()
        .map_err(RenderError::Font)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_is_idempotent() {
        ensure_registered().unwrap();
        ensure_registered().unwrap();
    }
}
