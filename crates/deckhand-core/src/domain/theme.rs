//! Deck theme: the shared colour palette and typography.
//!
//! The palette mirrors the Beamer theme of the presentation so that charts
//! blend into the slides. A `Theme` is built once at the entry point and
//! handed to every renderer call; nothing here is process-global.

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a colour from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Fixed mapping from palette names to colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub navy: Rgb,
    pub slate: Rgb,
    pub coral: Rgb,
    pub teal: Rgb,
    pub gold: Rgb,
    pub cream: Rgb,
    pub lightgray: Rgb,
    pub midgray: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            navy: Rgb::new(0x17, 0x25, 0x54),
            slate: Rgb::new(0x33, 0x41, 0x55),
            coral: Rgb::new(0xef, 0x76, 0x7a),
            teal: Rgb::new(0x2d, 0xd4, 0xbf),
            gold: Rgb::new(0xea, 0xb3, 0x08),
            cream: Rgb::new(0xfe, 0xfc, 0xf7),
            lightgray: Rgb::new(0xf1, 0xf5, 0xf9),
            midgray: Rgb::new(0x94, 0xa3, 0xb8),
        }
    }
}

/// Visual configuration shared by every figure.
///
/// Font sizes are in points; renderers scale them by `dpi / 72`.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    /// Colour of grid lines when a figure enables its grid.
    pub grid: Rgb,
    pub font_size: f64,
    pub title_size: f64,
    pub label_size: f64,
    pub legend_size: f64,
    /// Raster resolution used when saving figures.
    pub dpi: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            grid: Rgb::new(0xe2, 0xe8, 0xf0),
            font_size: 11.0,
            title_size: 14.0,
            label_size: 11.0,
            legend_size: 10.0,
            dpi: 300,
        }
    }
}

impl Theme {
    /// Override the output resolution.
    #[must_use]
    pub const fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Background of the figure and of the plotting area.
    pub const fn background(&self) -> Rgb {
        self.palette.cream
    }

    /// Colour of axis lines and tick labels.
    pub const fn axis(&self) -> Rgb {
        self.palette.midgray
    }

    /// Colour of axis descriptions and general text.
    pub const fn text(&self) -> Rgb {
        self.palette.slate
    }

    /// Colour of figure titles.
    pub const fn title(&self) -> Rgb {
        self.palette.navy
    }

    /// Convert a size in points to pixels at the theme resolution.
    pub fn points_to_px(&self, points: f64) -> f64 {
        points * f64::from(self.dpi) / 72.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_matches_beamer_hex_values() {
        let palette = Palette::default();
        assert_eq!(palette.navy, Rgb::new(0x17, 0x25, 0x54));
        assert_eq!(palette.slate, Rgb::new(0x33, 0x41, 0x55));
        assert_eq!(palette.coral, Rgb::new(0xef, 0x76, 0x7a));
        assert_eq!(palette.teal, Rgb::new(0x2d, 0xd4, 0xbf));
        assert_eq!(palette.gold, Rgb::new(0xea, 0xb3, 0x08));
        assert_eq!(palette.cream, Rgb::new(0xfe, 0xfc, 0xf7));
        assert_eq!(palette.lightgray, Rgb::new(0xf1, 0xf5, 0xf9));
        assert_eq!(palette.midgray, Rgb::new(0x94, 0xa3, 0xb8));
    }

    #[test]
    fn test_theme_roles_use_palette() {
        let theme = Theme::default();
        assert_eq!(theme.background(), theme.palette.cream);
        assert_eq!(theme.title(), theme.palette.navy);
    }

    #[test]
    fn test_points_to_px() {
        let theme = Theme::default().with_dpi(144);
        assert!((theme.points_to_px(11.0) - 22.0).abs() < f64::EPSILON);
    }
}
