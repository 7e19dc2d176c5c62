//! Renderer-independent description of a chart.
//!
//! Figure procedures build a [`Figure`] from literal data; a
//! [`FigureRenderer`](crate::ports::FigureRenderer) turns it into an image.
//! Everything is expressed in data coordinates except sizes, which are in
//! typographic points so they scale with the output resolution.
//!
//! Categorical axes are plain numeric axes: category `i` sits at position
//! `i as f64` and the axis carries [`Ticks::Labeled`] entries naming them.

use super::theme::Rgb;

/// Relative padding added on each side of an automatically sized axis.
const AUTO_RANGE_PADDING: f64 = 0.05;

/// Figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl FigureSize {
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    /// Pixel dimensions at the given resolution.
    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        let dpi = f64::from(dpi);
        (
            (self.width_in * dpi).round().max(1.0) as u32,
            (self.height_in * dpi).round().max(1.0) as u32,
        )
    }
}

/// Tick policy of an axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Ticks {
    /// Let the renderer choose numeric ticks.
    #[default]
    Auto,
    /// Only the listed positions, shown with the given labels and no tick marks.
    Labeled(Vec<(f64, String)>),
}

impl Ticks {
    /// Label positions `0, 1, 2, ...` with the given category names.
    pub fn categories<S: AsRef<str>>(names: &[S]) -> Self {
        Self::Labeled(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| (i as f64, name.as_ref().to_string()))
                .collect(),
        )
    }
}

/// One axis of a figure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Axis {
    pub label: Option<String>,
    /// Explicit limits; `None` sizes the axis from the data.
    pub range: Option<(f64, f64)>,
    pub ticks: Ticks,
}

impl Axis {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    #[must_use]
    pub fn ticks(mut self, ticks: Ticks) -> Self {
        self.ticks = ticks;
        self
    }
}

/// Bar direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Bars grow upwards from the x axis.
    Vertical,
    /// Bars grow rightwards from the y axis.
    Horizontal,
}

/// A bar series. Bar `i` is centred on category position `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bars {
    pub orientation: Orientation,
    pub values: Vec<f64>,
    /// One colour per bar.
    pub colors: Vec<Rgb>,
    /// Bar thickness in category units.
    pub width: f64,
    /// Text drawn just past the end of each bar.
    pub value_labels: Option<Vec<String>>,
    /// Gap between the bar end and its label, in data units.
    pub label_offset: f64,
    pub label_color: Rgb,
}

/// Where a text label sits relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Text is centred horizontally and drawn above the point.
    #[default]
    Above,
    /// Text is centred horizontally and drawn below the point.
    Below,
    /// Text starts at the point and is centred vertically.
    Right,
}

/// Style of a free text label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Rgb,
    /// Size in points; `None` uses the theme's base font size.
    pub size_pt: Option<f64>,
    pub bold: bool,
    pub italic: bool,
    pub anchor: Anchor,
}

impl TextStyle {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            size_pt: None,
            bold: false,
            italic: false,
            anchor: Anchor::Above,
        }
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub const fn size(mut self, size_pt: f64) -> Self {
        self.size_pt = Some(size_pt);
        self
    }

    #[must_use]
    pub const fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }
}

/// Text with an arrow pointing at a data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    /// Point the arrow head touches.
    pub target: (f64, f64),
    /// Position of the text; the arrow starts here.
    pub text_at: (f64, f64),
    pub style: TextStyle,
}

/// A drawable element of a figure.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Bars(Bars),
    /// Polyline through the points.
    Line {
        points: Vec<(f64, f64)>,
        color: Rgb,
        width_pt: f64,
    },
    /// Region between the curve and `y = 0`.
    Area {
        points: Vec<(f64, f64)>,
        color: Rgb,
        alpha: f64,
    },
    /// Region between two curves sharing the same x values.
    Band {
        x: Vec<f64>,
        lower: Vec<f64>,
        upper: Vec<f64>,
        color: Rgb,
        alpha: f64,
    },
    /// Scatter markers. `colors` holds one colour per point.
    Points {
        points: Vec<(f64, f64)>,
        colors: Vec<Rgb>,
        /// Marker area in square points.
        area_pt2: f64,
        alpha: f64,
    },
    /// Horizontal segments from `x = 0` to each point.
    Stems {
        points: Vec<(f64, f64)>,
        color: Rgb,
        width_pt: f64,
    },
    Text {
        at: (f64, f64),
        text: String,
        style: TextStyle,
    },
    Annotation(Annotation),
}

impl Layer {
    /// Data extent `(x_min, x_max, y_min, y_max)` this layer needs to be visible.
    ///
    /// Text and annotations do not widen an automatic axis.
    fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let points: Vec<(f64, f64)> = match self {
            Self::Bars(bars) => bars
                .values
                .iter()
                .enumerate()
                .flat_map(|(i, &value)| {
                    let lo = i as f64 - bars.width / 2.0;
                    let hi = i as f64 + bars.width / 2.0;
                    match bars.orientation {
                        Orientation::Vertical => [(lo, 0.0), (hi, value)],
                        Orientation::Horizontal => [(0.0, lo), (value, hi)],
                    }
                })
                .collect(),
            Self::Line { points, .. } | Self::Points { points, .. } => points.clone(),
            Self::Area { points, .. } => points
                .iter()
                .flat_map(|&(x, y)| [(x, 0.0), (x, y)])
                .collect(),
            Self::Band { x, lower, upper, .. } => x
                .iter()
                .zip(lower.iter().zip(upper))
                .flat_map(|(&x, (&lo, &hi))| [(x, lo), (x, hi)])
                .collect(),
            Self::Stems { points, .. } => points
                .iter()
                .flat_map(|&(x, y)| [(0.0, y), (x, y)])
                .collect(),
            Self::Text { .. } | Self::Annotation(_) => Vec::new(),
        };

        points.into_iter().fold(None, |acc, (x, y)| {
            Some(match acc {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            })
        })
    }
}

/// Legend marker shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendMarker {
    Dot,
    Line,
}

/// Corner of the plotting area holding the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerRight,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
    pub marker: LegendMarker,
}

impl LegendEntry {
    pub fn dot(label: impl Into<String>, color: Rgb) -> Self {
        Self {
            label: label.into(),
            color,
            marker: LegendMarker::Dot,
        }
    }

    pub fn line(label: impl Into<String>, color: Rgb) -> Self {
        Self {
            label: label.into(),
            color,
            marker: LegendMarker::Line,
        }
    }
}

/// Frameless legend.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub position: LegendPosition,
    pub entries: Vec<LegendEntry>,
}

/// A complete chart ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Output file name without extension, e.g. `fig_pipeline`.
    pub file_stem: String,
    pub title: String,
    pub size: FigureSize,
    pub x: Axis,
    pub y: Axis,
    /// Draw light grid lines behind the data.
    pub grid: bool,
    pub layers: Vec<Layer>,
    pub legend: Option<Legend>,
}

impl Figure {
    pub fn new(file_stem: impl Into<String>, title: impl Into<String>, size: FigureSize) -> Self {
        Self {
            file_stem: file_stem.into(),
            title: title.into(),
            size,
            x: Axis::new(),
            y: Axis::new(),
            grid: false,
            layers: Vec::new(),
            legend: None,
        }
    }

    #[must_use]
    pub fn x_axis(mut self, axis: Axis) -> Self {
        self.x = axis;
        self
    }

    #[must_use]
    pub fn y_axis(mut self, axis: Axis) -> Self {
        self.y = axis;
        self
    }

    #[must_use]
    pub const fn with_grid(mut self) -> Self {
        self.grid = true;
        self
    }

    #[must_use]
    pub fn layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    #[must_use]
    pub fn legend(mut self, position: LegendPosition, entries: Vec<LegendEntry>) -> Self {
        self.legend = Some(Legend { position, entries });
        self
    }

    /// File name of the rendered image.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.file_stem)
    }

    /// Combined extent of all layers, if any layer has data.
    pub fn data_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.layers
            .iter()
            .filter_map(Layer::bounds)
            .reduce(|(ax0, ax1, ay0, ay1), (bx0, bx1, by0, by1)| {
                (ax0.min(bx0), ax1.max(bx1), ay0.min(by0), ay1.max(by1))
            })
    }

    /// X limits: the explicit range, or the padded data extent.
    pub fn x_range(&self) -> (f64, f64) {
        self.x.range.unwrap_or_else(|| {
            let (lo, hi) = self
                .data_bounds()
                .map_or((0.0, 1.0), |(x0, x1, _, _)| (x0, x1));
            pad_range(lo, hi)
        })
    }

    /// Y limits: the explicit range, or the padded data extent.
    pub fn y_range(&self) -> (f64, f64) {
        self.y.range.unwrap_or_else(|| {
            let (lo, hi) = self
                .data_bounds()
                .map_or((0.0, 1.0), |(_, _, y0, y1)| (y0, y1));
            pad_range(lo, hi)
        })
    }
}

fn pad_range(lo: f64, hi: f64) -> (f64, f64) {
    let span = hi - lo;
    if span.abs() < f64::EPSILON {
        return (lo - 0.5, hi + 0.5);
    }
    (lo - span * AUTO_RANGE_PADDING, hi + span * AUTO_RANGE_PADDING)
}
