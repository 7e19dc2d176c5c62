//! `plotters` implementation of [`FigureRenderer`].
//!
//! Figures are drawn on a bitmap sized from the figure's inches and the
//! theme's DPI. Sizes in the figure model are typographic points and are
//! converted to pixels here.
//!
//! Categorical axes get no automatic ticks; their labels are drawn next to
//! the axis at the labelled positions, without tick marks.

use std::path::Path;

use deckhand_core::{
    Anchor, Annotation, Axis, Bars, Figure, FigureRenderer, Layer, Legend, LegendMarker,
    LegendPosition, Orientation, RenderError, Rgb, Theme, Ticks,
};
use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, ChartContext, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Polygon, Rectangle, Text};
use plotters::prelude::DrawingBackend;
use plotters::series::LineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, FontDesc, FontFamily, FontStyle, RGBColor, TRANSPARENT};
use tracing::debug;

use super::fonts;

type Chart<'a, DB> = ChartContext<'a, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>;
type DrawResult<T, DB> = Result<T, DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

/// Approximate advance of one character relative to the font size.
const CHAR_WIDTH_EM: f64 = 0.6;

/// Renders figures to PNG with the bitmap backend.
#[derive(Debug)]
pub struct PlottersRenderer;

impl PlottersRenderer {
    /// Register the embedded fonts and create the renderer.
    pub fn new() -> Result<Self, RenderError> {
        fonts::ensure_registered()?;
        Ok(Self)
    }
}

impl FigureRenderer for PlottersRenderer {
    fn name(&self) -> &'static str {
        "plotters"
    }

    fn render(&self, figure: &Figure, theme: &Theme, path: &Path) -> Result<(), RenderError> {
        validate(figure)?;

        let (width, height) = figure.size.pixels(theme.dpi);
        debug!(
            "Rendering {} at {}x{} px to {}",
            figure.file_stem,
            width,
            height,
            path.display()
        );

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        draw_figure(&root, figure, theme).map_err(|e| RenderError::Backend(e.to_string()))?;
        root.present().map_err(|e| RenderError::Write {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// Reject figures whose per-item vectors disagree in length or whose axes are empty.
fn validate(figure: &Figure) -> Result<(), RenderError> {
    let invalid = |reason: String| RenderError::InvalidFigure {
        figure: figure.file_stem.clone(),
        reason,
    };

    for (name, (lo, hi)) in [("x", figure.x_range()), ("y", figure.y_range())] {
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(invalid(format!("{name} range {lo}..{hi} is empty")));
        }
    }

    for layer in &figure.layers {
        match layer {
            Layer::Bars(bars) => {
                if bars.colors.len() != bars.values.len() {
                    return Err(invalid("bar colours do not match bar values".into()));
                }
                if bars
                    .value_labels
                    .as_ref()
                    .is_some_and(|labels| labels.len() != bars.values.len())
                {
                    return Err(invalid("bar labels do not match bar values".into()));
                }
            }
            Layer::Points { points, colors, .. } if points.len() != colors.len() => {
                return Err(invalid("point colours do not match points".into()));
            }
            Layer::Band { x, lower, upper, .. }
                if x.len() != lower.len() || x.len() != upper.len() =>
            {
                return Err(invalid("band bounds do not match x values".into()));
            }
            _ => {}
        }
    }
    Ok(())
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    theme: &Theme,
) -> DrawResult<(), DB> {
    root.fill(&rgb(theme.background()))?;

    let (x0, x1) = figure.x_range();
    let (y0, y1) = figure.y_range();
    let title_style = font(theme, theme.title_size, FontStyle::Bold).color(&rgb(theme.title()));

    let mut chart = ChartBuilder::on(root)
        .margin(px(theme, 10.0))
        .caption(&figure.title, title_style)
        .x_label_area_size(x_label_area(&figure.x, theme))
        .y_label_area_size(y_label_area(&figure.y, theme))
        .build_cartesian_2d(x0..x1, y0..y1)?;

    draw_mesh(&mut chart, figure, theme)?;
    draw_labeled_ticks(root, &mut chart, figure, theme)?;

    for layer in &figure.layers {
        draw_layer(root, &mut chart, layer, theme)?;
    }

    if let Some(legend) = &figure.legend {
        draw_legend(&mut chart, legend, theme)?;
    }
    Ok(())
}

fn draw_mesh<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart<'a, DB>,
    figure: &Figure,
    theme: &Theme,
) -> DrawResult<(), DB> {
    let axis_color = rgb(theme.axis());
    let tick_style = font(theme, theme.font_size, FontStyle::Normal).color(&axis_color);
    let desc_style = font(theme, theme.label_size, FontStyle::Bold).color(&rgb(theme.text()));
    let formatter = |v: &f64| format_tick(*v);

    let mut mesh = chart.configure_mesh();
    mesh.axis_style(axis_color.stroke_width(stroke(theme, 0.8)))
        .label_style(tick_style)
        .axis_desc_style(desc_style)
        .bold_line_style(rgb(theme.grid).stroke_width(stroke(theme, 0.3)))
        .light_line_style(TRANSPARENT)
        .set_all_tick_mark_size(px(theme, 3.5))
        .x_label_formatter(&formatter)
        .y_label_formatter(&formatter);

    if !figure.grid {
        mesh.disable_mesh();
    }
    if matches!(figure.x.ticks, Ticks::Labeled(_)) {
        mesh.x_labels(0);
    }
    if matches!(figure.y.ticks, Ticks::Labeled(_)) {
        mesh.y_labels(0);
    }
    if let Some(label) = &figure.x.label {
        mesh.x_desc(label.as_str());
    }
    if let Some(label) = &figure.y.label {
        mesh.y_desc(label.as_str());
    }
    mesh.draw()
}

/// Draw the labels of categorical axes, and their grid lines when enabled.
fn draw_labeled_ticks<'a, DB: DrawingBackend + 'a>(
    root: &DrawingArea<DB, Shift>,
    chart: &mut Chart<'a, DB>,
    figure: &Figure,
    theme: &Theme,
) -> DrawResult<(), DB> {
    let (x0, x1) = figure.x_range();
    let (y0, y1) = figure.y_range();
    let style = font(theme, theme.font_size, FontStyle::Normal).color(&rgb(theme.axis()));
    let gap = px(theme, 4.0);
    let grid = rgb(theme.grid).stroke_width(stroke(theme, 0.3));

    if let Ticks::Labeled(ticks) = &figure.x.ticks {
        for (pos, label) in ticks {
            let (x, y) = chart.backend_coord(&(*pos, y0));
            root.draw(&Text::new(
                label.as_str(),
                (x, y + gap),
                style.pos(Pos::new(HPos::Center, VPos::Top)),
            ))?;
            if figure.grid {
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![(*pos, y0), (*pos, y1)],
                    grid,
                )))?;
            }
        }
    }

    if let Ticks::Labeled(ticks) = &figure.y.ticks {
        for (pos, label) in ticks {
            let (x, y) = chart.backend_coord(&(x0, *pos));
            root.draw(&Text::new(
                label.as_str(),
                (x - gap, y),
                style.pos(Pos::new(HPos::Right, VPos::Center)),
            ))?;
            if figure.grid {
                chart.draw_series(std::iter::once(PathElement::new(
                    vec![(x0, *pos), (x1, *pos)],
                    grid,
                )))?;
            }
        }
    }
    Ok(())
}

fn draw_layer<'a, DB: DrawingBackend + 'a>(
    root: &DrawingArea<DB, Shift>,
    chart: &mut Chart<'a, DB>,
    layer: &Layer,
    theme: &Theme,
) -> DrawResult<(), DB> {
    match layer {
        Layer::Bars(bars) => draw_bars(chart, bars, theme),
        Layer::Line {
            points,
            color,
            width_pt,
        } => {
            chart.draw_series(LineSeries::new(
                points.iter().copied(),
                rgb(*color).stroke_width(stroke(theme, *width_pt)),
            ))?;
            Ok(())
        }
        Layer::Area {
            points,
            color,
            alpha,
        } => {
            let (Some(first), Some(last)) = (points.first(), points.last()) else {
                return Ok(());
            };
            let mut outline = points.clone();
            outline.push((last.0, 0.0));
            outline.push((first.0, 0.0));
            chart.draw_series(std::iter::once(Polygon::new(
                outline,
                rgb(*color).mix(*alpha).filled(),
            )))?;
            Ok(())
        }
        Layer::Band {
            x,
            lower,
            upper,
            color,
            alpha,
        } => {
            let outline: Vec<(f64, f64)> = x
                .iter()
                .copied()
                .zip(upper.iter().copied())
                .chain(x.iter().copied().zip(lower.iter().copied()).rev())
                .collect();
            chart.draw_series(std::iter::once(Polygon::new(
                outline,
                rgb(*color).mix(*alpha).filled(),
            )))?;
            Ok(())
        }
        Layer::Points {
            points,
            colors,
            area_pt2,
            alpha,
        } => {
            // Marker area is the square of its diameter in points
            let radius = px(theme, area_pt2.sqrt() / 2.0);
            chart.draw_series(points.iter().zip(colors).map(|(&p, &c)| {
                Circle::new(p, radius, rgb(c).mix(*alpha).filled())
            }))?;
            Ok(())
        }
        Layer::Stems {
            points,
            color,
            width_pt,
        } => {
            let style = rgb(*color).stroke_width(stroke(theme, *width_pt));
            chart.draw_series(
                points
                    .iter()
                    .map(|&(x, y)| PathElement::new(vec![(0.0, y), (x, y)], style)),
            )?;
            Ok(())
        }
        Layer::Text { at, text, style } => {
            chart.draw_series(std::iter::once(Text::new(
                text.clone(),
                *at,
                label_style(theme, style),
            )))?;
            Ok(())
        }
        Layer::Annotation(annotation) => draw_annotation(root, chart, annotation, theme),
    }
}

fn draw_bars<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart<'a, DB>,
    bars: &Bars,
    theme: &Theme,
) -> DrawResult<(), DB> {
    let half = bars.width / 2.0;
    chart.draw_series(bars.values.iter().zip(&bars.colors).enumerate().map(
        |(i, (&value, &color))| {
            let center = i as f64;
            let corners = match bars.orientation {
                Orientation::Vertical => [(center - half, 0.0), (center + half, value)],
                Orientation::Horizontal => [(0.0, center - half), (value, center + half)],
            };
            Rectangle::new(corners, rgb(color).filled())
        },
    ))?;

    let Some(labels) = &bars.value_labels else {
        return Ok(());
    };
    let anchor = match bars.orientation {
        Orientation::Vertical => Anchor::Above,
        Orientation::Horizontal => Anchor::Right,
    };
    let style = label_style(
        theme,
        &deckhand_core::TextStyle::new(bars.label_color)
            .bold()
            .anchor(anchor),
    );
    chart.draw_series(labels.iter().zip(&bars.values).enumerate().map(
        |(i, (label, &value))| {
            let end = value + bars.label_offset;
            let at = match bars.orientation {
                Orientation::Vertical => (i as f64, end),
                Orientation::Horizontal => (end, i as f64),
            };
            Text::new(label.clone(), at, style.clone())
        },
    ))?;
    Ok(())
}

/// Text at `text_at` with an arrow ending at `target`.
fn draw_annotation<'a, DB: DrawingBackend + 'a>(
    root: &DrawingArea<DB, Shift>,
    chart: &mut Chart<'a, DB>,
    annotation: &Annotation,
    theme: &Theme,
) -> DrawResult<(), DB> {
    chart.draw_series(std::iter::once(Text::new(
        annotation.text.clone(),
        annotation.text_at,
        label_style(theme, &annotation.style),
    )))?;

    let from = chart.backend_coord(&annotation.text_at);
    let to = chart.backend_coord(&annotation.target);
    let dx = f64::from(to.0 - from.0);
    let dy = f64::from(to.1 - from.1);
    let length = dx.hypot(dy);
    if length < 1.0 {
        return Ok(());
    }
    let (ux, uy) = (dx / length, dy / length);
    let gap = theme.points_to_px(3.0).min(length / 4.0);
    let start = (
        from.0 + (ux * gap).round() as i32,
        from.1 + (uy * gap).round() as i32,
    );

    let style = rgb(annotation.style.color).stroke_width(stroke(theme, 1.0));
    root.draw(&PathElement::new(vec![start, to], style))?;

    let head = theme.points_to_px(6.0);
    for angle in [0.45_f64, -0.45] {
        let (sin, cos) = angle.sin_cos();
        let bx = -(ux * cos - uy * sin);
        let by = -(ux * sin + uy * cos);
        let wing = (
            to.0 + (bx * head).round() as i32,
            to.1 + (by * head).round() as i32,
        );
        root.draw(&PathElement::new(vec![to, wing], style))?;
    }
    Ok(())
}

fn draw_legend<'a, DB: DrawingBackend + 'a>(
    chart: &mut Chart<'a, DB>,
    legend: &Legend,
    theme: &Theme,
) -> DrawResult<(), DB> {
    let dot = px(theme, 4.0);
    let line_len = px(theme, 16.0);
    let line_width = stroke(theme, 2.0);

    for entry in &legend.entries {
        let color = rgb(entry.color);
        let anno = chart.draw_series(std::iter::empty::<Circle<(f64, f64), i32>>())?;
        anno.label(entry.label.as_str());
        match entry.marker {
            LegendMarker::Dot => {
                anno.legend(move |(x, y)| Circle::new((x + dot, y), dot, color.filled()));
            }
            LegendMarker::Line => {
                anno.legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + line_len, y)], color.stroke_width(line_width))
                });
            }
        }
    }

    let position = match legend.position {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
    };
    chart
        .configure_series_labels()
        .position(position)
        .margin(px(theme, 6.0))
        .legend_area_size(line_len + px(theme, 4.0))
        .border_style(TRANSPARENT)
        .background_style(TRANSPARENT)
        .label_font(font(theme, theme.legend_size, FontStyle::Normal).color(&rgb(theme.text())))
        .draw()
}

/// Vertical space below the plot: tick labels plus the axis description.
fn x_label_area(axis: &Axis, theme: &Theme) -> u32 {
    let ticks = theme.points_to_px(theme.font_size) * 2.0;
    let desc = axis
        .label
        .as_ref()
        .map_or(0.0, |_| theme.points_to_px(theme.label_size) * 1.8);
    (ticks + desc).ceil() as u32
}

/// Horizontal space left of the plot, sized from the widest tick label.
fn y_label_area(axis: &Axis, theme: &Theme) -> u32 {
    let widest = match &axis.ticks {
        Ticks::Labeled(ticks) => ticks
            .iter()
            .map(|(_, label)| label.chars().count())
            .max()
            .unwrap_or(0),
        Ticks::Auto => 5,
    };
    let tick_px = theme.points_to_px(theme.font_size);
    let ticks = (widest as f64).mul_add(tick_px * CHAR_WIDTH_EM, tick_px);
    let desc = axis
        .label
        .as_ref()
        .map_or(0.0, |_| theme.points_to_px(theme.label_size) * 1.8);
    (ticks + desc).ceil() as u32
}

fn label_style(
    theme: &Theme,
    style: &deckhand_core::TextStyle,
) -> plotters::style::TextStyle<'static> {
    let font_style = match (style.bold, style.italic) {
        (true, _) => FontStyle::Bold,
        (false, true) => FontStyle::Italic,
        (false, false) => FontStyle::Normal,
    };
    let pos = match style.anchor {
        Anchor::Above => Pos::new(HPos::Center, VPos::Bottom),
        Anchor::Below => Pos::new(HPos::Center, VPos::Top),
        Anchor::Right => Pos::new(HPos::Left, VPos::Center),
    };
    font(theme, style.size_pt.unwrap_or(theme.font_size), font_style)
        .color(&rgb(style.color))
        .pos(pos)
}

fn font(theme: &Theme, size_pt: f64, style: FontStyle) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, theme.points_to_px(size_pt), style)
}

const fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.r, color.g, color.b)
}

fn px(theme: &Theme, points: f64) -> i32 {
    theme.points_to_px(points).round() as i32
}

/// Line width in pixels, never thinner than one pixel.
fn stroke(theme: &Theme, points: f64) -> u32 {
    theme.points_to_px(points).round().max(1.0) as u32
}

/// Tick text without trailing zeros: `2015`, `0.5`, `12.25`.
fn format_tick(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
