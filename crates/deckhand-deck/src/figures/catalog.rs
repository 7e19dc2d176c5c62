//! The eight deck figures.
//!
//! Each builder owns its literal data; nothing is shared between figures
//! except the palette.

use deckhand_core::{
    Anchor, Annotation, Axis, Bars, Figure, FigureSize, Layer, LegendEntry, LegendPosition,
    Orientation, Palette, Rgb, TextStyle, Ticks,
};
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand::rngs::StdRng;

use super::numeric::{argmin, linear_fit, linspace};

const WIDE: FigureSize = FigureSize::new(7.0, 4.5);
const TALL: FigureSize = FigureSize::new(7.0, 5.0);
const SHORT: FigureSize = FigureSize::new(7.0, 4.0);

const SAMPLE_SEED: u64 = 123;
const SAMPLE_SIZE: usize = 80;
const PASSING_GRADE: f64 = 70.0;

fn percent_labels(values: &[f64]) -> Vec<String> {
    values.iter().map(|v| format!("{v}%")).collect()
}

fn plain_labels(values: &[f64]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Bar chart of the disciplines that make up data science.
pub fn ds_domains(palette: &Palette) -> Figure {
    let domains = ["Statistics", "Computer Science", "Domain Expertise", "Data Science"];
    let relevance = vec![85.0, 90.0, 75.0, 95.0];

    Figure::new("fig_ds_domains", "Core Pillars of Data Science", WIDE)
        .x_axis(Axis::new().ticks(Ticks::categories(&domains)))
        .y_axis(Axis::new().label("Relevance Score").range(0.0, 110.0))
        .layer(Layer::Bars(Bars {
            orientation: Orientation::Vertical,
            value_labels: Some(percent_labels(&relevance)),
            values: relevance,
            colors: vec![palette.slate, palette.slate, palette.slate, palette.coral],
            width: 0.6,
            label_offset: 2.0,
            label_color: palette.slate,
        }))
}

/// Exponential growth of global data volume, coloured by era.
pub fn data_growth(palette: &Palette) -> Figure {
    let points: Vec<(f64, f64)> = (2010..=2025)
        .map(|year| {
            let year = f64::from(year);
            (year, 2.0 * 1.4f64.powf(year - 2010.0))
        })
        .collect();
    let era_colors: Vec<Rgb> = points
        .iter()
        .map(|&(year, _)| {
            if year < 2015.0 {
                palette.slate
            } else if year < 2020.0 {
                palette.coral
            } else {
                palette.navy
            }
        })
        .collect();

    Figure::new("fig_data_growth", "Global Data Volume Growth", WIDE)
        .x_axis(Axis::new().label("Year"))
        .y_axis(Axis::new().label("Data Volume (ZB)"))
        .layer(Layer::Area {
            points: points.clone(),
            color: palette.teal,
            alpha: 0.3,
        })
        .layer(Layer::Line {
            points: points.clone(),
            color: palette.teal,
            width_pt: 2.0,
        })
        .layer(Layer::Points {
            points,
            colors: era_colors,
            area_pt2: 50.0,
            alpha: 1.0,
        })
        .legend(
            LegendPosition::UpperLeft,
            vec![
                LegendEntry::dot("Early Big Data", palette.slate),
                LegendEntry::dot("Cloud Era", palette.coral),
                LegendEntry::dot("AI Era", palette.navy),
            ],
        )
}

/// Share of project time spent in each workflow stage.
pub fn pipeline(palette: &Palette) -> Figure {
    let stages = ["Collection", "Cleaning", "Analysis", "Modeling", "Reporting"];
    let time_pct = vec![15.0, 40.0, 20.0, 15.0, 10.0];

    Figure::new("fig_pipeline", "Data Science Workflow", WIDE)
        .x_axis(Axis::new().ticks(Ticks::categories(&stages)))
        .y_axis(Axis::new().label("Time Spent (%)").range(0.0, 50.0))
        .layer(Layer::Bars(Bars {
            orientation: Orientation::Vertical,
            value_labels: Some(percent_labels(&time_pct)),
            values: time_pct,
            colors: vec![
                palette.navy,
                palette.coral,
                palette.teal,
                palette.gold,
                palette.slate,
            ],
            width: 0.65,
            label_offset: 1.0,
            label_color: palette.slate,
        }))
}

/// Descriptive to prescriptive analytics on a complexity/value plane.
pub fn analytics_types(palette: &Palette) -> Figure {
    let stages = [
        ("Descriptive", "What happened?", (1.0, 2.0), palette.slate),
        ("Diagnostic", "Why did it happen?", (2.0, 3.0), palette.teal),
        ("Predictive", "What will happen?", (3.0, 4.0), palette.coral),
        ("Prescriptive", "What should we do?", (4.0, 5.0), palette.navy),
    ];

    let low_high = |low: f64, high: f64| {
        Ticks::Labeled(vec![(low, "Low".to_string()), (high, "High".to_string())])
    };

    let mut figure = Figure::new("fig_analytics_types", "The Analytics Maturity Model", TALL)
        .x_axis(
            Axis::new()
                .label("Technical Complexity")
                .range(0.3, 4.7)
                .ticks(low_high(1.0, 4.0)),
        )
        .y_axis(
            Axis::new()
                .label("Business Value")
                .range(1.2, 5.8)
                .ticks(low_high(2.0, 5.0)),
        )
        .with_grid();

    for (name, question, (x, y), color) in stages {
        figure = figure
            .layer(Layer::Points {
                points: vec![(x, y)],
                colors: vec![color],
                area_pt2: 800.0,
                alpha: 0.85,
            })
            .layer(Layer::Text {
                at: (x, y + 0.45),
                text: name.to_string(),
                style: TextStyle::new(color).bold().size(10.0),
            })
            .layer(Layer::Text {
                at: (x, y - 0.45),
                text: question.to_string(),
                style: TextStyle::new(palette.midgray)
                    .italic()
                    .size(8.0)
                    .anchor(Anchor::Below),
            });
    }
    figure
}

/// Relative adoption of the three learning paradigms.
pub fn ml_categories(palette: &Palette) -> Figure {
    let categories = [
        "Reinforcement Learning",
        "Unsupervised Learning",
        "Supervised Learning",
    ];
    let adoption = vec![45.0, 78.0, 120.0];

    Figure::new("fig_ml_categories", "Machine Learning Paradigms", SHORT)
        .x_axis(Axis::new().label("Adoption Index").range(0.0, 145.0))
        .y_axis(Axis::new().ticks(Ticks::categories(&categories)))
        .layer(Layer::Bars(Bars {
            orientation: Orientation::Horizontal,
            value_labels: Some(plain_labels(&adoption)),
            values: adoption,
            colors: vec![palette.navy, palette.teal, palette.coral],
            width: 0.5,
            label_offset: 3.0,
            label_color: palette.slate,
        }))
}

/// Bias, variance and total error against model complexity.
pub fn bias_variance(palette: &Palette) -> Figure {
    let complexity = linspace(1.0, 10.0, 100);
    let bias_sq: Vec<f64> = complexity.iter().map(|c| 10.0 / c).collect();
    let variance: Vec<f64> = complexity.iter().map(|c| 0.1 * c.powf(1.8)).collect();
    let total: Vec<f64> = bias_sq
        .iter()
        .zip(&variance)
        .map(|(b, v)| b + v + 0.5)
        .collect();

    let curve = |ys: &[f64]| -> Vec<(f64, f64)> {
        complexity.iter().copied().zip(ys.iter().copied()).collect()
    };

    let mut figure = Figure::new("fig_bias_variance", "The Bias-Variance Tradeoff", TALL)
        .x_axis(Axis::new().label("Model Complexity"))
        .y_axis(Axis::new().label("Error"))
        .layer(Layer::Line {
            points: curve(&bias_sq),
            color: palette.teal,
            width_pt: 2.0,
        })
        .layer(Layer::Line {
            points: curve(&variance),
            color: palette.coral,
            width_pt: 2.0,
        })
        .layer(Layer::Line {
            points: curve(&total),
            color: palette.navy,
            width_pt: 2.0,
        })
        .legend(
            LegendPosition::UpperRight,
            vec![
                LegendEntry::line("Bias²", palette.teal),
                LegendEntry::line("Variance", palette.coral),
                LegendEntry::line("Total Error", palette.navy),
            ],
        );

    if let Some(best) = argmin(&total) {
        let optimum = (complexity[best], total[best]);
        figure = figure
            .layer(Layer::Points {
                points: vec![optimum],
                colors: vec![palette.gold],
                area_pt2: 100.0,
                alpha: 1.0,
            })
            .layer(Layer::Annotation(Annotation {
                text: "Optimal Complexity".to_string(),
                target: optimum,
                text_at: (optimum.0 + 1.5, optimum.1 + 1.0),
                style: TextStyle::new(palette.gold)
                    .bold()
                    .size(10.0)
                    .anchor(Anchor::Right),
            }));
    }
    figure
}

/// Lollipop chart of skill importance, least to most important.
pub fn skills(palette: &Palette) -> Figure {
    let skills = [
        ("Domain Knowledge", 70.0),
        ("Visualization", 72.0),
        ("Communication", 75.0),
        ("ML/AI", 80.0),
        ("Statistics", 85.0),
        ("Programming", 90.0),
        ("Data Wrangling", 95.0),
    ];
    let names: Vec<&str> = skills.iter().map(|(name, _)| *name).collect();
    let points: Vec<(f64, f64)> = skills
        .iter()
        .enumerate()
        .map(|(i, &(_, score))| (score, i as f64))
        .collect();

    let mut figure = Figure::new("fig_skills", "Essential Data Science Skills", WIDE)
        .x_axis(Axis::new().label("Importance Score").range(0.0, 110.0))
        .y_axis(Axis::new().ticks(Ticks::categories(&names)))
        .layer(Layer::Stems {
            points: points.clone(),
            color: palette.slate,
            width_pt: 2.0,
        })
        .layer(Layer::Points {
            colors: vec![palette.coral; points.len()],
            points: points.clone(),
            area_pt2: 100.0,
            alpha: 1.0,
        });

    for (score, y) in points {
        figure = figure.layer(Layer::Text {
            at: (score + 2.0, y),
            text: score.to_string(),
            style: TextStyle::new(palette.slate).bold().anchor(Anchor::Right),
        });
    }
    figure
}

/// Seeded study-hours sample with a fitted regression line.
pub fn sample_analysis(palette: &Palette) -> Figure {
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);
    let hours: Vec<f64> = (0..SAMPLE_SIZE)
        .map(|_| rng.gen_range(1.0..10.0))
        .collect();
    let grades: Vec<f64> = hours
        .iter()
        .map(|h| {
            let noise: f64 = rng.sample(StandardNormal);
            8.0f64.mul_add(noise, 5.0f64.mul_add(*h, 40.0)).clamp(30.0, 100.0)
        })
        .collect();

    let colors = grades
        .iter()
        .map(|&g| {
            if g >= PASSING_GRADE {
                palette.teal
            } else {
                palette.coral
            }
        })
        .collect();

    let mut figure = Figure::new(
        "fig_sample_analysis",
        "Study Hours vs. Exam Performance",
        TALL,
    )
    .x_axis(Axis::new().label("Weekly Study Hours"))
    .y_axis(Axis::new().label("Exam Score (%)"))
    .layer(Layer::Points {
        points: hours.iter().copied().zip(grades.iter().copied()).collect(),
        colors,
        area_pt2: 50.0,
        alpha: 0.7,
    })
    .legend(
        LegendPosition::LowerRight,
        vec![
            LegendEntry::dot("High (≥70)", palette.teal),
            LegendEntry::dot("Developing (<70)", palette.coral),
        ],
    );

    if let Some((slope, intercept)) = linear_fit(&hours, &grades) {
        let x_line = linspace(1.0, 10.0, 100);
        let fitted: Vec<f64> = x_line.iter().map(|x| slope.mul_add(*x, intercept)).collect();
        figure = figure
            .layer(Layer::Line {
                points: x_line.iter().copied().zip(fitted.iter().copied()).collect(),
                color: palette.navy,
                width_pt: 2.0,
            })
            .layer(Layer::Band {
                lower: fitted.iter().map(|y| y - 8.0).collect(),
                upper: fitted.iter().map(|y| y + 8.0).collect(),
                x: x_line,
                color: palette.navy,
                alpha: 0.1,
            });
    }
    figure
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ds_domains_highlights_data_science() {
        let palette = Palette::default();
        let fig = ds_domains(&palette);
        let Layer::Bars(bars) = &fig.layers[0] else {
            panic!("expected bars");
        };
        assert_eq!(bars.values, vec![85.0, 90.0, 75.0, 95.0]);
        assert_eq!(bars.colors[3], palette.coral);
        assert_eq!(bars.value_labels.as_ref().unwrap()[0], "85%");
        assert_eq!(fig.y_range(), (0.0, 110.0));
    }

    #[test]
    fn test_data_growth_eras() {
        let palette = Palette::default();
        let fig = data_growth(&palette);
        let Layer::Points { points, colors, .. } = &fig.layers[2] else {
            panic!("expected points");
        };
        assert_eq!(points.len(), 16);
        assert!((points[0].1 - 2.0).abs() < 1e-12);
        assert_eq!(colors[4], palette.slate); // 2014
        assert_eq!(colors[5], palette.coral); // 2015
        assert_eq!(colors[10], palette.navy); // 2020
        assert_eq!(fig.legend.as_ref().unwrap().position, LegendPosition::UpperLeft);
    }

    #[test]
    fn test_pipeline_percentages_sum_to_100() {
        let fig = pipeline(&Palette::default());
        let Layer::Bars(bars) = &fig.layers[0] else {
            panic!("expected bars");
        };
        assert!((bars.values.iter().sum::<f64>() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_analytics_axes_use_low_high_ticks() {
        let fig = analytics_types(&Palette::default());
        assert!(fig.grid);
        assert_eq!(
            fig.x.ticks,
            Ticks::Labeled(vec![(1.0, "Low".into()), (4.0, "High".into())])
        );
        // One bubble, one name and one question per stage
        assert_eq!(fig.layers.len(), 12);
    }

    #[test]
    fn test_bias_variance_optimum_is_interior() {
        let fig = bias_variance(&Palette::default());
        let annotation = fig
            .layers
            .iter()
            .find_map(|layer| match layer {
                Layer::Annotation(a) => Some(a),
                _ => None,
            })
            .unwrap();
        let (x, _) = annotation.target;
        // d/dc (10/c + 0.1 c^1.8) = 0 near c = 4.7
        assert!(x > 4.0 && x < 5.5, "optimum at {x}");
    }

    #[test]
    fn test_skills_sorted_ascending() {
        let fig = skills(&Palette::default());
        let Layer::Stems { points, .. } = &fig.layers[0] else {
            panic!("expected stems");
        };
        assert!(points.windows(2).all(|w| w[0].0 <= w[1].0));
        assert_eq!(points.last().unwrap().0, 95.0);
    }

    #[test]
    fn test_sample_analysis_is_reproducible() {
        let palette = Palette::default();
        let a = sample_analysis(&palette);
        let b = sample_analysis(&palette);
        assert_eq!(a, b);

        let Layer::Points { points, colors, .. } = &a.layers[0] else {
            panic!("expected points");
        };
        assert_eq!(points.len(), 80);
        for (&(hours, grade), &color) in points.iter().zip(colors) {
            assert!((1.0..10.0).contains(&hours));
            assert!((30.0..=100.0).contains(&grade));
            let expected = if grade >= 70.0 { palette.teal } else { palette.coral };
            assert_eq!(color, expected);
        }
    }
}
