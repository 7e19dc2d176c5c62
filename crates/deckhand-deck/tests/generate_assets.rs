//! End-to-end generation into temporary directories.

use std::fs;

use deckhand_deck::{DeckConfig, RendererAvailability, generate_figures, generate_tables};

#[cfg(feature = "plotting")]
const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

#[cfg(feature = "plotting")]
#[test]
fn figures_render_eight_png_files() {
    let tmp = tempfile::tempdir().unwrap();
    // Low resolution keeps the test fast; layout scales with DPI
    let config = DeckConfig::new()
        .with_figures_dir(tmp.path().join("figures"))
        .with_dpi(40);
    let renderer = RendererAvailability::detect();
    assert!(renderer.is_available(), "{renderer:?}");

    let mut out = Vec::new();
    let report = generate_figures(&config.figures_dir, &config.theme, &renderer, &mut out).unwrap();

    assert_eq!(report.written.len(), 8);
    let mut names: Vec<String> = fs::read_dir(&config.figures_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "fig_analytics_types.png",
            "fig_bias_variance.png",
            "fig_data_growth.png",
            "fig_ds_domains.png",
            "fig_ml_categories.png",
            "fig_pipeline.png",
            "fig_sample_analysis.png",
            "fig_skills.png",
        ]
    );
    for path in &report.written {
        let bytes = fs::read(path).unwrap();
        assert!(bytes.starts_with(PNG_SIGNATURE), "{} is not a PNG", path.display());
    }
}

#[test]
fn figures_without_renderer_leave_directory_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("figures");
    let mut out = Vec::new();

    generate_figures(
        &dir,
        &DeckConfig::default().theme,
        &RendererAvailability::unavailable("disabled for test"),
        &mut out,
    )
    .unwrap();

    assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("disabled for test").count(), 1);
}

#[test]
fn tables_are_tabular_fragments() {
    let tmp = tempfile::tempdir().unwrap();
    let config = DeckConfig::new().with_tables_dir(tmp.path().join("tables"));

    let report = generate_tables(&config.tables_dir, &mut Vec::new()).unwrap();

    assert_eq!(report.written.len(), 6);
    for path in &report.written {
        assert_eq!(path.extension().unwrap(), "tex");
        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("\\begin{tabular}"));
        assert!(content.ends_with("\\end{tabular}"));
    }
}
