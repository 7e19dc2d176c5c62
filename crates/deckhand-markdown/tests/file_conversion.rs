//! End-to-end tool calls against local `file://` documents.

use std::fs;

use deckhand_markdown::{
    CONVERT_TO_MARKDOWN, ConverterConfig, DefaultDocumentConverter, MarkdownTools,
    TRUNCATION_SUFFIX, tool_definitions,
};
use serde_json::json;
use url::Url;

fn tools() -> MarkdownTools {
    let converter = DefaultDocumentConverter::new(&ConverterConfig::default()).unwrap();
    MarkdownTools::new(converter)
}

#[tokio::test]
async fn html_file_is_converted_with_attribution() {
    let tmp = tempfile::tempdir().unwrap();
    let page = tmp.path().join("index.html");
    fs::write(
        &page,
        "<html><head><title>Notes</title><script>track()</script></head>\
         <body><h2>Agenda</h2><ul><li><a href=\"https://example.com\">Intro</a></li>\
         <li>Wrap-up</li></ul></body></html>",
    )
    .unwrap();
    let url = Url::from_file_path(&page).unwrap();

    let reply = tools().convert_to_markdown(url.as_str()).await;

    assert_eq!(
        reply,
        format!("# Content from: {url}\n\n## Agenda\n\n- [Intro](https://example.com)\n- Wrap-up")
    );
}

#[tokio::test]
async fn missing_file_reports_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let url = Url::from_file_path(tmp.path().join("gone.md")).unwrap();

    let reply = tools().convert_webpage(url.as_str()).await;

    assert!(reply.contains("not found (404 error)"));
    assert!(reply.contains(url.as_str()));
}

#[tokio::test]
async fn large_text_file_is_truncated() {
    let tmp = tempfile::tempdir().unwrap();
    let notes = tmp.path().join("notes.txt");
    fs::write(&notes, "x".repeat(25_000)).unwrap();
    let url = Url::from_file_path(&notes).unwrap();

    let reply = tools()
        .dispatch(CONVERT_TO_MARKDOWN, &json!({ "url": url.as_str() }))
        .await;

    let content = reply.strip_suffix(TRUNCATION_SUFFIX).unwrap();
    assert_eq!(content.chars().count(), 10_000);
}

#[tokio::test]
async fn unsupported_file_type_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let pdf = tmp.path().join("paper.pdf");
    fs::write(&pdf, "%PDF-1.7").unwrap();
    let url = Url::from_file_path(&pdf).unwrap();

    let reply = tools().extract_pdf_text(url.as_str()).await;

    assert_eq!(
        reply,
        format!("Error converting {url}: Unsupported content type '.pdf'")
    );
}

#[test]
fn definitions_serialize_for_hosts() {
    let defs: Vec<_> = tool_definitions().iter().map(|d| d.to_json()).collect();
    let text = serde_json::to_string(&defs).unwrap();
    assert!(text.contains("\"convert_webpage\""));
    assert!(text.contains("\"pdf_url\""));
}
