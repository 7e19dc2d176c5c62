//! Document conversion handler.

use std::io::Write;

use anyhow::Result;
use deckhand_markdown::MarkdownTools;

use crate::commands::ConvertKind;

/// Run the selected tool operation and print its reply.
///
/// The reply is printed whether it holds content, guidance or an error
/// message; the tools never fail.
pub async fn execute<W: Write>(
    tools: &MarkdownTools,
    url: &str,
    kind: ConvertKind,
    out: &mut W,
) -> Result<()> {
    let reply = match kind {
        ConvertKind::Auto => tools.convert_to_markdown(url).await,
        ConvertKind::Webpage => tools.convert_webpage(url).await,
        ConvertKind::Pdf => tools.extract_pdf_text(url).await,
    };
    writeln!(out, "{reply}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand_markdown::{ConverterConfig, DefaultDocumentConverter};

    fn tools() -> MarkdownTools {
        MarkdownTools::new(DefaultDocumentConverter::new(&ConverterConfig::default()).unwrap())
    }

    async fn run(url: &str, kind: ConvertKind) -> String {
        let mut out = Vec::new();
        execute(&tools(), url, kind, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_empty_input_per_kind() {
        assert!(
            run("", ConvertKind::Auto)
                .await
                .starts_with("Please provide a URL to convert.")
        );
        assert_eq!(
            run("", ConvertKind::Webpage).await,
            "Please provide a webpage URL to convert.\n"
        );
        assert_eq!(
            run("", ConvertKind::Pdf).await,
            "Please provide a PDF URL to extract text from.\n"
        );
    }

    #[tokio::test]
    async fn test_local_file_is_converted() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("notes.md");
        std::fs::write(&path, "# Notes").unwrap();
        let url = format!("file://{}", path.display());

        let text = run(&url, ConvertKind::Auto).await;
        assert_eq!(text, format!("# Content from: {url}\n\n# Notes\n"));
    }
}
