//! HTML to markdown rendering.
//!
//! Walks the parsed DOM once. Block elements are separated by blank lines,
//! runs of whitespace in text collapse to a single space, and elements that
//! carry no readable content (scripts, styles, the document head) are
//! dropped.

use deckhand_core::ConvertedDocument;
use scraper::{ElementRef, Html, Node};

/// Elements whose subtree never contributes text.
const SKIPPED: &[&str] = &["script", "style", "noscript", "template", "svg", "head"];

/// Convert an HTML document into markdown, taking the title from `<title>`.
pub fn html_to_markdown(html: &str) -> ConvertedDocument {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let body = root
        .child_elements()
        .find(|el| el.value().name() == "body")
        .unwrap_or(root);
    let doc = ConvertedDocument::new(render_blocks(body));

    match document_title(root) {
        Some(title) => doc.with_title(title),
        None => doc,
    }
}

fn document_title(root: ElementRef<'_>) -> Option<String> {
    root.descendent_elements()
        .find(|el| el.value().name() == "title")
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .filter(|title| !title.is_empty())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render the children of `el` as a sequence of markdown blocks.
fn render_blocks(el: ElementRef<'_>) -> String {
    let mut writer = Writer::default();
    writer.children(el);
    writer.finish()
}

/// Render the children of `el` as a single line, keeping edge whitespace.
fn render_inline(el: ElementRef<'_>) -> String {
    let mut writer = Writer::default();
    writer.children(el);
    let raw = writer.out;
    let lead = if raw.starts_with(char::is_whitespace) { " " } else { "" };
    let trail = if raw.ends_with(char::is_whitespace) { " " } else { "" };
    let core = collapse_whitespace(&raw);
    if core.is_empty() {
        return lead.to_string();
    }
    format!("{lead}{core}{trail}")
}

#[derive(Default)]
struct Writer {
    out: String,
}

impl Writer {
    fn children(&mut self, el: ElementRef<'_>) {
        for child in el.children() {
            if let Some(child_el) = ElementRef::wrap(child) {
                self.element(child_el);
            } else if let Node::Text(text) = child.value() {
                self.text(text);
            }
        }
    }

    fn element(&mut self, el: ElementRef<'_>) {
        let name = el.value().name();
        if SKIPPED.contains(&name) {
            return;
        }

        match name {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
                let level = usize::from(name.as_bytes()[1] - b'0');
                let text = render_inline(el);
                let text = text.trim();
                if !text.is_empty() {
                    self.block(&format!("{} {text}", "#".repeat(level)));
                }
            }
            "p" | "div" | "section" | "article" | "main" | "header" | "footer" | "nav"
            | "aside" | "figure" | "figcaption" | "form" | "details" | "summary" | "dl"
            | "dt" | "dd" | "address" | "li" => {
                self.paragraph_break();
                self.children(el);
                self.paragraph_break();
            }
            "br" => {
                self.trim_trailing_spaces();
                self.out.push('\n');
            }
            "hr" => self.block("---"),
            "strong" | "b" => self.wrap_inline(el, "**"),
            "em" | "i" => self.wrap_inline(el, "*"),
            "del" | "s" | "strike" => self.wrap_inline(el, "~~"),
            "code" | "kbd" | "samp" => {
                let code: String = el.text().collect();
                if !code.is_empty() {
                    self.out.push('`');
                    self.out.push_str(code.trim());
                    self.out.push('`');
                }
            }
            "pre" => self.code_block(el),
            "a" => self.link(el),
            "img" => self.image(el),
            "ul" => self.list(el, false),
            "ol" => self.list(el, true),
            "blockquote" => self.blockquote(el),
            "table" => self.table(el),
            _ => self.children(el),
        }
    }

    fn text(&mut self, text: &str) {
        for c in text.chars() {
            if c.is_whitespace() {
                if !self.out.is_empty() && !self.out.ends_with(char::is_whitespace) {
                    self.out.push(' ');
                }
            } else {
                self.out.push(c);
            }
        }
    }

    fn trim_trailing_spaces(&mut self) {
        let trimmed = self.out.trim_end_matches(' ').len();
        self.out.truncate(trimmed);
    }

    fn paragraph_break(&mut self) {
        self.trim_trailing_spaces();
        if self.out.is_empty() {
            return;
        }
        while !self.out.ends_with("\n\n") {
            self.out.push('\n');
        }
    }

    fn block(&mut self, content: &str) {
        self.paragraph_break();
        self.out.push_str(content);
        self.paragraph_break();
    }

    fn wrap_inline(&mut self, el: ElementRef<'_>, marker: &str) {
        let inner = render_inline(el);
        let core = inner.trim();
        if inner.starts_with(' ') {
            self.text(" ");
        }
        if !core.is_empty() {
            self.out.push_str(marker);
            self.out.push_str(core);
            self.out.push_str(marker);
            if inner.ends_with(' ') {
                self.text(" ");
            }
        }
    }

    fn code_block(&mut self, el: ElementRef<'_>) {
        let language = el
            .child_elements()
            .find(|child| child.value().name() == "code")
            .and_then(|code| code.value().attr("class"))
            .and_then(|class| {
                class
                    .split_whitespace()
                    .find_map(|c| c.strip_prefix("language-"))
            })
            .unwrap_or_default();
        let code: String = el.text().collect();
        let code = code.trim_matches('\n');
        self.block(&format!("```{language}\n{code}\n```"));
    }

    fn link(&mut self, el: ElementRef<'_>) {
        let text = render_inline(el);
        let label = text.trim();
        let href = el
            .value()
            .attr("href")
            .map(str::trim)
            .filter(|href| !href.is_empty() && !href.starts_with('#'))
            .filter(|href| !href.starts_with("javascript:"));

        match href {
            Some(href) if label.is_empty() => self.out.push_str(&format!("<{href}>")),
            Some(href) => {
                if text.starts_with(' ') {
                    self.text(" ");
                }
                self.out.push_str(&format!("[{label}]({href})"));
                if text.ends_with(' ') {
                    self.text(" ");
                }
            }
            None => self.text(&text),
        }
    }

    fn image(&mut self, el: ElementRef<'_>) {
        if let Some(src) = el.value().attr("src").filter(|src| !src.is_empty()) {
            let alt = collapse_whitespace(el.value().attr("alt").unwrap_or_default());
            self.out.push_str(&format!("![{alt}]({src})"));
        }
    }

    fn list(&mut self, el: ElementRef<'_>, ordered: bool) {
        let start = if ordered {
            el.value()
                .attr("start")
                .and_then(|s| s.trim().parse::<usize>().ok())
                .unwrap_or(1)
        } else {
            1
        };

        let items: Vec<String> = el
            .child_elements()
            .filter(|child| child.value().name() == "li")
            .enumerate()
            .map(|(i, li)| {
                let marker = if ordered {
                    format!("{}.", start.saturating_add(i))
                } else {
                    "-".to_string()
                };
                indent_item(&marker, &render_blocks(li))
            })
            .collect();

        if !items.is_empty() {
            self.block(&items.join("\n"));
        }
    }

    fn blockquote(&mut self, el: ElementRef<'_>) {
        let inner = render_blocks(el);
        if inner.is_empty() {
            return;
        }
        let quoted: Vec<String> = inner
            .lines()
            .map(|line| {
                if line.is_empty() {
                    ">".to_string()
                } else {
                    format!("> {line}")
                }
            })
            .collect();
        self.block(&quoted.join("\n"));
    }

    fn table(&mut self, el: ElementRef<'_>) {
        let rows: Vec<Vec<String>> = el
            .descendent_elements()
            .filter(|row| row.value().name() == "tr")
            .map(|row| {
                row.child_elements()
                    .filter(|cell| matches!(cell.value().name(), "th" | "td"))
                    .map(|cell| render_inline(cell).trim().replace('|', "\\|"))
                    .collect::<Vec<_>>()
            })
            .filter(|cells| !cells.is_empty())
            .collect();

        let Some(width) = rows.iter().map(Vec::len).max() else {
            return;
        };

        let mut lines = Vec::with_capacity(rows.len() + 1);
        for (i, row) in rows.iter().enumerate() {
            let mut cells = row.clone();
            cells.resize(width, String::new());
            lines.push(format!("| {} |", cells.join(" | ")));
            if i == 0 {
                lines.push(format!("|{}", " --- |".repeat(width)));
            }
        }
        self.block(&lines.join("\n"));
    }

    /// Collapse blank-line runs and strip trailing spaces outside fenced code.
    fn finish(self) -> String {
        let mut result = String::with_capacity(self.out.len());
        let mut blank_run = 0;
        let mut in_fence = false;
        for raw in self.out.lines() {
            if in_fence {
                in_fence = !is_fence(raw);
                result.push_str(raw);
                result.push('\n');
                continue;
            }
            let line = raw.trim_end();
            in_fence = is_fence(line);
            if line.is_empty() {
                blank_run += 1;
                if blank_run > 1 {
                    continue;
                }
            } else {
                blank_run = 0;
            }
            result.push_str(line);
            result.push('\n');
        }
        result.trim().to_string()
    }
}

/// A code fence line, possibly behind list markers or blockquote prefixes.
fn is_fence(line: &str) -> bool {
    line.trim_start_matches(|c: char| matches!(c, ' ' | '>' | '-' | '.') || c.is_ascii_digit())
        .starts_with("```")
}

/// Prefix the first line of `body` with `marker` and indent the rest under it.
fn indent_item(marker: &str, body: &str) -> String {
    let indent = " ".repeat(marker.len() + 1);
    let mut lines = body.lines();
    let mut item = format!("{marker} {}", lines.next().unwrap_or_default());
    for line in lines {
        item.push('\n');
        if !line.is_empty() {
            item.push_str(&indent);
            item.push_str(line);
        }
    }
    item.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(html: &str) -> String {
        html_to_markdown(html).text_content
    }

    #[test]
    fn test_title_and_headings() {
        let doc = html_to_markdown(
            "<html><head><title> Example\n Domain </title></head>\
             <body><h1>Example Domain</h1><h3>Details</h3></body></html>",
        );
        assert_eq!(doc.title.as_deref(), Some("Example Domain"));
        assert_eq!(doc.text_content, "# Example Domain\n\n### Details");
    }

    #[test]
    fn test_scripts_and_styles_are_dropped() {
        let text = md("<body><script>var x = 1;</script><style>p{}</style>\
                       <p>Visible</p><noscript>enable js</noscript></body>");
        assert_eq!(text, "Visible");
    }

    #[test]
    fn test_paragraph_with_inline_markup() {
        let text = md("<p>Read   the <a href=\"https://example.com/docs\">docs</a>, \
                       it is <strong>very</strong> <em>useful</em> and uses <code>cargo</code>.</p>");
        assert_eq!(
            text,
            "Read the [docs](https://example.com/docs), it is **very** *useful* and uses `cargo`."
        );
    }

    #[test]
    fn test_anchor_without_target_keeps_text() {
        assert_eq!(md("<p><a href=\"#top\">Back</a> up</p>"), "Back up");
        assert_eq!(
            md("<p><a href=\"https://x.org\"></a></p>"),
            "<https://x.org>"
        );
    }

    #[test]
    fn test_lists() {
        let text = md("<ul><li>One</li><li>Two <b>bold</b></li></ul>\
                       <ol start=\"3\"><li>Three</li><li>Four</li></ol>");
        assert_eq!(text, "- One\n- Two **bold**\n\n3. Three\n4. Four");
    }

    #[test]
    fn test_nested_list_is_indented() {
        let text = md("<ul><li>Parent<ul><li>Child</li></ul></li></ul>");
        assert_eq!(text, "- Parent\n\n  - Child");
    }

    #[test]
    fn test_code_block_keeps_whitespace() {
        let text = md("<pre><code class=\"language-rust\">fn main() {\n    run();\n}\n</code></pre>");
        assert_eq!(text, "```rust\nfn main() {\n    run();\n}\n```");
    }

    #[test]
    fn test_code_block_keeps_blank_lines_and_trailing_spaces() {
        let text = md("<p>Before</p><pre><code>a\n\n\nb  \n</code></pre><p>After</p>");
        assert_eq!(text, "Before\n\n```\na\n\n\nb  \n```\n\nAfter");
    }

    #[test]
    fn test_code_block_in_list_item_is_kept() {
        let text = md("<ul><li><pre>x\n\n\ny</pre></li></ul>");
        assert_eq!(text, "- ```\n  x\n\n\n  y\n  ```");
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_huge_list_start_does_not_overflow() {
        let text = md("<ol start=\"18446744073709551615\"><li>a</li><li>b</li></ol>");
        assert_eq!(text, "18446744073709551615. a\n18446744073709551615. b");
    }

    #[test]
    fn test_blockquote_and_rule() {
        let text = md("<blockquote><p>First</p><p>Second</p></blockquote><hr><p>After</p>");
        assert_eq!(text, "> First\n>\n> Second\n\n---\n\nAfter");
    }

    #[test]
    fn test_image() {
        assert_eq!(
            md("<p><img src=\"/logo.png\" alt=\"Logo\"></p>"),
            "![Logo](/logo.png)"
        );
    }

    #[test]
    fn test_table() {
        let text = md("<table><thead><tr><th>Name</th><th>Score</th></tr></thead>\
                       <tbody><tr><td>a|b</td><td>1</td></tr><tr><td>c</td></tr></tbody></table>");
        assert_eq!(
            text,
            "| Name | Score |\n| --- | --- |\n| a\\|b | 1 |\n| c |  |"
        );
    }

    #[test]
    fn test_empty_body_has_no_content() {
        let doc = html_to_markdown("<html><head><title>Blank</title></head><body>  </body></html>");
        assert!(!doc.has_content());
        assert_eq!(doc.title.as_deref(), Some("Blank"));
    }
}
