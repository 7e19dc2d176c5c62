//! LaTeX table artifacts.

/// A preformatted `tabular` fragment written verbatim to its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableArtifact {
    /// Position in the generation order, starting at 1.
    pub number: u32,
    /// Short description used in progress output.
    pub description: &'static str,
    pub file_name: &'static str,
    pub content: &'static str,
}

impl TableArtifact {
    /// Whether the content is a single, closed `tabular` environment.
    pub fn is_tabular(&self) -> bool {
        let content = self.content.trim();
        content.starts_with("\\begin{tabular}")
            && content.ends_with("\\end{tabular}")
            && content.matches("\\begin{tabular}").count() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_tabular() {
        let table = TableArtifact {
            number: 1,
            description: "demo",
            file_name: "table_demo.tex",
            content: "\\begin{tabular}{ll}\na & b \\\\\n\\end{tabular}",
        };
        assert!(table.is_tabular());

        let broken = TableArtifact {
            content: "\\begin{tabular}{ll}\na & b \\\\",
            ..table
        };
        assert!(!broken.is_tabular());
    }
}
