//! The six LaTeX table fragments of the deck.
//!
//! Contents are written verbatim; each is a single booktabs `tabular`.

use deckhand_core::TableArtifact;

const DATA_TYPES: &str = r"\begin{tabular}{@{}llll@{}}
\toprule
\textbf{Type} & \textbf{Description} & \textbf{Examples} & \textbf{Share} \\
\midrule
Structured & Organized in tables/rows & SQL databases, CSV & 20\% \\
Semi-structured & Tagged or marked up & JSON, XML, HTML & 10\% \\
Unstructured & No predefined format & Text, images, video & 70\% \\
\bottomrule
\end{tabular}";

const ML_ALGORITHMS: &str = r"\begin{tabular}{@{}llcc@{}}
\toprule
\textbf{Algorithm} & \textbf{Task} & \textbf{Interpret.} & \textbf{Scale} \\
\midrule
Linear Regression & Regression & High & Excellent \\
Logistic Regression & Classification & High & Excellent \\
Decision Trees & Both & Medium & Good \\
Random Forest & Both & Low & Good \\
Neural Networks & Both & Low & Varies \\
\bottomrule
\end{tabular}";

const LANGUAGES: &str = r"\begin{tabular}{@{}lll@{}}
\toprule
\textbf{Language} & \textbf{Key Strengths} & \textbf{Rank} \\
\midrule
Python & General purpose, ML libraries & 1st \\
R & Statistics, visualization & 2nd \\
SQL & Data querying, databases & 3rd \\
Julia & High performance computing & Growing \\
\bottomrule
\end{tabular}";

const DOMAINS: &str = r"\begin{tabular}{@{}lll@{}}
\toprule
\textbf{Domain} & \textbf{Key Metric} & \textbf{Challenge} \\
\midrule
Healthcare & Patient outcomes & Privacy (HIPAA) \\
Finance & ROI, Risk & Regulation \\
Marketing & Conversion rate & Attribution \\
Manufacturing & Defect rate & Real-time data \\
\bottomrule
\end{tabular}";

const ROADMAP: &str = r"\begin{tabular}{@{}cll@{}}
\toprule
\textbf{Weeks} & \textbf{Topic} & \textbf{Key Skills} \\
\midrule
1--3 & Foundations & Python, Statistics basics \\
4--6 & Data Wrangling & pandas, data cleaning \\
7--9 & Machine Learning & scikit-learn \\
10--12 & Deep Learning & PyTorch basics \\
13--15 & Capstone Project & Full pipeline \\
\bottomrule
\end{tabular}";

const METRICS: &str = r"\begin{tabular}{@{}lll@{}}
\toprule
\textbf{Metric} & \textbf{Formula} & \textbf{Best For} \\
\midrule
Accuracy & $\frac{TP+TN}{\text{Total}}$ & Balanced data \\
Precision & $\frac{TP}{TP+FP}$ & Cost of FP high \\
Recall & $\frac{TP}{TP+FN}$ & Cost of FN high \\
F1-Score & $\frac{2 \cdot P \cdot R}{P+R}$ & Imbalanced data \\
AUC-ROC & Area under curve & Threshold tuning \\
\bottomrule
\end{tabular}";

/// The six deck tables, in generation order.
pub const TABLES: [TableArtifact; 6] = [
    TableArtifact {
        number: 1,
        description: "Data types",
        file_name: "table_data_types.tex",
        content: DATA_TYPES,
    },
    TableArtifact {
        number: 2,
        description: "ML algorithms comparison",
        file_name: "table_ml_algorithms.tex",
        content: ML_ALGORITHMS,
    },
    TableArtifact {
        number: 3,
        description: "Programming languages",
        file_name: "table_languages.tex",
        content: LANGUAGES,
    },
    TableArtifact {
        number: 4,
        description: "Domain metrics",
        file_name: "table_domains.tex",
        content: DOMAINS,
    },
    TableArtifact {
        number: 5,
        description: "Course roadmap",
        file_name: "table_roadmap.tex",
        content: ROADMAP,
    },
    TableArtifact {
        number: 6,
        description: "Evaluation metrics",
        file_name: "table_metrics.tex",
        content: METRICS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_is_a_single_tabular() {
        for table in &TABLES {
            assert!(table.is_tabular(), "{} is malformed", table.file_name);
            assert!(table.content.contains("\\toprule"));
            assert!(table.content.contains("\\bottomrule"));
        }
    }

    #[test]
    fn test_column_counts_match_spec_line() {
        // Every data row has as many cells as the column spec declares
        for table in &TABLES {
            let spec = table
                .content
                .lines()
                .next()
                .and_then(|l| l.strip_prefix("\\begin{tabular}{@{}"))
                .and_then(|l| l.strip_suffix("@{}}"))
                .unwrap();
            for row in table.content.lines().filter(|l| l.ends_with("\\\\")) {
                assert_eq!(row.matches(" & ").count() + 1, spec.len(), "{row}");
            }
        }
    }

    #[test]
    fn test_metrics_table_keeps_latex_math() {
        assert!(METRICS.contains(r"$\frac{TP+TN}{\text{Total}}$"));
        assert!(DATA_TYPES.contains(r"70\% \\"));
    }
}
