//! Rendering of comparison reports.

use anyhow::{Context, Result};
use doc_extract::Capabilities;
use line_diff::{LinePair, TextDiff};
use std::fmt::Write;
use std::path::PathBuf;

use crate::app::Comparison;

const RULE_WIDTH: usize = 50;

/// Header printed before a text report
pub fn banner(capabilities: Capabilities) -> String {
    format!(
        "DiffMatcher - File Comparison Tool\n{}\n{}\n\n",
        capabilities.describe(),
        "=".repeat(RULE_WIDTH)
    )
}

/// List the sample files that were written
pub fn render_samples(written: &[PathBuf]) -> String {
    let mut out = String::from("Sample files created:\n");
    for path in written {
        let _ = writeln!(out, "   {}", path.display());
    }
    out.push('\n');
    out
}

/// Human-readable report, with per-line detail when the result kept it
pub fn render_text(comparison: &Comparison, inline: bool) -> String {
    let result = &comparison.result;
    let mut out = String::new();

    let _ = writeln!(out, "COMPARISON SUMMARY:");
    for (label, file) in [("File 1", &comparison.file1), ("File 2", &comparison.file2)] {
        let _ = writeln!(
            out,
            "   {}: {} ({}, {} lines)",
            label, file.name, file.kind, file.lines
        );
    }
    let _ = writeln!(out, "   Total lines to compare: {}", result.pairs_compared);

    for pair in &result.differences {
        out.push('\n');
        render_pair(&mut out, pair, inline);
    }

    out.push('\n');
    if result.pairs_compared == 0 {
        let _ = writeln!(out, "No lines to compare");
    } else {
        let _ = writeln!(out, "RESULTS:");
        let _ = writeln!(out, "   Differences found: {}", result.differences_count);
        let _ = writeln!(out, "   Average similarity: {:.2}%", result.average_similarity);
        let _ = writeln!(out, "   {}", comparison.verdict.description());
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "Final Result: {:.2}% similarity",
        result.average_similarity
    );

    out
}

fn render_pair(out: &mut String, pair: &LinePair, inline: bool) {
    let _ = writeln!(out, "Line {} differs:", pair.position);
    let _ = writeln!(out, "   File 1: {}", or_empty(&pair.left));
    let _ = writeln!(out, "   File 2: {}", or_empty(&pair.right));
    let _ = writeln!(out, "   Similarity: {:.2}%", pair.similarity_percent());
    if inline {
        let _ = writeln!(
            out,
            "   Changes: {}",
            TextDiff::render_inline(&pair.left, &pair.right)
        );
    }
}

fn or_empty(text: &str) -> &str {
    if text.is_empty() {
        "(empty line)"
    } else {
        text
    }
}

/// Machine-readable report
pub fn render_json(comparison: &Comparison) -> Result<String> {
    serde_json::to_string_pretty(comparison).context("Failed to serialize comparison")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FileSummary;
    use line_diff::{compare_lines, CompareOptions, Detail, Line, LineComparator};
    use pretty_assertions::assert_eq;

    fn summary(name: &str, lines: usize) -> FileSummary {
        FileSummary {
            name: name.to_string(),
            path: PathBuf::from(name),
            kind: "Text file".to_string(),
            lines,
        }
    }

    fn comparison(left: &[&str], right: &[&str], detail: Detail) -> Comparison {
        let comparator = LineComparator::new(CompareOptions::new().detail(detail));
        let result = comparator.compare(
            &Line::numbered(left.iter().copied()),
            &Line::numbered(right.iter().copied()),
        );
        Comparison {
            file1: summary("left.txt", left.len()),
            file2: summary("right.txt", right.len()),
            verdict: result.verdict(),
            result,
        }
    }

    #[test]
    fn test_text_report_with_details() {
        let comparison = comparison(&["same", "abcd"], &["same", "abcx", "extra"], Detail::Full);

        insta::assert_snapshot!(render_text(&comparison, true), @r###"
COMPARISON SUMMARY:
   File 1: left.txt (Text file, 2 lines)
   File 2: right.txt (Text file, 3 lines)
   Total lines to compare: 3

Line 2 differs:
   File 1: abcd
   File 2: abcx
   Similarity: 75.00%
   Changes: abc[-d-]{+x+}

Line 3 differs:
   File 1: (empty line)
   File 2: extra
   Similarity: 0.00%
   Changes: {+extra+}

RESULTS:
   Differences found: 2
   Average similarity: 58.33%
   Files have moderate similarity

Final Result: 58.33% similarity
"###);
    }

    #[test]
    fn test_quiet_text_report() {
        let comparison = comparison(&["same", "abcd"], &["same", "abcx", "extra"], Detail::Summary);

        insta::assert_snapshot!(render_text(&comparison, false), @r###"
COMPARISON SUMMARY:
   File 1: left.txt (Text file, 2 lines)
   File 2: right.txt (Text file, 3 lines)
   Total lines to compare: 3

RESULTS:
   Differences found: 2
   Average similarity: 58.33%
   Files have moderate similarity

Final Result: 58.33% similarity
"###);
    }

    #[test]
    fn test_empty_documents_report() {
        let comparison = comparison(&[], &[], Detail::Full);

        let text = render_text(&comparison, false);

        assert!(text.contains("Total lines to compare: 0"));
        assert!(text.contains("No lines to compare"));
        assert!(!text.contains("RESULTS:"));
        assert!(text.ends_with("Final Result: 0.00% similarity\n"));
    }

    #[test]
    fn test_identical_report_verdict() {
        let lines = ["one", "two"];
        let result = compare_lines(&Line::numbered(lines), &Line::numbered(lines));
        let comparison = Comparison {
            file1: summary("a.txt", 2),
            file2: summary("b.txt", 2),
            verdict: result.verdict(),
            result,
        };

        let text = render_text(&comparison, true);

        assert!(!text.contains("differs"));
        assert!(text.contains("   Files are nearly identical!\n"));
        assert!(text.contains("Final Result: 100.00% similarity"));
    }

    #[test]
    fn test_json_report() {
        let comparison = comparison(&["same", "abcd"], &["same", "abcx"], Detail::Full);

        let json = render_json(&comparison).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["file1"]["name"], "left.txt");
        assert_eq!(value["result"]["pairs_compared"], 2);
        assert_eq!(value["result"]["differences_count"], 1);
        assert_eq!(value["result"]["average_similarity"], 87.5);
        assert_eq!(value["result"]["differences"][0]["position"], 2);
        assert_eq!(value["result"]["differences"][0]["status"], "Modified");
        assert_eq!(value["verdict"], "QuiteSimilar");
    }

    #[test]
    fn test_banner_and_samples() {
        let banner = banner(Capabilities::plain_text_only());
        assert!(banner.starts_with("DiffMatcher - File Comparison Tool\n"));
        assert!(banner.contains("Word document support: disabled"));

        let listed = render_samples(&[PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(listed, "Sample files created:\n   a.txt\n   b.txt\n\n");
    }
}
