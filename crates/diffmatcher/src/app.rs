use anyhow::{Context, Result};
use doc_extract::{Capabilities, Document, DocumentLoader};
use line_diff::{CompareOptions, ComparisonResult, Detail, LineComparator, Verdict};
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};
use crate::report;
use crate::samples;

/// Exit code for an average similarity of at least 95%
pub const EXIT_NEARLY_IDENTICAL: i32 = 0;

/// Exit code for an average similarity of at least 50%
pub const EXIT_SIMILAR: i32 = 1;

/// Exit code for an average similarity below 50%
pub const EXIT_DIFFERENT: i32 = 2;

/// Exit code when no result could be produced
pub const EXIT_ERROR: i32 = 3;

/// Map an average similarity percentage to the process exit code
pub fn exit_code(average_similarity: f64) -> i32 {
    if average_similarity >= line_diff::NEARLY_IDENTICAL {
        EXIT_NEARLY_IDENTICAL
    } else if average_similarity >= line_diff::MODERATE_SIMILARITY {
        EXIT_SIMILAR
    } else {
        EXIT_DIFFERENT
    }
}

/// What a report says about one input file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSummary {
    pub name: String,
    pub path: PathBuf,
    pub kind: String,
    pub lines: usize,
}

impl FileSummary {
    fn of(document: &Document) -> Self {
        Self {
            name: document.file_name(),
            path: document.path().to_path_buf(),
            kind: document.kind().to_string(),
            lines: document.len(),
        }
    }
}

/// A finished comparison of two files
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub file1: FileSummary,
    pub file2: FileSummary,
    pub result: ComparisonResult,
    pub verdict: Verdict,
}

impl Comparison {
    /// The process exit code for this comparison
    pub fn exit_code(&self) -> i32 {
        exit_code(self.result.average_similarity)
    }
}

/// Loads two documents and compares them
pub struct DiffMatcherApp {
    loader: DocumentLoader,
    comparator: LineComparator,
}

impl DiffMatcherApp {
    /// Create an app for the given capabilities and options
    pub fn new(capabilities: Capabilities, options: CompareOptions) -> Self {
        Self {
            loader: DocumentLoader::new(capabilities),
            comparator: LineComparator::new(options),
        }
    }

    /// Extract both files and compare them line by line
    pub fn compare(&self, file1: &Path, file2: &Path) -> Result<Comparison> {
        let (left, right) = rayon::join(|| self.loader.load(file1), || self.loader.load(file2));
        let left = left.context("Failed to load first file")?;
        let right = right.context("Failed to load second file")?;

        info!(
            "Comparing {} ({} lines) with {} ({} lines)",
            left.path().display(),
            left.len(),
            right.path().display(),
            right.len()
        );

        let result = self.comparator.compare(left.lines(), right.lines());
        info!(
            "{} pairs compared, {} differences, {:.2}% average similarity",
            result.pairs_compared, result.differences_count, result.average_similarity
        );

        Ok(Comparison {
            file1: FileSummary::of(&left),
            file2: FileSummary::of(&right),
            verdict: result.verdict(),
            result,
        })
    }
}

/// Run the command line and write the report to `out`, returning the exit code
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<i32> {
    let capabilities = Capabilities::detect();
    info!("{}", capabilities.describe());

    let text = cli.format == OutputFormat::Text;
    if text {
        write!(out, "{}", report::banner(capabilities))?;
    }

    let (file1, file2) = match cli.sample {
        Some(set) => {
            let files = samples::create(set, &cli.sample_dir, capabilities)?;
            if text {
                write!(out, "{}", report::render_samples(&files.written))?;
            }
            files.pair
        }
        None => {
            let file1 = cli.file1.clone().context("missing first file")?;
            let file2 = cli.file2.clone().context("missing second file")?;
            (file1, file2)
        }
    };

    let detail = if cli.quiet { Detail::Summary } else { Detail::Full };
    let app = DiffMatcherApp::new(capabilities, CompareOptions::new().detail(detail));
    let comparison = app.compare(&file1, &file2)?;

    match cli.format {
        OutputFormat::Text => write!(out, "{}", report::render_text(&comparison, cli.inline))?,
        OutputFormat::Json => writeln!(out, "{}", report::render_json(&comparison)?)?,
    }

    Ok(comparison.exit_code())
}
