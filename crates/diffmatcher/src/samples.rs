//! Sample files for trying the comparison out.

use anyhow::{Context, Result};
use clap::ValueEnum;
use doc_extract::Capabilities;
use log::{info, warn};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Which set of sample files to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleSet {
    /// Two short text files (and Word copies when supported)
    Basic,
    /// Two versions of a status report as Word documents
    Report,
}

pub const SAMPLE_1: &str = "Hello World!
This is a sample file for testing.
It contains multiple lines of text.
Some lines will be identical.
Others will be slightly different.
This line exists in both files.
End of file 1.";

pub const SAMPLE_2: &str = "Hello World!
This is a sample file for testing purposes.
It contains multiple lines of text.
Some lines will be identical.
Others will be very different.
This line exists in both files.
Additional line in file 2.
End of file 2.";

pub const REPORT_V1: &[&str] = &[
    "Project Status Report - Version 1.0",
    "Executive Summary",
    "This report covers the current status of our software development project.",
    "The project is currently on track and within budget.",
    "",
    "Key Achievements:",
    "• Completed user interface design",
    "• Implemented core functionality",
    "• Conducted initial testing",
    "",
    "Next Steps:",
    "• Finalize testing procedures",
    "• Prepare for deployment",
    "• Document user manual",
];

pub const REPORT_V2: &[&str] = &[
    "Project Status Report - Version 2.0",
    "Executive Summary",
    "This report covers the current status of our software development project.",
    "The project is slightly behind schedule but remains within budget.",
    "",
    "Key Achievements:",
    "• Completed user interface design",
    "• Implemented core functionality",
    "• Conducted comprehensive testing",
    "• Fixed critical bugs",
    "",
    "Next Steps:",
    "• Complete final testing procedures",
    "• Prepare for deployment",
    "• Document user manual",
    "• Train support team",
];

/// Files written for a sample set
#[derive(Debug, Clone, Default)]
pub struct SampleFiles {
    /// Every file that was written
    pub written: Vec<PathBuf>,

    /// The pair to compare
    pub pair: (PathBuf, PathBuf),
}

/// Write a sample set into `dir` and return the pair to compare
pub fn create(set: SampleSet, dir: &Path, capabilities: Capabilities) -> Result<SampleFiles> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create sample directory {}", dir.display()))?;

    let files = match set {
        SampleSet::Basic => create_basic(dir, capabilities)?,
        SampleSet::Report => create_report(dir, capabilities)?,
    };

    info!("Created {} sample files in {}", files.written.len(), dir.display());
    Ok(files)
}

fn create_basic(dir: &Path, capabilities: Capabilities) -> Result<SampleFiles> {
    let text1 = dir.join("sample_file_1.txt");
    let text2 = dir.join("sample_file_2.txt");

    write_text_file(&text1, SAMPLE_1)
        .with_context(|| format!("Failed to write {}", text1.display()))?;
    write_text_file(&text2, SAMPLE_2)
        .with_context(|| format!("Failed to write {}", text2.display()))?;

    let mut files = SampleFiles {
        written: vec![text1.clone(), text2.clone()],
        pair: (text1, text2),
    };

    if capabilities.rich_documents() {
        let doc1 = dir.join("sample_document_1.docx");
        let doc2 = dir.join("sample_document_2.docx");

        // A failed Word copy still leaves the text samples usable
        match write_word_pair(&doc1, SAMPLE_1, &doc2, SAMPLE_2) {
            Ok(()) => {
                files.written.push(doc1.clone());
                files.written.push(doc2.clone());
                files.pair = (doc1, doc2);
            }
            Err(err) => warn!("Could not create Word documents: {:#}", err),
        }
    }

    Ok(files)
}

fn create_report(dir: &Path, capabilities: Capabilities) -> Result<SampleFiles> {
    if !capabilities.rich_documents() {
        anyhow::bail!(
            "the report sample needs Word document support ({})",
            capabilities.describe()
        );
    }

    let doc1 = dir.join("report_v1.docx");
    let doc2 = dir.join("report_v2.docx");
    write_docx(&doc1, REPORT_V1)?;
    write_docx(&doc2, REPORT_V2)?;

    Ok(SampleFiles {
        written: vec![doc1.clone(), doc2.clone()],
        pair: (doc1, doc2),
    })
}

/// Word copies hold one paragraph per non-blank line
fn write_word_pair(doc1: &Path, text1: &str, doc2: &Path, text2: &str) -> Result<()> {
    write_docx(doc1, &paragraphs(text1))?;
    write_docx(doc2, &paragraphs(text2))
}

fn paragraphs(text: &str) -> Vec<&str> {
    text.lines().filter(|line| !line.trim().is_empty()).collect()
}

fn write_text_file(path: &Path, content: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()
}

#[cfg(feature = "docx")]
fn write_docx(path: &Path, paragraphs: &[&str]) -> Result<()> {
    doc_extract::docx::write_paragraphs(path, paragraphs)
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(not(feature = "docx"))]
fn write_docx(path: &Path, _paragraphs: &[&str]) -> Result<()> {
    anyhow::bail!(
        "cannot write {}: Word document support is unavailable",
        path.display()
    )
}
