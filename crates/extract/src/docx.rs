//! Word document (.docx) support.
//!
//! A document yields one line per top-level paragraph, including empty
//! paragraphs so that positions stay comparable. A document without any
//! paragraphs falls back to its tables: one line per non-blank cell, in
//! row-major order. Blank cells are skipped on that path only.

use docx_rs::{
    read_docx, Docx, DocumentChild, Paragraph, ParagraphChild, Run, RunChild, Table, TableCell,
    TableCellContent, TableChild, TableRow, TableRowChild,
};
use line_diff::Line;
use log::debug;
use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::ExtractionError;
use crate::extractor::Extract;

/// Reads the paragraph text of a Word document
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new Word document extractor
    pub fn new() -> Self {
        Self
    }
}

impl Extract for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<Line>, ExtractionError> {
        let bytes = fs::read(path).map_err(|err| ExtractionError::io(path, err))?;

        let docx = read_docx(&bytes).map_err(|err| ExtractionError::Undecodable {
            path: path.to_path_buf(),
            reason: format!("not a readable Word document ({})", err),
        })?;

        let children = &docx.document.children;

        let paragraphs: Vec<String> = children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect();

        let texts = if paragraphs.is_empty() {
            debug!("{} has no paragraphs, reading table cells", path.display());
            children
                .iter()
                .filter_map(|child| match child {
                    DocumentChild::Table(table) => Some(table_cell_texts(table)),
                    _ => None,
                })
                .flatten()
                .filter(|text| !text.trim().is_empty())
                .collect()
        } else {
            paragraphs
        };

        debug!("Read {} lines from Word document {}", texts.len(), path.display());
        Ok(Line::numbered(texts))
    }
}

/// Plain text of a paragraph with formatting discarded
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        push_paragraph_child(child, &mut text);
    }
    text
}

fn push_paragraph_child(child: &ParagraphChild, text: &mut String) {
    match child {
        ParagraphChild::Run(run) => push_run(run, text),
        ParagraphChild::Hyperlink(link) => {
            for child in &link.children {
                push_paragraph_child(child, text);
            }
        }
        _ => {}
    }
}

fn push_run(run: &Run, text: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

/// Text of every cell in row-major order, cell paragraphs joined by newlines
fn table_cell_texts(table: &Table) -> Vec<String> {
    let mut cells = Vec::new();

    for row in &table.rows {
        #[allow(unreachable_patterns)]
        let row = match row {
            TableChild::TableRow(row) => row,
            _ => continue,
        };
        for cell in &row.cells {
            #[allow(unreachable_patterns)]
            let cell = match cell {
                TableRowChild::TableCell(cell) => cell,
                _ => continue,
            };
            let paragraphs: Vec<String> = cell
                .children
                .iter()
                .filter_map(|content| match content {
                    TableCellContent::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                    _ => None,
                })
                .collect();
            cells.push(paragraphs.join("\n"));
        }
    }

    cells
}

fn text_paragraph(text: &str) -> Paragraph {
    if text.is_empty() {
        Paragraph::new()
    } else {
        Paragraph::new().add_run(Run::new().add_text(text))
    }
}

fn pack(docx: Docx, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    docx.build()
        .pack(file)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))
}

/// Write a Word document with one paragraph per entry
pub fn write_paragraphs<S: AsRef<str>>(path: &Path, paragraphs: &[S]) -> io::Result<()> {
    let docx = paragraphs
        .iter()
        .fold(Docx::new(), |docx, text| docx.add_paragraph(text_paragraph(text.as_ref())));
    pack(docx, path)
}

/// Write a Word document holding a single table and no paragraphs
pub fn write_table<S: AsRef<str>>(path: &Path, rows: &[Vec<S>]) -> io::Result<()> {
    let rows = rows
        .iter()
        .map(|cells| {
            TableRow::new(
                cells
                    .iter()
                    .map(|text| TableCell::new().add_paragraph(text_paragraph(text.as_ref())))
                    .collect(),
            )
        })
        .collect();

    pack(Docx::new().add_table(Table::new(rows)), path)
}
