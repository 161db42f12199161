use derive_more::Display;
use line_diff::Line;
use std::path::{Path, PathBuf};

/// The broad format of a source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DocumentKind {
    /// Any file read as text (.txt, .py, ...)
    #[display(fmt = "Text file")]
    PlainText,

    /// A Word-processing document (.docx)
    #[display(fmt = "Word document")]
    RichDocument,
}

impl DocumentKind {
    /// Classify a path by its extension
    pub fn from_path(path: &Path) -> Self {
        let is_docx = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"));

        if is_docx {
            DocumentKind::RichDocument
        } else {
            DocumentKind::PlainText
        }
    }
}

/// An extracted document: its lines in reading order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    kind: DocumentKind,
    lines: Vec<Line>,
}

impl Document {
    /// Create a new document
    pub fn new(path: impl Into<PathBuf>, kind: DocumentKind, lines: Vec<Line>) -> Self {
        Self {
            path: path.into(),
            kind,
            lines,
        }
    }

    /// Get the originating path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the document kind
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// Get the lines
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get the number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the document has no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The final path component, for display
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
