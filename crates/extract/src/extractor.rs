use line_diff::Line;
use std::fs;
use std::path::Path;

use crate::capabilities::Capabilities;
use crate::document::DocumentKind;
use crate::error::ExtractionError;
use crate::plain::PlainTextExtractor;

#[cfg(feature = "docx")]
use crate::docx::DocxExtractor;

/// Turns a file into an ordered sequence of lines
pub trait Extract {
    /// Read `path` from scratch and return its lines in reading order
    fn extract(&self, path: &Path) -> Result<Vec<Line>, ExtractionError>;
}

/// The extractor chosen for one document kind
#[derive(Debug, Clone, Copy)]
pub enum Extractor {
    PlainText(PlainTextExtractor),
    #[cfg(feature = "docx")]
    RichDocument(DocxExtractor),
    /// The kind is known but this build or configuration cannot read it
    Unavailable(DocumentKind),
}

impl Extractor {
    /// Pick the extractor for `kind` within the given capabilities
    pub fn for_kind(kind: DocumentKind, capabilities: Capabilities) -> Self {
        if !capabilities.supports(kind) {
            return Extractor::Unavailable(kind);
        }

        match kind {
            DocumentKind::PlainText => Extractor::PlainText(PlainTextExtractor::new()),
            #[cfg(feature = "docx")]
            DocumentKind::RichDocument => Extractor::RichDocument(DocxExtractor::new()),
            #[cfg(not(feature = "docx"))]
            DocumentKind::RichDocument => Extractor::Unavailable(kind),
        }
    }

    /// Check if this extractor can read anything
    pub fn is_available(&self) -> bool {
        !matches!(self, Extractor::Unavailable(_))
    }
}

impl Extract for Extractor {
    fn extract(&self, path: &Path) -> Result<Vec<Line>, ExtractionError> {
        match self {
            Extractor::PlainText(extractor) => extractor.extract(path),
            #[cfg(feature = "docx")]
            Extractor::RichDocument(extractor) => extractor.extract(path),
            Extractor::Unavailable(_) => {
                // A missing file is reported as such, whatever its format
                fs::metadata(path).map_err(|err| ExtractionError::io(path, err))?;
                Err(ExtractionError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        }
    }
}
