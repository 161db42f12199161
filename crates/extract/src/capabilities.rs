//! Which document formats this build can read.
//!
//! Rich-document support is a compile-time choice (the `docx` cargo
//! feature). The set is resolved once at startup and handed to the
//! loader, instead of being probed at every call site.

use crate::document::DocumentKind;

/// The set of document kinds a loader may extract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    rich_documents: bool,
}

impl Capabilities {
    /// Everything this build was compiled with
    pub fn detect() -> Self {
        Self {
            rich_documents: cfg!(feature = "docx"),
        }
    }

    /// Plain text only, even if rich-document support was compiled in
    pub fn plain_text_only() -> Self {
        Self {
            rich_documents: false,
        }
    }

    /// Check if Word documents can be read
    pub fn rich_documents(&self) -> bool {
        self.rich_documents
    }

    /// Check if documents of the given kind can be read
    pub fn supports(&self, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::PlainText => true,
            DocumentKind::RichDocument => self.rich_documents,
        }
    }

    /// One-line status for banners and logs
    pub fn describe(&self) -> &'static str {
        if self.rich_documents {
            "Word document support: enabled"
        } else {
            "Word document support: disabled (rebuild with the `docx` feature)"
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::detect()
    }
}
