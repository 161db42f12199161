use log::{debug, info};
use std::path::Path;

use crate::capabilities::Capabilities;
use crate::document::{Document, DocumentKind};
use crate::error::ExtractionError;
use crate::extractor::{Extract, Extractor};

/// Loads documents of any supported kind
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentLoader {
    capabilities: Capabilities,
}

impl DocumentLoader {
    /// Create a loader limited to the given capabilities
    pub fn new(capabilities: Capabilities) -> Self {
        info!("DocumentLoader ready ({})", capabilities.describe());
        Self { capabilities }
    }

    /// Get the capabilities
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Classify and extract the document at `path`
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Document, ExtractionError> {
        let path = path.as_ref();
        let kind = DocumentKind::from_path(path);
        debug!("Loading {} as {}", path.display(), kind);

        let lines = Extractor::for_kind(kind, self.capabilities).extract(path)?;

        Ok(Document::new(path, kind, lines))
    }
}
