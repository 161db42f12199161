// Text extraction for diffmatcher
// This crate turns plain-text and Word documents into ordered lines

mod capabilities;
#[cfg(feature = "docx")]
pub mod docx;
mod document;
mod error;
mod extractor;
mod loader;
mod plain;

pub use capabilities::Capabilities;
pub use document::{Document, DocumentKind};
pub use error::{ExtractionError, IoFailure};
pub use extractor::{Extract, Extractor};
pub use loader::DocumentLoader;
pub use plain::{split_lines, PlainTextExtractor};

#[cfg(feature = "docx")]
pub use docx::DocxExtractor;
