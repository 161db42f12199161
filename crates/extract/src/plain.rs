use line_diff::Line;
use log::{debug, warn};
use ropey::Rope;
use std::fs;
use std::path::Path;

use crate::error::ExtractionError;
use crate::extractor::Extract;

/// Reads any file as text, one line per line of the file
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain-text extractor
    pub fn new() -> Self {
        Self
    }
}

impl Extract for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<Vec<Line>, ExtractionError> {
        let bytes = fs::read(path).map_err(|err| ExtractionError::io(path, err))?;
        let text = decode(path, bytes);
        let lines = split_lines(&text);

        debug!("Read {} lines from text file {}", lines.len(), path.display());
        Ok(lines)
    }
}

/// Decode as UTF-8, falling back to ISO-8859-1.
///
/// Every byte is a valid ISO-8859-1 code point, so the fallback cannot fail.
fn decode(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                "{} is not valid UTF-8 ({}), decoding as Latin-1",
                path.display(),
                err.utf8_error()
            );
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

/// Split text into numbered lines.
///
/// `\n`, `\r\n` and a lone `\r` all end a line. The terminator is dropped, a
/// final terminator does not start an extra empty line, and empty text has
/// no lines at all.
pub fn split_lines(text: &str) -> Vec<Line> {
    let rope = Rope::from_str(text);
    let mut lines = Vec::with_capacity(rope.len_lines());

    for slice in rope.lines() {
        // Only the last line can be empty; it follows a final terminator
        if slice.len_chars() == 0 {
            continue;
        }

        let raw = slice.to_string();
        let content = raw
            .strip_suffix("\r\n")
            .or_else(|| raw.strip_suffix('\n'))
            .or_else(|| raw.strip_suffix('\r'))
            .unwrap_or(raw.as_str());

        lines.push(Line::new(lines.len() + 1, content));
    }

    lines
}
