use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single logical line of a document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    /// Position within the source document (1-based)
    pub number: usize,

    /// Raw text without its line terminator
    pub text: String,
}

impl Line {
    /// Create a new line
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Number a sequence of texts as consecutive lines starting at 1
    pub fn numbered<I, S>(texts: I) -> Vec<Line>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Line::new(index + 1, text))
            .collect()
    }

    /// The text with leading and trailing whitespace removed
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// How the two sides of an aligned pair relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PairStatus {
    /// Both sides are equal after trimming
    #[display(fmt = "Identical")]
    Identical,

    /// Both sides exist but differ
    #[display(fmt = "Modified")]
    Modified,

    /// The left document ran out of lines at this position
    #[display(fmt = "Left missing")]
    LeftMissing,

    /// The right document ran out of lines at this position
    #[display(fmt = "Right missing")]
    RightMissing,
}

/// Result of aligning one position across two documents
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinePair {
    /// The aligned position (1-based)
    pub position: usize,

    /// Trimmed left text, empty if the left document is shorter
    pub left: String,

    /// Trimmed right text, empty if the right document is shorter
    pub right: String,

    /// Similarity ratio in [0.0, 1.0]
    pub similarity: f64,

    /// How the two sides relate
    pub status: PairStatus,
}

impl LinePair {
    /// Whether this pair counts as a difference
    pub fn is_difference(&self) -> bool {
        self.similarity < 1.0
    }

    /// Similarity as a percentage rounded to two decimals
    pub fn similarity_percent(&self) -> f64 {
        crate::round2(self.similarity * 100.0)
    }
}
