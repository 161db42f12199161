use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::line_pair::{Line, LinePair, PairStatus};
use crate::sequence_matcher::ratio;
use crate::verdict::Verdict;

/// How much per-line detail a comparison keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Detail {
    /// Keep every differing pair
    #[default]
    Full,

    /// Keep only the aggregate counts
    Summary,
}

/// Options controlling a comparison run
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    /// Whether differing pairs are kept in the result
    pub detail: Detail,
}

impl CompareOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the level of detail
    pub fn detail(mut self, detail: Detail) -> Self {
        self.detail = detail;
        self
    }
}

/// Aggregate result of comparing two line sequences
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComparisonResult {
    /// Number of aligned positions scored
    pub pairs_compared: usize,

    /// Number of pairs with similarity below 1.0
    pub differences_count: usize,

    /// Mean similarity as a percentage, rounded to two decimals
    pub average_similarity: f64,

    /// Differing pairs in position order (empty for summary comparisons)
    pub differences: Vec<LinePair>,

    /// Number of lines in the left document
    pub left_line_count: usize,

    /// Number of lines in the right document
    pub right_line_count: usize,
}

impl ComparisonResult {
    /// Result for two documents without any lines
    pub fn empty() -> Self {
        Self {
            pairs_compared: 0,
            differences_count: 0,
            average_similarity: 0.0,
            differences: Vec::new(),
            left_line_count: 0,
            right_line_count: 0,
        }
    }

    /// Check if any pair differed
    pub fn has_differences(&self) -> bool {
        self.differences_count > 0
    }

    /// Check if both documents had content and every pair matched
    pub fn is_identical(&self) -> bool {
        self.pairs_compared > 0 && self.differences_count == 0
    }

    /// Classify the average similarity
    pub fn verdict(&self) -> Verdict {
        Verdict::from_percent(self.average_similarity)
    }
}

/// Positional line comparator
#[derive(Debug, Clone, Default)]
pub struct LineComparator {
    options: CompareOptions,
}

impl LineComparator {
    /// Create a comparator with the given options
    pub fn new(options: CompareOptions) -> Self {
        Self { options }
    }

    /// Get the options
    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Align `left` and `right` by index and score every position
    pub fn compare(&self, left: &[Line], right: &[Line]) -> ComparisonResult {
        let max_len = left.len().max(right.len());

        // No lines on either side is zero comparable content, not a match
        if max_len == 0 {
            return ComparisonResult::empty();
        }

        let mut total_similarity = 0.0;
        let mut differences_count = 0;
        let mut differences = Vec::new();

        for index in 0..max_len {
            let pair = align(left, right, index);
            total_similarity += pair.similarity;
            trace!("Line {}: similarity {:.4}", pair.position, pair.similarity);

            if pair.is_difference() {
                differences_count += 1;
                if self.options.detail == Detail::Full {
                    differences.push(pair);
                }
            }
        }

        ComparisonResult {
            pairs_compared: max_len,
            differences_count,
            average_similarity: crate::round2(total_similarity / max_len as f64 * 100.0),
            differences,
            left_line_count: left.len(),
            right_line_count: right.len(),
        }
    }

    /// Score every aligned position, including identical ones
    pub fn pairs(&self, left: &[Line], right: &[Line]) -> Vec<LinePair> {
        let max_len = left.len().max(right.len());
        (0..max_len).map(|index| align(left, right, index)).collect()
    }
}

/// Build the pair for one position, using an empty string for a missing side
fn align(left: &[Line], right: &[Line], index: usize) -> LinePair {
    let left_text = left.get(index).map(Line::trimmed).unwrap_or("");
    let right_text = right.get(index).map(Line::trimmed).unwrap_or("");
    let similarity = ratio(left_text, right_text);

    let status = if similarity >= 1.0 {
        PairStatus::Identical
    } else if index >= left.len() {
        PairStatus::LeftMissing
    } else if index >= right.len() {
        PairStatus::RightMissing
    } else {
        PairStatus::Modified
    };

    LinePair {
        position: index + 1,
        left: left_text.to_string(),
        right: right_text.to_string(),
        similarity,
        status,
    }
}

/// Compare two line sequences with default options
pub fn compare_lines(left: &[Line], right: &[Line]) -> ComparisonResult {
    LineComparator::default().compare(left, right)
}
