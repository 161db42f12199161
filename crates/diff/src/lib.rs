// Positional line comparison for diffmatcher
// This crate aligns two line sequences by index and scores each pair

mod comparison;
mod line_pair;
mod sequence_matcher;
mod text_diff;
mod verdict;

pub use comparison::{compare_lines, CompareOptions, ComparisonResult, Detail, LineComparator};
pub use line_pair::{Line, LinePair, PairStatus};
pub use sequence_matcher::{ratio, Match, SequenceMatcher};
pub use similar::ChangeTag;
pub use text_diff::{InlineChange, TextDiff};
pub use verdict::{Verdict, MODERATE_SIMILARITY, NEARLY_IDENTICAL, QUITE_SIMILAR};

/// Round to two decimal places, halves away from zero
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
