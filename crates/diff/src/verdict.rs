use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of a nearly identical comparison, in percent
pub const NEARLY_IDENTICAL: f64 = 95.0;

/// Lower bound (inclusive) of a quite similar comparison, in percent
pub const QUITE_SIMILAR: f64 = 80.0;

/// Lower bound (inclusive) of a moderately similar comparison, in percent
pub const MODERATE_SIMILARITY: f64 = 50.0;

/// Overall assessment of an average similarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Verdict {
    #[display(fmt = "Nearly identical")]
    NearlyIdentical,

    #[display(fmt = "Quite similar")]
    QuiteSimilar,

    #[display(fmt = "Moderate similarity")]
    ModerateSimilarity,

    #[display(fmt = "Significantly different")]
    SignificantlyDifferent,
}

impl Verdict {
    /// Classify an average similarity percentage
    pub fn from_percent(percent: f64) -> Self {
        if percent >= NEARLY_IDENTICAL {
            Verdict::NearlyIdentical
        } else if percent >= QUITE_SIMILAR {
            Verdict::QuiteSimilar
        } else if percent >= MODERATE_SIMILARITY {
            Verdict::ModerateSimilarity
        } else {
            Verdict::SignificantlyDifferent
        }
    }

    /// A sentence describing the verdict for reports
    pub fn description(&self) -> &'static str {
        match self {
            Verdict::NearlyIdentical => "Files are nearly identical!",
            Verdict::QuiteSimilar => "Files are quite similar with some differences",
            Verdict::ModerateSimilarity => "Files have moderate similarity",
            Verdict::SignificantlyDifferent => "Files are significantly different",
        }
    }
}
