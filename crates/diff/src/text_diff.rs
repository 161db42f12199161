use similar::{Algorithm, ChangeTag, TextDiff as SimilarTextDiff};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A run of characters sharing the same change tag
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InlineChange {
    pub tag: ChangeTag,
    pub value: String,
}

/// Character-level change spans between two line texts
pub struct TextDiff;

impl TextDiff {
    /// Compute the change spans that turn `left` into `right`
    pub fn inline(left: &str, right: &str) -> Vec<InlineChange> {
        let diff = SimilarTextDiff::configure()
            .algorithm(Algorithm::Myers)
            .timeout(std::time::Duration::from_secs(5))
            .diff_chars(left, right);

        let mut changes: Vec<InlineChange> = Vec::new();

        for change in diff.iter_all_changes() {
            let tag = change.tag();
            match changes.last_mut() {
                Some(last) if last.tag == tag => last.value.push_str(change.value()),
                _ => changes.push(InlineChange {
                    tag,
                    value: change.value().to_string(),
                }),
            }
        }

        changes
    }

    /// Render the change spans as `[-removed-]{+added+}` markup
    pub fn render_inline(left: &str, right: &str) -> String {
        let mut result = String::new();

        for change in Self::inline(left, right) {
            match change.tag {
                ChangeTag::Equal => result.push_str(&change.value),
                ChangeTag::Delete => result.push_str(&format!("[-{}-]", change.value)),
                ChangeTag::Insert => result.push_str(&format!("{{+{}+}}", change.value)),
            }
        }

        result
    }
}
