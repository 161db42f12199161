//! Longest-matching-block similarity between two strings.
//!
//! The matcher finds the longest contiguous block shared by both strings,
//! then recurses on the unmatched text to the left and to the right of that
//! block. The similarity ratio is `2 * M / (|a| + |b|)` where `M` is the
//! total number of matched characters. Lengths are measured in Unicode
//! scalar values.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A contiguous block shared by both sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Match {
    /// Start of the block in the first sequence
    pub a: usize,

    /// Start of the block in the second sequence
    pub b: usize,

    /// Length of the block
    pub size: usize,
}

/// Matcher over the characters of two strings
#[derive(Debug, Clone)]
pub struct SequenceMatcher {
    a: Vec<char>,
    b: Vec<char>,

    /// Positions of every character in `b`, ascending
    b2j: HashMap<char, Vec<usize>>,
}

impl SequenceMatcher {
    /// Create a matcher for two strings
    pub fn new(a: &str, b: &str) -> Self {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();

        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &ch) in b.iter().enumerate() {
            b2j.entry(ch).or_default().push(j);
        }

        Self { a, b, b2j }
    }

    /// Find the longest block with `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, and
    /// among those the one starting earliest in `b`. Returns a zero-sized
    /// match at `(alo, blo)` when nothing matches.
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Match {
        let mut best = Match {
            a: alo,
            b: blo,
            size: 0,
        };

        // j2len[j] = length of the block ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len: HashMap<usize, usize> = HashMap::new();

            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }

                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);

                    if k > best.size {
                        best = Match {
                            a: i + 1 - k,
                            b: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }

            j2len = next_j2len;
        }

        best
    }

    /// All matching blocks in ascending order, adjacent blocks merged
    pub fn matching_blocks(&self) -> Vec<Match> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let found = self.find_longest_match(alo, ahi, blo, bhi);
            if found.size == 0 {
                continue;
            }

            if alo < found.a && blo < found.b {
                pending.push((alo, found.a, blo, found.b));
            }
            if found.a + found.size < ahi && found.b + found.size < bhi {
                pending.push((found.a + found.size, ahi, found.b + found.size, bhi));
            }
            blocks.push(found);
        }

        blocks.sort_by_key(|block| (block.a, block.b));

        let mut merged: Vec<Match> = Vec::with_capacity(blocks.len());
        for block in blocks {
            match merged.last_mut() {
                Some(last) if last.a + last.size == block.a && last.b + last.size == block.b => {
                    last.size += block.size;
                }
                _ => merged.push(block),
            }
        }

        merged
    }

    /// Total number of matched characters
    pub fn matched_chars(&self) -> usize {
        self.matching_blocks().iter().map(|block| block.size).sum()
    }

    /// Directional similarity ratio in [0.0, 1.0].
    ///
    /// Two empty strings have a ratio of 1.0.
    pub fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        2.0 * self.matched_chars() as f64 / total as f64
    }
}

/// Symmetric similarity ratio between two strings.
///
/// The greedy block search can land on different blocks depending on which
/// string is scanned first, so both orientations are scored and the larger
/// match count is kept. This makes `ratio(a, b) == ratio(b, a)` hold for
/// every pair of inputs.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }

    let forward = SequenceMatcher::new(a, b).ratio();
    let backward = SequenceMatcher::new(b, a).ratio();
    forward.max(backward)
}
