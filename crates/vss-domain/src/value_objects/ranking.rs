//! Ranking results

use serde::{Deserialize, Serialize};

use super::ObjectKey;

/// One scored candidate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Candidate key
    pub key: ObjectKey,
    /// Position of the candidate in the ranker's input
    pub index: usize,
    /// Cosine similarity to the query, in [-1, 1]
    pub score: f32,
}

/// Value Object: Ranked Result
///
/// Candidates ordered by descending score. Equal scores keep their input
/// order, so the ranking is a pure function of the candidate sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    entries: Vec<RankedEntry>,
}

impl RankedResult {
    /// Wrap entries that are already in rank order
    pub fn from_sorted(entries: Vec<RankedEntry>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].score >= w[1].score));
        Self { entries }
    }

    /// An empty ranking
    pub fn empty() -> Self {
        Self::default()
    }

    /// Entries in rank order
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Number of ranked candidates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was ranked
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in rank order
    pub fn keys(&self) -> impl Iterator<Item = &ObjectKey> {
        self.entries.iter().map(|e| &e.key)
    }

    /// Input positions in rank order (an argsort, descending)
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.index)
    }

    /// Scores in rank order
    pub fn scores(&self) -> impl Iterator<Item = f32> + '_ {
        self.entries.iter().map(|e| e.score)
    }

    /// The first `k` entries; presentation-level slicing
    pub fn top(&self, k: usize) -> &[RankedEntry] {
        &self.entries[..k.min(self.entries.len())]
    }
}
