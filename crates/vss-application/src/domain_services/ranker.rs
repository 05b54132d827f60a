//! Ranker
//!
//! Exhaustive cosine scoring of every candidate against the query.

use vss_domain::error::{Error, Result};
use vss_domain::value_objects::{EmbeddingVector, ObjectKey, RankedEntry, RankedResult};

/// Score and order candidates by similarity to `query`
///
/// Vectors are unit-norm, so the inner product is the cosine similarity.
/// The sort is stable: exactly equal scores keep their position in
/// `candidates`. No threshold or top-K cut is applied.
pub fn rank(
    query: &EmbeddingVector,
    candidates: &[(ObjectKey, EmbeddingVector)],
) -> Result<RankedResult> {
    let dims = query.dimensions();
    if let Some((key, vector)) = candidates.iter().find(|(_, v)| v.dimensions() != dims) {
        return Err(Error::invalid_argument(format!(
            "embedding for '{key}' has {} dimensions, query has {dims}",
            vector.dimensions()
        )));
    }

    let mut entries: Vec<RankedEntry> = candidates
        .iter()
        .enumerate()
        .map(|(index, (key, vector))| RankedEntry {
            key: key.clone(),
            index,
            // -0.0 and 0.0 are one score; total_cmp would split them
            score: query.dot(vector) + 0.0,
        })
        .collect();

    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    Ok(RankedResult::from_sorted(entries))
}
