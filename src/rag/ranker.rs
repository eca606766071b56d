// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Vector similarity ranking
//!
//! Pure vector math over the embedding store: cosine similarity plus stable
//! top-k selection. The corpus is small, a linear scan per query is the
//! intended scaling boundary.

/// One ranked fact, produced per query and consumed by the prompt composer
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMatch {
    pub score: f32,
    pub fact_text: String,
}

/// Cosine similarity between two vectors.
///
/// Vectors of different lengths are compared over their common prefix, the
/// trailing components of the longer vector are ignored. Returns 0.0 when
/// either magnitude is zero so all-zero vectors never poison the ranking with
/// NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    let (a, b) = (&a[..len], &b[..len]);

    let dot_product: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let magnitude_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        (dot_product / (magnitude_a * magnitude_b)).clamp(-1.0, 1.0)
    }
}

/// Rank candidates against a query embedding and keep the best `k`.
///
/// Candidates arrive in corpus order and the sort is stable, so equal scores
/// keep their original order and the output is deterministic. Fewer than `k`
/// candidates simply yield a shorter result, never an error.
pub fn top_k<'a, I>(query: &[f32], candidates: I, k: usize) -> Vec<ScoredMatch>
where
    I: IntoIterator<Item = (&'a [f32], &'a str)>,
{
    let mut matches: Vec<ScoredMatch> = candidates
        .into_iter()
        .map(|(vector, fact_text)| ScoredMatch {
            score: cosine_similarity(query, vector),
            fact_text: fact_text.to_string(),
        })
        .collect();

    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    matches.truncate(k);
    matches
}
