//! Similarity scoring: tri-gram Jaccard and word-frequency cosine
//!
//! Two interchangeable channels over the shared tokenizer:
//!
//! 1. **Jaccard over tri-grams**: catches reused phrasing; three words in a
//!    row must line up for a tri-gram to count.
//!
//! 2. **Cosine over word frequencies**: order-blind; catches summaries that
//!    shuffle a source's wording without keeping its phrases intact.
//!
//! Both report the worst case over all sources: a summary only needs to
//! resemble one article too closely to be a problem.

use crate::text;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Which scorer a policy uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMeasure {
    Jaccard,
    Cosine,
}

impl SimilarityMeasure {
    /// Max score of the summary against any source
    pub fn max_score<S: AsRef<str>>(&self, summary: &str, sources: &[S]) -> f64 {
        match self {
            Self::Jaccard => max_jaccard(summary, sources),
            Self::Cosine => max_cosine(summary, sources),
        }
    }
}

impl std::fmt::Display for SimilarityMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Jaccard => write!(f, "jaccard"),
            Self::Cosine => write!(f, "cosine"),
        }
    }
}

// ─── Set / Vector Scores ────────────────────────────────────────────

/// |A ∩ B| / |A ∪ B|, 0 when both are empty
pub fn jaccard_similarity(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Normalized dot product, 0 when either vector has zero norm
pub fn cosine_similarity(a: &HashMap<&str, usize>, b: &HashMap<&str, usize>) -> f64 {
    let norm_a = norm(a);
    let norm_b = norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Iterate the smaller map for the dot product
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .iter()
        .filter_map(|(word, &count)| large.get(word).map(|&other| (count * other) as f64))
        .sum();

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

fn norm(v: &HashMap<&str, usize>) -> f64 {
    v.values()
        .map(|&c| (c * c) as f64)
        .sum::<f64>()
        .sqrt()
}

// ─── Worst Case Over Sources ────────────────────────────────────────

/// Highest tri-gram Jaccard score against any source
pub fn max_jaccard<S: AsRef<str>>(summary: &str, sources: &[S]) -> f64 {
    let summary_grams = text::trigrams(&text::tokenize(summary));
    sources
        .iter()
        .map(|source| {
            let source_grams = text::trigrams(&text::tokenize(source.as_ref()));
            jaccard_similarity(&summary_grams, &source_grams)
        })
        .fold(0.0, f64::max)
}

/// Highest word-frequency cosine score against any source
pub fn max_cosine<S: AsRef<str>>(summary: &str, sources: &[S]) -> f64 {
    let summary_tokens = text::tokenize(summary);
    let summary_vec = text::word_frequencies(&summary_tokens);
    sources
        .iter()
        .map(|source| {
            let source_tokens = text::tokenize(source.as_ref());
            let source_vec = text::word_frequencies(&source_tokens);
            cosine_similarity(&summary_vec, &source_vec)
        })
        .fold(0.0, f64::max)
}
