//! Transformation ratio: how much of the summary's vocabulary is its own

use crate::text;
use std::collections::HashSet;

/// `1 − |summary ∩ sources| / |summary|` over unique tokens.
///
/// A summary with no tokens has nothing rewritten and scores 0.
pub fn transformation_ratio<S: AsRef<str>>(summary: &str, sources: &[S]) -> f64 {
    ratio_with_vocabulary(summary, sources).0
}

/// The ratio plus the number of unique summary tokens it was computed over
pub fn ratio_with_vocabulary<S: AsRef<str>>(summary: &str, sources: &[S]) -> (f64, usize) {
    let summary_tokens = text::tokenize(summary);
    let summary_vocab = text::vocabulary(&summary_tokens);
    if summary_vocab.is_empty() {
        return (0.0, 0);
    }

    let source_tokens: Vec<Vec<String>> = sources
        .iter()
        .map(|s| text::tokenize(s.as_ref()))
        .collect();
    let source_vocab: HashSet<&str> = source_tokens
        .iter()
        .flat_map(|tokens| tokens.iter().map(String::as_str))
        .collect();

    let shared = summary_vocab.intersection(&source_vocab).count();
    let ratio = 1.0 - (shared as f64 / summary_vocab.len() as f64);
    (ratio, summary_vocab.len())
}
