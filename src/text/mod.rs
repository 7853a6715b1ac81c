//! Text normalization shared by every check
//!
//! `tokenize` is the single definition of "what counts as a word". The
//! quote detector, both similarity scorers, the transformation ratio and the
//! longest-run finder all go through it, so a Korean summary and a Korean
//! source article are always compared on identical token streams.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// N-gram size used by the Jaccard scorer
pub const TRIGRAM: usize = 3;

/// Anything that is not a word character, whitespace, or a Hangul syllable.
/// `\w` is Unicode-aware in `regex`; the explicit `가-힣` range keeps Hangul
/// syllables even if the word class ever gets narrowed.
static NON_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w\s가-힣]").expect("static tokenizer pattern is valid")
});

// ─── Tokenizer ──────────────────────────────────────────────────────

/// Lower-case, strip punctuation, split on whitespace, drop 1-char tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(str::to_string)
        .collect()
}

/// Re-join tokens with single spaces (the form substring checks run against)
pub fn joined(tokens: &[String]) -> String {
    tokens.join(" ")
}

/// Tokenize and re-join in one step
pub fn normalized(text: &str) -> String {
    joined(&tokenize(text))
}

// ─── N-gram / Set Builders ──────────────────────────────────────────

/// Set of contiguous `n`-token sequences, space-joined.
pub fn ngrams(tokens: &[String], n: usize) -> HashSet<String> {
    let mut grams = HashSet::new();
    if n == 0 || tokens.len() < n {
        return grams;
    }
    for window in tokens.windows(n) {
        grams.insert(window.join(" "));
    }
    grams
}

/// Tri-gram set for the Jaccard scorer
pub fn trigrams(tokens: &[String]) -> HashSet<String> {
    ngrams(tokens, TRIGRAM)
}

/// Sparse word → count vector
pub fn word_frequencies(tokens: &[String]) -> HashMap<&str, usize> {
    let mut freq: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *freq.entry(token.as_str()).or_insert(0) += 1;
    }
    freq
}

/// Unique tokens
pub fn vocabulary(tokens: &[String]) -> HashSet<&str> {
    tokens.iter().map(String::as_str).collect()
}

// ─── Tests ──────────────────────────────────────────────────────────
