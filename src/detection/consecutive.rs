//! Longest common word run between the summary and any single source
//!
//! Window sizes are tried from the full summary length downwards, so the
//! first hit for a source is that source's maximum. Sizes that cannot beat
//! the best run already found in an earlier source are skipped.
//!
//! Worst case is O(W² · S) per source; summaries are tens of words long and
//! validation runs in batches, so the simple search is kept.

use crate::text;

/// Length, in words, of the longest summary run found verbatim in one source
pub fn max_consecutive_match<S: AsRef<str>>(summary: &str, sources: &[S]) -> usize {
    let summary_words = text::tokenize(summary);
    if summary_words.is_empty() {
        return 0;
    }

    let mut best = 0;
    for source in sources {
        let haystack = text::normalized(source.as_ref());
        if haystack.is_empty() {
            continue;
        }
        if let Some(run) = longest_run_in(&summary_words, &haystack, best) {
            best = run;
        }
        if best == summary_words.len() {
            break;
        }
    }
    best
}

/// Largest window size above `floor` whose words occur in `haystack`
fn longest_run_in(words: &[String], haystack: &str, floor: usize) -> Option<usize> {
    for size in (floor + 1..=words.len()).rev() {
        let found = words
            .windows(size)
            .any(|window| haystack.contains(&window.join(" ")));
        if found {
            return Some(size);
        }
    }
    None
}
