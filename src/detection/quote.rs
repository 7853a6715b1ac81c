//! Verbatim-quote detection
//!
//! Slides a fixed-size word window across the summary and looks for each
//! window, space-joined, inside the tokenized text of all sources combined.

use crate::text;
use serde::{Deserialize, Serialize};

/// Default window, in words
pub const DEFAULT_QUOTE_WINDOW: usize = 15;
/// Longest phrase kept for display before truncation
const PHRASE_DISPLAY_CHARS: usize = 50;

/// First verbatim window found in the sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteMatch {
    /// Offending phrase, truncated for display
    pub phrase: String,
    /// Word index of the window start within the tokenized summary
    pub position: usize,
    /// Window length in words
    pub window: usize,
}

/// Whether any `window`-word run of the summary appears verbatim in a source
pub fn has_long_quote<S: AsRef<str>>(summary: &str, sources: &[S], window: usize) -> bool {
    find_long_quote(summary, sources, window).is_some()
}

/// Locate the first `window`-word run of the summary found in the sources.
///
/// Sources are concatenated before searching. A summary shorter than the
/// window, or a zero window, never matches.
pub fn find_long_quote<S: AsRef<str>>(
    summary: &str,
    sources: &[S],
    window: usize,
) -> Option<QuoteMatch> {
    let summary_words = text::tokenize(summary);
    if window == 0 || summary_words.len() < window {
        return None;
    }

    let combined = sources
        .iter()
        .map(|s| text::normalized(s.as_ref()))
        .collect::<Vec<_>>()
        .join(" ");
    if combined.is_empty() {
        return None;
    }

    summary_words
        .windows(window)
        .enumerate()
        .find_map(|(position, words)| {
            let phrase = words.join(" ");
            if combined.contains(&phrase) {
                Some(QuoteMatch {
                    phrase: truncate_for_display(&phrase),
                    position,
                    window,
                })
            } else {
                None
            }
        })
}

fn truncate_for_display(phrase: &str) -> String {
    if phrase.chars().count() <= PHRASE_DISPLAY_CHARS {
        return phrase.to_string();
    }
    let head: String = phrase.chars().take(PHRASE_DISPLAY_CHARS).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &str =
        "the quick brown fox jumps over the lazy dog and then runs away into the forest";

    fn first_words(text: &str, n: usize) -> String {
        text.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_fifteen_word_copy_is_flagged() {
        let summary = first_words(FOX, 15);
        assert!(has_long_quote(&summary, &[FOX], 15));
    }

    #[test]
    fn test_fourteen_word_copy_is_not_flagged() {
        let summary = format!("{} meadow", first_words(FOX, 14));
        assert!(!has_long_quote(&summary, &[FOX], 15));
    }

    #[test]
    fn test_short_summary_never_matches() {
        assert!(!has_long_quote("the quick brown fox", &[FOX], 15));
        assert!(find_long_quote("", &[FOX], 15).is_none());
    }

    #[test]
    fn test_zero_window_never_matches() {
        assert!(!has_long_quote(FOX, &[FOX], 0));
    }

    #[test]
    fn test_empty_sources_never_match() {
        let no_sources: [&str; 0] = [];
        assert!(!has_long_quote(FOX, &no_sources, 5));
        assert!(!has_long_quote(FOX, &["", "  "], 5));
    }

    #[test]
    fn test_match_reports_position_and_truncates() {
        let summary = format!("intro words here {}", FOX);
        let m = find_long_quote(&summary, &["unrelated text", FOX], 15).unwrap();
        assert_eq!(m.position, 3);
        assert_eq!(m.window, 15);
        assert!(m.phrase.ends_with("..."));
        assert_eq!(m.phrase.chars().count(), PHRASE_DISPLAY_CHARS + 3);
    }

    #[test]
    fn test_punctuation_does_not_hide_quote() {
        let source = "The quick, brown fox jumps: over the lazy dog!";
        let summary = "the quick brown fox jumps over";
        assert!(has_long_quote(summary, &[source], 6));
    }
}
