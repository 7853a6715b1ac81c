//! Threshold checks: turn raw heuristics into [`CheckResult`]s
//!
//! These are the building blocks both validator policies compose. Each
//! takes its limit (and, for similarity, its comparison operator) as an
//! argument; nothing here reads configuration on its own.

use super::{consecutive, quote, similarity::SimilarityMeasure, transformation, CheckResult};
use crate::model::SourceDocument;
use crate::policy::Comparison;

/// Verbatim window check, boolean only
pub fn long_quote<S: AsRef<str>>(summary: &str, sources: &[S], window: usize) -> CheckResult {
    if quote::has_long_quote(summary, sources, window) {
        CheckResult::fail(None, quote_reason(window))
    } else {
        CheckResult::pass(None)
    }
}

/// Verbatim window check that reports the offending phrase and its position.
/// The position goes in `evidence`; `metric` stays `None` as in [`long_quote`].
pub fn long_quote_located<S: AsRef<str>>(
    summary: &str,
    sources: &[S],
    window: usize,
) -> CheckResult {
    match quote::find_long_quote(summary, sources, window) {
        Some(m) => CheckResult::fail(None, quote_reason(window))
            .with_evidence(format!("\"{}\" (단어 위치 {})", m.phrase, m.position)),
        None => CheckResult::pass(None),
    }
}

fn quote_reason(window: usize) -> String {
    format!("{}단어 이상 직접 인용", window)
}

/// Worst-case similarity against the sources
pub fn similarity<S: AsRef<str>>(
    summary: &str,
    sources: &[S],
    measure: SimilarityMeasure,
    limit: f64,
    comparison: Comparison,
) -> CheckResult {
    let score = measure.max_score(summary, sources);
    if comparison.violated(score, limit) {
        CheckResult::fail(
            Some(score),
            format!("유사도 과다 ({:.1}%)", score * 100.0),
        )
        .with_evidence(format!("{} {:.3} / 기준 {:.3}", measure, score, limit))
    } else {
        CheckResult::pass(Some(score))
    }
}

/// Share of summary vocabulary not borrowed from the sources.
///
/// Fails at or below `min_ratio`. An empty summary reports 0 but does not
/// fail: there is no vocabulary to have copied.
pub fn transformation<S: AsRef<str>>(summary: &str, sources: &[S], min_ratio: f64) -> CheckResult {
    let (ratio, vocabulary) = transformation::ratio_with_vocabulary(summary, sources);
    if vocabulary == 0 {
        return CheckResult::pass(Some(ratio));
    }
    if ratio <= min_ratio {
        CheckResult::fail(
            Some(ratio),
            format!("변형 비율 부족 ({:.1}%)", ratio * 100.0),
        )
    } else {
        CheckResult::pass(Some(ratio))
    }
}

/// Longest shared word run; fails at or above `max_run`. A zero limit never
/// fails, matching the quote check's zero window.
pub fn consecutive_match<S: AsRef<str>>(summary: &str, sources: &[S], max_run: usize) -> CheckResult {
    let run = consecutive::max_consecutive_match(summary, sources);
    if max_run > 0 && run >= max_run {
        CheckResult::fail(Some(run as f64), format!("연속 {}단어 일치", run))
    } else {
        CheckResult::pass(Some(run as f64))
    }
}

/// At least one source, and every source carries an http(s) link
pub fn source_links(sources: &[SourceDocument]) -> CheckResult {
    let linked = sources.iter().filter(|s| s.has_web_link()).count();
    if sources.is_empty() {
        return CheckResult::fail(Some(0.0), "출처 없음");
    }

    let missing: Vec<&str> = sources
        .iter()
        .filter(|s| !s.has_web_link())
        .map(|s| {
            if s.source_name.is_empty() {
                s.title.as_str()
            } else {
                s.source_name.as_str()
            }
        })
        .collect();

    if missing.is_empty() {
        CheckResult::pass(Some(linked as f64))
    } else {
        CheckResult::fail(
            Some(linked as f64),
            format!("출처 링크 누락 ({}건)", missing.len()),
        )
        .with_evidence(missing.join(", "))
    }
}
