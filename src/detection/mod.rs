//! Detection primitives: check taxonomy, per-check results and verdicts
//!
//! Each submodule implements one text-overlap heuristic as a pure function.
//! `checks` wraps them into [`CheckResult`]s against configured thresholds;
//! the policy compositions in [`crate::validator`] decide which checks run
//! and how their results fold into a [`Verdict`].

pub mod quote;
pub mod similarity;
pub mod transformation;
pub mod consecutive;
pub mod checks;

pub use quote::{find_long_quote, has_long_quote, QuoteMatch};
pub use similarity::{cosine_similarity, jaccard_similarity, max_cosine, max_jaccard, SimilarityMeasure};
pub use transformation::transformation_ratio;
pub use consecutive::max_consecutive_match;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Message attached to a verdict with no failing checks
pub const SAFE_MESSAGE: &str = "저작권 검증 통과";

// ─── Check Taxonomy ─────────────────────────────────────────────────

/// Every check either validator variant can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckKind {
    /// A window of `max_quote_length` words appears verbatim in a source
    LongQuote,
    /// Max similarity to any source is over the threshold
    Similarity,
    /// Too much summary vocabulary comes from the sources
    Transformation,
    /// Longest shared word run reaches the quote threshold
    ConsecutiveMatch,
    /// Compliance checker's name for the transformation check
    Rewriting,
    /// Sources are missing http(s) links
    SourceLinks,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LongQuote => "longQuote",
            Self::Similarity => "similarity",
            Self::Transformation => "transformation",
            Self::ConsecutiveMatch => "consecutiveMatch",
            Self::Rewriting => "rewriting",
            Self::SourceLinks => "sourceLinks",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Check Results ──────────────────────────────────────────────────

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Whether the check failed
    pub violation: bool,
    /// Measured value (score, ratio, word count); None for boolean checks
    pub metric: Option<f64>,
    /// Human-readable description, set when the check failed
    pub reason: Option<String>,
    /// Offending text or detail backing the reason
    pub evidence: Option<String>,
}

impl CheckResult {
    pub fn pass(metric: Option<f64>) -> Self {
        Self {
            violation: false,
            metric,
            reason: None,
            evidence: None,
        }
    }

    pub fn fail(metric: Option<f64>, reason: impl Into<String>) -> Self {
        Self {
            violation: true,
            metric,
            reason: Some(reason.into()),
            evidence: None,
        }
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }
}

// ─── Verdict ────────────────────────────────────────────────────────

/// Pass/fail decision for one summary plus per-check diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub is_safe: bool,
    pub checks: BTreeMap<CheckKind, CheckResult>,
    pub message: String,
}

impl Verdict {
    /// Fold check results: safe iff nothing failed, message lists failures
    /// in check order.
    pub fn from_checks(checks: BTreeMap<CheckKind, CheckResult>) -> Self {
        let reasons: Vec<&str> = checks
            .values()
            .filter(|c| c.violation)
            .filter_map(|c| c.reason.as_deref())
            .collect();
        let is_safe = checks.values().all(|c| !c.violation);
        let message = if is_safe {
            SAFE_MESSAGE.to_string()
        } else {
            reasons.join(", ")
        };

        Self {
            is_safe,
            checks,
            message,
        }
    }

    /// Result for a given check, if it ran
    pub fn check(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.checks.get(&kind)
    }

    /// Whether the given check ran and failed
    pub fn violated(&self, kind: CheckKind) -> bool {
        self.check(kind).map(|c| c.violation).unwrap_or(false)
    }

    /// Kinds of all failing checks
    pub fn violations(&self) -> Vec<CheckKind> {
        self.checks
            .iter()
            .filter(|(_, c)| c.violation)
            .map(|(kind, _)| *kind)
            .collect()
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.is_safe { "SAFE" } else { "UNSAFE" };
        write!(f, "[{}] {}", status, self.message)
    }
}
