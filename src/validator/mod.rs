//! Validator policies: how check results fold into a verdict
//!
//! Two policies share the primitives in [`crate::detection::checks`]:
//!
//! - [`SummaryValidator`]: run by the summarizer on every generated
//!   summary. Tri-gram Jaccard similarity, failing at or above the limit.
//! - [`ComplianceChecker`]: the stricter audit policy. Word-frequency
//!   cosine similarity, failing only above the limit; quote evidence with
//!   phrase and position; requires http(s) source links.
//!
//! The similarity operators (`>=` vs `>`) differ per policy.
//! Both policies implement [`CopyrightPolicy`] so the regeneration loop and
//! batch audit can run either one.

pub mod summary;
pub mod compliance;

pub use compliance::ComplianceChecker;
pub use summary::SummaryValidator;

use crate::detection::Verdict;
use crate::ledger::ViolationLedger;
use crate::model::{CandidateSummary, SourceDocument};
use crate::policy::ValidatorConfig;

/// A verdict-producing policy over a summary and its sources
pub trait CopyrightPolicy: Send + Sync {
    /// Name for logs and reports
    fn name(&self) -> &str;

    /// Thresholds this policy evaluates against
    fn config(&self) -> &ValidatorConfig;

    /// Validate one summary. Unsafe verdicts are recorded in the policy's
    /// ledger, if it has one.
    fn validate(&self, summary: &CandidateSummary, sources: &[SourceDocument]) -> Verdict;

    /// Validate against the sources attached to the summary itself
    fn validate_attached(&self, summary: &CandidateSummary) -> Verdict {
        self.validate(summary, &summary.sources)
    }
}

/// Comparison strings for every source
pub(crate) fn source_texts(sources: &[SourceDocument]) -> Vec<String> {
    sources.iter().map(SourceDocument::comparison_text).collect()
}

/// Log and record an unsafe verdict
pub(crate) fn record_if_unsafe(
    ledger: Option<&ViolationLedger>,
    policy: &str,
    summary: &CandidateSummary,
    verdict: &Verdict,
) {
    if verdict.is_safe {
        tracing::debug!("[{}] summary {} passed", policy, summary.id);
        return;
    }

    tracing::warn!(
        "[{}] copyright risk in summary {} ({}): {}",
        policy,
        summary.id,
        summary.category,
        verdict.message
    );
    if let Some(ledger) = ledger {
        ledger.record(verdict, &summary.id, &summary.category);
    }
}
