//! Batch audit: re-validate every stored summary in parallel
//!
//! Each summary is checked against its own attached sources on the rayon
//! pool. Validations are independent; the only shared state is the policy's
//! ledger, which serializes its own appends.

use crate::detection::{CheckKind, Verdict};
use crate::model::CandidateSummary;
use crate::validator::CopyrightPolicy;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

/// One audited summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub summary_id: String,
    pub category: String,
    pub title: String,
    pub verdict: Verdict,
}

/// Result of auditing a batch of summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub policy: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped_fallback: usize,
    pub failures_by_category: BTreeMap<String, usize>,
    pub failures_by_check: BTreeMap<CheckKind, usize>,
    pub results: Vec<AuditEntry>,
    pub duration_ms: u64,
    pub audited_at: DateTime<Utc>,
}

impl AuditReport {
    /// Entries whose verdict failed
    pub fn failures(&self) -> Vec<&AuditEntry> {
        self.results.iter().filter(|e| !e.verdict.is_safe).collect()
    }

    /// Share of audited (non-fallback) summaries that passed
    pub fn pass_rate(&self) -> f64 {
        let audited = self.passed + self.failed;
        if audited == 0 {
            1.0
        } else {
            self.passed as f64 / audited as f64
        }
    }
}

/// Validate every non-fallback summary against its attached sources
pub fn audit_all<P: CopyrightPolicy + ?Sized>(
    policy: &P,
    summaries: &[CandidateSummary],
) -> AuditReport {
    let start = Instant::now();
    tracing::info!(
        "Auditing {} summaries with {} policy...",
        summaries.len(),
        policy.name()
    );

    let results: Vec<AuditEntry> = summaries
        .par_iter()
        .filter(|s| !s.is_fallback)
        .map(|summary| AuditEntry {
            summary_id: summary.id.clone(),
            category: summary.category.clone(),
            title: summary.title.clone(),
            verdict: policy.validate_attached(summary),
        })
        .collect();

    let skipped_fallback = summaries.len() - results.len();
    let mut failures_by_category = BTreeMap::new();
    let mut failures_by_check = BTreeMap::new();
    for entry in results.iter().filter(|e| !e.verdict.is_safe) {
        *failures_by_category.entry(entry.category.clone()).or_insert(0) += 1;
        for kind in entry.verdict.violations() {
            *failures_by_check.entry(kind).or_insert(0) += 1;
        }
    }
    let failed = results.iter().filter(|e| !e.verdict.is_safe).count();
    let passed = results.len() - failed;
    let duration_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        "Audit complete in {}ms: {} passed, {} failed, {} fallback skipped",
        duration_ms,
        passed,
        failed,
        skipped_fallback
    );

    AuditReport {
        policy: policy.name().to_string(),
        total: summaries.len(),
        passed,
        failed,
        skipped_fallback,
        failures_by_category,
        failures_by_check,
        results,
        duration_ms,
        audited_at: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::ViolationLedger;
    use crate::model::SourceDocument;
    use crate::validator::{ComplianceChecker, SummaryValidator};
    use std::sync::Arc;

    const BODY: &str = "the festival will return to the riverside park this summer with more \
        than forty bands performing across three stages over a single long weekend";

    fn batch() -> Vec<CandidateSummary> {
        let source = SourceDocument::new("Festival returns", "https://arts.example/fest").with_body(BODY);
        let copied = |id: &str, category: &str| {
            CandidateSummary::new(id, category, "Festival returns", BODY)
                .with_sources(vec![source.clone()])
        };
        let rewritten = |id: &str, category: &str| {
            CandidateSummary::new(id, category, "음악 축제 개막", "올여름 강변 공원에서 대형 공연이 열린다")
                .with_sources(vec![source.clone()])
        };

        vec![
            copied("1", "culture"),
            rewritten("2", "culture"),
            copied("3", "local"),
            rewritten("4", "local"),
            copied("5", "culture").as_fallback(),
        ]
    }

    #[test]
    fn test_audit_counts() {
        let report = audit_all(&SummaryValidator::default(), &batch());
        assert_eq!(report.policy, "summary");
        assert_eq!(report.total, 5);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 2);
        assert_eq!(report.skipped_fallback, 1);
        assert_eq!(report.failures_by_category.get("culture"), Some(&1));
        assert_eq!(report.failures_by_category.get("local"), Some(&1));
        assert_eq!(report.failures_by_check.get(&CheckKind::LongQuote), Some(&2));
        assert!((report.pass_rate() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_audit_preserves_input_order() {
        let report = audit_all(&SummaryValidator::default(), &batch());
        let ids: Vec<&str> = report.results.iter().map(|e| e.summary_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
        let failed: Vec<&str> = report.failures().iter().map(|e| e.summary_id.as_str()).collect();
        assert_eq!(failed, vec!["1", "3"]);
    }

    #[test]
    fn test_parallel_audit_records_every_failure() {
        let ledger = Arc::new(ViolationLedger::new());
        let checker = ComplianceChecker::default().with_ledger(Arc::clone(&ledger));
        let summaries: Vec<CandidateSummary> = batch().into_iter().cycle().take(100).collect();

        let report = audit_all(&checker, &summaries);
        assert_eq!(report.failed, ledger.len());
        assert_eq!(report.failed, 40);
    }

    #[test]
    fn test_empty_batch() {
        let report = audit_all(&SummaryValidator::default(), &[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.pass_rate(), 1.0);
    }
}
