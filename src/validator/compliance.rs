//! Compliance audit policy

use super::{record_if_unsafe, source_texts, CopyrightPolicy};
use crate::detection::{checks, CheckKind, SimilarityMeasure, Verdict};
use crate::ledger::ViolationLedger;
use crate::model::{CandidateSummary, SourceDocument};
use crate::policy::{Comparison, ValidatorConfig};
use crate::CopyguardResult;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Runs `longQuote` (with phrase evidence), `similarity` (cosine, `>`),
/// `rewriting`, `consecutiveMatch` and `sourceLinks`.
#[derive(Debug, Clone, Default)]
pub struct ComplianceChecker {
    config: ValidatorConfig,
    ledger: Option<Arc<ViolationLedger>>,
}

impl ComplianceChecker {
    /// Build a policy over `config`, rejecting thresholds no check can
    /// interpret.
    pub fn new(config: ValidatorConfig) -> CopyguardResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ledger: None,
        })
    }

    pub fn with_ledger(mut self, ledger: Arc<ViolationLedger>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Evaluate without recording. Source links come from `sources`; text
    /// checks compare against each source's title, snippet and body.
    pub fn check(&self, summary: &CandidateSummary, sources: &[SourceDocument]) -> Verdict {
        let cfg = &self.config;
        let summary_text = summary.comparison_text();
        let texts = source_texts(sources);
        let mut results = BTreeMap::new();

        results.insert(
            CheckKind::LongQuote,
            checks::long_quote_located(&summary_text, &texts, cfg.max_quote_length),
        );
        results.insert(
            CheckKind::Similarity,
            checks::similarity(
                &summary_text,
                &texts,
                SimilarityMeasure::Cosine,
                cfg.max_similarity_score,
                Comparison::Exceeds,
            ),
        );
        results.insert(
            CheckKind::Rewriting,
            checks::transformation(&summary_text, &texts, cfg.min_transformation_ratio),
        );
        results.insert(
            CheckKind::ConsecutiveMatch,
            checks::consecutive_match(&summary_text, &texts, cfg.max_quote_length),
        );
        results.insert(CheckKind::SourceLinks, checks::source_links(sources));

        Verdict::from_checks(results)
    }
}

impl CopyrightPolicy for ComplianceChecker {
    fn name(&self) -> &str {
        "compliance"
    }

    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn validate(&self, summary: &CandidateSummary, sources: &[SourceDocument]) -> Verdict {
        let verdict = self.check(summary, sources);
        record_if_unsafe(self.ledger.as_deref(), self.name(), summary, &verdict);
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "The national weather service issued a heat advisory for the \
        metropolitan area as temperatures are expected to climb above thirty five degrees \
        through the weekend with little relief overnight.";

    fn linked_source() -> SourceDocument {
        SourceDocument::new("Heat advisory issued", "https://weather.example/heat")
            .with_body(BODY)
            .with_source_name("Weather Daily")
    }

    fn rewritten() -> CandidateSummary {
        CandidateSummary::new(
            "c1",
            "weather",
            "폭염 주의보 발령",
            "수도권에 주말까지 무더위가 이어질 전망이다",
        )
    }

    #[test]
    fn test_rewritten_linked_summary_passes() {
        let verdict = ComplianceChecker::default().check(&rewritten(), &[linked_source()]);
        assert!(verdict.is_safe, "{}", verdict.message);
        assert_eq!(verdict.checks.len(), 5);
        assert!(verdict.check(CheckKind::Rewriting).is_some());
        assert!(verdict.check(CheckKind::Transformation).is_none());
    }

    #[test]
    fn test_missing_link_fails() {
        let unlinked = SourceDocument::new("Heat advisory issued", "").with_body(BODY);
        let verdict = ComplianceChecker::default().check(&rewritten(), &[unlinked]);
        assert!(!verdict.is_safe);
        assert_eq!(verdict.violations(), vec![CheckKind::SourceLinks]);
    }

    #[test]
    fn test_no_sources_fails_link_check() {
        let verdict = ComplianceChecker::default().check(&rewritten(), &[]);
        assert!(!verdict.is_safe);
        assert!(verdict.violated(CheckKind::SourceLinks));
    }

    #[test]
    fn test_quote_evidence_includes_phrase() {
        let copied = CandidateSummary::new("c2", "weather", "Heat advisory", BODY);
        let verdict = ComplianceChecker::default().check(&copied, &[linked_source()]);
        let quote = verdict.check(CheckKind::LongQuote).unwrap();
        assert!(quote.violation);
        let evidence = quote.evidence.as_deref().unwrap();
        assert!(evidence.contains("national weather service"), "{}", evidence);
    }

    #[test]
    fn test_similarity_passes_at_exact_limit() {
        let config = ValidatorConfig {
            max_similarity_score: 1.0,
            ..Default::default()
        };
        let copied = CandidateSummary::new("c3", "weather", "Heat advisory issued", BODY);
        let verdict = ComplianceChecker::new(config).unwrap().check(&copied, &[linked_source()]);
        assert!(!verdict.violated(CheckKind::Similarity));
        assert!(verdict.violated(CheckKind::LongQuote));
    }

    #[test]
    fn test_out_of_range_similarity_rejected() {
        let config = ValidatorConfig {
            max_similarity_score: 1.5,
            ..Default::default()
        };
        assert!(ComplianceChecker::new(config).is_err());
    }

    #[test]
    fn test_validate_records_to_ledger() {
        let ledger = Arc::new(ViolationLedger::new());
        let checker = ComplianceChecker::default().with_ledger(Arc::clone(&ledger));
        let copied = CandidateSummary::new("c4", "weather", "Heat advisory", BODY);

        checker.validate(&copied, &[linked_source()]);
        checker.validate(&rewritten(), &[linked_source()]);

        let entries = ledger.query(&Default::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].summary_id, "c4");
        assert!(entries[0].verdict.violated(CheckKind::LongQuote));
    }
}
