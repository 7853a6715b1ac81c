//! Summarizer-side validation policy

use super::{record_if_unsafe, source_texts, CopyrightPolicy};
use crate::detection::{checks, CheckKind, SimilarityMeasure, Verdict};
use crate::ledger::ViolationLedger;
use crate::model::{CandidateSummary, SourceDocument};
use crate::policy::{Comparison, ValidatorConfig};
use crate::CopyguardResult;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Runs `longQuote`, `similarity` (Jaccard, `>=`), `transformation` and
/// `consecutiveMatch`.
#[derive(Debug, Clone, Default)]
pub struct SummaryValidator {
    config: ValidatorConfig,
    ledger: Option<Arc<ViolationLedger>>,
}

impl SummaryValidator {
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

    /// Evaluate raw texts. Pure: never touches the ledger.
    pub fn evaluate<S: AsRef<str>>(&self, summary: &str, sources: &[S]) -> Verdict {
        let cfg = &self.config;
        let mut results = BTreeMap::new();

        results.insert(
            CheckKind::LongQuote,
            checks::long_quote(summary, sources, cfg.max_quote_length),
        );
        results.insert(
            CheckKind::Similarity,
            checks::similarity(
                summary,
                sources,
                SimilarityMeasure::Jaccard,
                cfg.max_similarity_score,
                Comparison::Reaches,
            ),
        );
        results.insert(
            CheckKind::Transformation,
            checks::transformation(summary, sources, cfg.min_transformation_ratio),
        );
        results.insert(
            CheckKind::ConsecutiveMatch,
            checks::consecutive_match(summary, sources, cfg.max_quote_length),
        );

        Verdict::from_checks(results)
    }
}

impl CopyrightPolicy for SummaryValidator {
    fn name(&self) -> &str {
        "summary"
    }

    fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    fn validate(&self, summary: &CandidateSummary, sources: &[SourceDocument]) -> Verdict {
        let verdict = self.evaluate(&summary.comparison_text(), &source_texts(sources));
        record_if_unsafe(self.ledger.as_deref(), self.name(), summary, &verdict);
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "Lawmakers passed the long awaited infrastructure bill late on Thursday \
        after months of negotiation between the two parties over funding for roads, \
        bridges and broadband in rural districts.";

    fn source_doc() -> SourceDocument {
        SourceDocument::new("Infrastructure bill passes", "https://news.example/bill")
            .with_body(SOURCE)
    }

    #[test]
    fn test_rewritten_summary_is_safe() {
        let validator = SummaryValidator::default();
        let verdict = validator.evaluate(
            "Congress finally approved a major spending package for transport and internet access",
            &[SOURCE],
        );
        assert!(verdict.is_safe, "{}", verdict.message);
        assert_eq!(verdict.checks.len(), 4);
        assert!(verdict.check(CheckKind::SourceLinks).is_none());
    }

    #[test]
    fn test_copied_summary_fails_every_check() {
        let validator = SummaryValidator::default();
        let verdict = validator.evaluate(SOURCE, &[SOURCE]);
        assert!(!verdict.is_safe);
        for kind in [
            CheckKind::LongQuote,
            CheckKind::Similarity,
            CheckKind::Transformation,
            CheckKind::ConsecutiveMatch,
        ] {
            assert!(verdict.violated(kind), "{} should fail", kind);
        }
    }

    #[test]
    fn test_similarity_fails_at_exact_limit() {
        let config = ValidatorConfig {
            max_similarity_score: 1.0,
            ..Default::default()
        };
        let verdict = SummaryValidator::new(config).unwrap().evaluate(SOURCE, &[SOURCE]);
        assert!(verdict.violated(CheckKind::Similarity));
    }

    #[test]
    fn test_zero_quote_length_rejected() {
        let config = ValidatorConfig {
            max_quote_length: 0,
            ..Default::default()
        };
        let err = SummaryValidator::new(config).unwrap_err();
        assert!(matches!(err, crate::CopyguardError::Config(_)));
    }

    #[test]
    fn test_one_word_window_keeps_empty_summary_safe() {
        let config = ValidatorConfig {
            max_quote_length: 1,
            ..Default::default()
        };
        let validator = SummaryValidator::new(config).unwrap();
        let empty = CandidateSummary::new("e", "politics", "", "");
        let verdict = validator.validate(&empty, &[source_doc()]);
        assert!(verdict.is_safe, "{}", verdict.message);
    }

    #[test]
    fn test_records_unsafe_verdicts_only() {
        let ledger = Arc::new(ViolationLedger::new());
        let validator = SummaryValidator::default().with_ledger(Arc::clone(&ledger));

        let copied = CandidateSummary::new("bad", "politics", "Infrastructure bill passes", SOURCE);
        let rewritten = CandidateSummary::new(
            "good",
            "politics",
            "공공 투자 확대",
            "의회가 교통과 통신망 예산을 승인했다",
        );

        assert!(!validator.validate(&copied, &[source_doc()]).is_safe);
        assert!(validator.validate(&rewritten, &[source_doc()]).is_safe);

        assert_eq!(ledger.len(), 1);
        let stats = ledger.stats();
        assert_eq!(stats.by_category.get("politics"), Some(&1));
    }

    #[test]
    fn test_validate_attached_uses_summary_sources() {
        let validator = SummaryValidator::default();
        let summary = CandidateSummary::new("s", "politics", "Infrastructure bill passes", SOURCE)
            .with_sources(vec![source_doc()]);
        assert!(!validator.validate_attached(&summary).is_safe);
    }
}
