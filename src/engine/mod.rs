//! # Validation Engine
//!
//! Glue between the validator policies and their callers:
//!
//! - `regenerate`: retry loop around the external summarizer (generate,
//!   validate, accept the first safe attempt or keep the previous summary)
//! - `audit`: parallel "validate everything" batch run feeding reports

pub mod regenerate;
pub mod audit;

pub use audit::{audit_all, AuditEntry, AuditReport};
pub use regenerate::{RegenerationOutcome, Regenerator, Summarizer, DEFAULT_MAX_ATTEMPTS};

use crate::detection::Verdict;
use crate::model::CandidateSummary;
use crate::validator::CopyrightPolicy;

/// Validate a freshly generated summary against its attached sources and
/// store the result on it. Fallback summaries are left unvalidated.
pub fn validate_and_attach(
    policy: &dyn CopyrightPolicy,
    summary: &mut CandidateSummary,
) -> Option<Verdict> {
    if summary.is_fallback {
        tracing::debug!("Skipping validation for fallback summary {}", summary.id);
        return None;
    }

    let verdict = policy.validate_attached(summary);
    summary.attach_verdict(verdict.clone());
    Some(verdict)
}
