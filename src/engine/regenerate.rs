//! Regenerate-on-failure loop
//!
//! Validation is deterministic, so retrying it on the same text is
//! pointless: a retry means asking the summarizer for a new text. The loop
//! asks up to `max_attempts` times and keeps the first safe result. When
//! every attempt fails, the previous (already published) summary is kept.

use crate::detection::Verdict;
use crate::model::{CandidateSummary, SourceDocument};
use crate::validator::CopyrightPolicy;
use crate::CopyguardResult;

/// Attempts per regeneration
pub const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// The external LLM summarizer
pub trait Summarizer: Send + Sync {
    /// Produce a summary of `sources` for `category`
    fn summarize(
        &self,
        category: &str,
        sources: &[SourceDocument],
    ) -> CopyguardResult<CandidateSummary>;
}

/// How a regeneration run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RegenerationOutcome {
    /// A generated summary passed validation (verdict attached)
    Accepted {
        summary: CandidateSummary,
        attempts: usize,
    },
    /// The summarizer fell back to a non-LLM summary; not validated
    Fallback {
        summary: CandidateSummary,
        attempts: usize,
    },
    /// Every attempt failed; the previous safe summary stays in place
    KeptPrevious {
        summary: CandidateSummary,
        attempts: usize,
        last_verdict: Option<Verdict>,
    },
    /// Every attempt failed and there was nothing to fall back on
    Exhausted {
        attempts: usize,
        last_verdict: Option<Verdict>,
    },
}

impl RegenerationOutcome {
    /// Summary to publish, if any
    pub fn summary(&self) -> Option<&CandidateSummary> {
        match self {
            Self::Accepted { summary, .. }
            | Self::Fallback { summary, .. }
            | Self::KeptPrevious { summary, .. } => Some(summary),
            Self::Exhausted { .. } => None,
        }
    }

    pub fn attempts(&self) -> usize {
        match self {
            Self::Accepted { attempts, .. }
            | Self::Fallback { attempts, .. }
            | Self::KeptPrevious { attempts, .. }
            | Self::Exhausted { attempts, .. } => *attempts,
        }
    }

    /// Whether a new summary replaced the previous one
    pub fn is_new(&self) -> bool {
        matches!(self, Self::Accepted { .. } | Self::Fallback { .. })
    }
}

/// Summarize → validate → retry
pub struct Regenerator<P, S> {
    policy: P,
    summarizer: S,
    max_attempts: usize,
}

impl<P: CopyrightPolicy, S: Summarizer> Regenerator<P, S> {
    pub fn new(policy: P, summarizer: S) -> Self {
        Self {
            policy,
            summarizer,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Generate a safe summary for `category`, keeping `previous` if no
    /// attempt passes. Summarizer errors count as failed attempts.
    pub fn regenerate(
        &self,
        category: &str,
        sources: &[SourceDocument],
        previous: Option<CandidateSummary>,
    ) -> RegenerationOutcome {
        let mut last_verdict = None;

        for attempt in 1..=self.max_attempts {
            let mut candidate = match self.summarizer.summarize(category, sources) {
                Ok(candidate) => candidate,
                Err(e) => {
                    tracing::warn!(
                        "Summarizer failed for {} (attempt {}/{}): {}",
                        category,
                        attempt,
                        self.max_attempts,
                        e
                    );
                    continue;
                }
            };

            if candidate.is_fallback {
                tracing::info!("Summarizer returned a fallback summary for {}", category);
                return RegenerationOutcome::Fallback {
                    summary: candidate,
                    attempts: attempt,
                };
            }

            let verdict = self.policy.validate(&candidate, sources);
            if verdict.is_safe {
                tracing::info!(
                    "Accepted summary {} for {} on attempt {}/{}",
                    candidate.id,
                    category,
                    attempt,
                    self.max_attempts
                );
                candidate.attach_verdict(verdict);
                return RegenerationOutcome::Accepted {
                    summary: candidate,
                    attempts: attempt,
                };
            }

            tracing::warn!(
                "Rejected summary for {} (attempt {}/{}): {}",
                category,
                attempt,
                self.max_attempts,
                verdict.message
            );
            last_verdict = Some(verdict);
        }

        match previous {
            Some(summary) => {
                tracing::warn!(
                    "No safe summary for {} after {} attempts, keeping {}",
                    category,
                    self.max_attempts,
                    summary.id
                );
                RegenerationOutcome::KeptPrevious {
                    summary,
                    attempts: self.max_attempts,
                    last_verdict,
                }
            }
            None => {
                tracing::warn!(
                    "No safe summary for {} after {} attempts",
                    category,
                    self.max_attempts
                );
                RegenerationOutcome::Exhausted {
                    attempts: self.max_attempts,
                    last_verdict,
                }
            }
        }
    }
}
