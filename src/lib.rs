//! # copyguard: Copyright-Safety Validator for AI News Summaries
//!
//! Decides whether an AI-generated summary is "too close" to the articles it
//! was written from. Every check runs on one shared tokenizer; the results
//! fold into a verdict under one of two policies, and failed verdicts land
//! in a bounded in-memory ledger for auditing.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  summary text          source texts (title+snippet+body)     │
//! │        └──────────┬──────────┘                               │
//! │                   ▼                                          │
//! │             text::tokenize  (Unicode + Hangul aware)         │
//! │                   │                                          │
//! │   ┌───────────┬───┴─────────┬──────────────┐                 │
//! │   ▼           ▼             ▼              ▼                 │
//! │ quote     similarity   transformation  consecutive           │
//! │ (window)  (jaccard /   (vocabulary     (longest run)         │
//! │            cosine)      overlap)                             │
//! │   └───────────┴──────┬──────┴──────────────┘                 │
//! │                      ▼                                       │
//! │   SummaryValidator │ ComplianceChecker  →  Verdict           │
//! │                      │ (unsafe)                              │
//! │                      ▼                                       │
//! │               ViolationLedger (cap 1000 → 500)               │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Capabilities
//!
//! - **Verbatim quotes**: sliding word windows matched against all sources
//! - **Similarity**: tri-gram Jaccard and word-frequency cosine, worst case
//!   over sources
//! - **Transformation ratio**: share of summary vocabulary not in any source
//! - **Longest common run**: largest contiguous word span shared with a source
//! - **Two policies**: summarizer-side validator and stricter compliance
//!   checker with source-link requirements
//! - **Regeneration loop**: retry the summarizer until a safe summary appears
//! - **Batch audit**: parallel re-validation with JSON / Markdown reports
//! - **Config**: `.copyguard.toml` thresholds

pub mod text;
pub mod detection;
pub mod policy;
pub mod model;
pub mod validator;
pub mod ledger;
pub mod engine;
pub mod report;

// Re-exports for convenience
pub use detection::{CheckKind, CheckResult, Verdict};
pub use engine::{audit_all, AuditReport, RegenerationOutcome, Regenerator, Summarizer};
pub use ledger::{LedgerQuery, LedgerStats, ViolationLedger, ViolationLogEntry};
pub use model::{CandidateSummary, SourceDocument};
pub use policy::ValidatorConfig;
pub use report::{render_audit, write_audit, ReportFormat};
pub use text::tokenize;
pub use validator::{ComplianceChecker, CopyrightPolicy, SummaryValidator};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyguardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Summarizer error: {0}")]
    Summarizer(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type CopyguardResult<T> = Result<T, CopyguardError>;
