//! Violation ledger: bounded in-memory log of failed verdicts
//!
//! Created once by whatever process composes the validators and injected
//! into them behind an `Arc`. Appends take a write lock; queries and stats
//! take a read lock and return owned snapshots. Nothing is persisted: a
//! restart starts from an empty ledger.
//!
//! ## Compaction
//!
//! The log holds at most [`MAX_ENTRIES`]. When an append pushes it past that
//! bound, the oldest entries are dropped in one batch so that only the most
//! recent [`RETAINED_AFTER_COMPACTION`] remain.

use crate::detection::{CheckKind, Verdict};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Upper bound on stored entries
pub const MAX_ENTRIES: usize = 1000;
/// Entries kept after a compaction
pub const RETAINED_AFTER_COMPACTION: usize = 500;

/// One failed verdict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationLogEntry {
    pub id: String,
    pub summary_id: String,
    pub category: String,
    pub verdict: Verdict,
    pub logged_at: DateTime<Utc>,
}

/// Filters for [`ViolationLedger::query`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerQuery {
    pub limit: usize,
    pub category: Option<String>,
    pub since: Option<DateTime<Utc>>,
}

impl Default for LedgerQuery {
    fn default() -> Self {
        Self {
            limit: 50,
            category: None,
            since: None,
        }
    }
}

impl LedgerQuery {
    pub fn recent(limit: usize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn since(mut self, since: DateTime<Utc>) -> Self {
        self.since = Some(since);
        self
    }

    fn matches(&self, entry: &ViolationLogEntry) -> bool {
        if let Some(ref category) = self.category {
            if &entry.category != category {
                return false;
            }
        }
        if let Some(since) = self.since {
            if entry.logged_at < since {
                return false;
            }
        }
        true
    }
}

/// Aggregate counts over the current ledger contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerStats {
    pub total_violations: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_violation_type: BTreeMap<CheckKind, usize>,
    pub last_violation_at: Option<DateTime<Utc>>,
}

/// Append-only, capped log of failed verdicts
#[derive(Debug, Default)]
pub struct ViolationLedger {
    entries: RwLock<Vec<ViolationLogEntry>>,
}

impl ViolationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a failed verdict, compacting when the bound is exceeded
    pub fn record(&self, verdict: &Verdict, summary_id: &str, category: &str) -> ViolationLogEntry {
        let entry = ViolationLogEntry {
            id: Uuid::new_v4().to_string(),
            summary_id: summary_id.to_string(),
            category: category.to_string(),
            verdict: verdict.clone(),
            logged_at: Utc::now(),
        };

        let mut entries = self.entries.write();
        entries.push(entry.clone());
        if entries.len() > MAX_ENTRIES {
            let evicted = entries.len() - RETAINED_AFTER_COMPACTION;
            entries.drain(..evicted);
            tracing::info!(
                "Violation ledger compacted: evicted {} oldest entries, {} retained",
                evicted,
                entries.len()
            );
        }

        entry
    }

    /// Matching entries, newest first, at most `query.limit`
    pub fn query(&self, query: &LedgerQuery) -> Vec<ViolationLogEntry> {
        self.entries
            .read()
            .iter()
            .rev()
            .filter(|e| query.matches(e))
            .take(query.limit)
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> LedgerStats {
        let entries = self.entries.read();
        let mut stats = LedgerStats {
            total_violations: entries.len(),
            ..Default::default()
        };

        for entry in entries.iter() {
            *stats.by_category.entry(entry.category.clone()).or_insert(0) += 1;
            for kind in entry.verdict.violations() {
                *stats.by_violation_type.entry(kind).or_insert(0) += 1;
            }
        }
        stats.last_violation_at = entries.iter().map(|e| e.logged_at).max();

        stats
    }

    /// Administrative reset
    pub fn clear(&self) {
        let mut entries = self.entries.write();
        let dropped = entries.len();
        entries.clear();
        tracing::info!("Violation ledger cleared ({} entries dropped)", dropped);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}
