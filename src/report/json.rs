//! JSON report renderer

use crate::engine::AuditReport;
use crate::ledger::LedgerStats;
use crate::CopyguardResult;

/// Render an audit report as pretty-printed JSON
pub fn render_audit(report: &AuditReport) -> CopyguardResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render ledger statistics as pretty-printed JSON
pub fn render_stats(stats: &LedgerStats) -> CopyguardResult<String> {
    Ok(serde_json::to_string_pretty(stats)?)
}
