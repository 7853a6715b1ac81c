//! Markdown report renderer
//!
//! Produces a review document for editors: pass/fail summary, failure
//! breakdowns, and one row per rejected summary with its reasons.

use crate::engine::AuditReport;

/// Render an audit report as Markdown
pub fn render_audit(report: &AuditReport) -> String {
    let mut md = String::with_capacity(4096);

    md.push_str("# Copyright Audit Report\n\n");

    md.push_str("| Field | Value |\n|---|---|\n");
    md.push_str(&format!("| **Policy** | {} |\n", report.policy));
    md.push_str(&format!(
        "| **Audited At** | {} |\n",
        report.audited_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    md.push_str(&format!("| **Summaries** | {} |\n", report.total));
    md.push_str(&format!("| **Passed** | {} |\n", report.passed));
    md.push_str(&format!("| **Failed** | {} |\n", report.failed));
    md.push_str(&format!(
        "| **Fallback (skipped)** | {} |\n",
        report.skipped_fallback
    ));
    md.push_str(&format!(
        "| **Pass Rate** | {:.1}% |\n",
        report.pass_rate() * 100.0
    ));
    md.push_str(&format!("| **Duration** | {}ms |\n", report.duration_ms));
    md.push('\n');

    md.push_str("## Summary\n\n");
    if report.failed == 0 {
        md.push_str("✅ **No copyright risks detected.**\n\n");
        return md;
    }

    md.push_str(&format!(
        "⚠️ **{} summary(ies) failed validation.**\n\n",
        report.failed
    ));

    md.push_str("| Check | Failures |\n|---|---:|\n");
    for (kind, count) in &report.failures_by_check {
        md.push_str(&format!("| `{}` | {} |\n", kind, count));
    }
    md.push('\n');

    md.push_str("| Category | Failures |\n|---|---:|\n");
    for (category, count) in &report.failures_by_category {
        md.push_str(&format!("| {} | {} |\n", escape(category), count));
    }
    md.push('\n');

    md.push_str("## Failed Summaries\n\n");
    md.push_str("| ID | Category | Title | Reasons |\n|---|---|---|---|\n");
    for entry in report.failures() {
        md.push_str(&format!(
            "| `{}` | {} | {} | {} |\n",
            entry.summary_id,
            escape(&entry.category),
            escape(&truncate(&entry.title, 60)),
            escape(&entry.verdict.message)
        ));
    }
    md.push('\n');

    md
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max).collect();
        format!("{}…", head)
    }
}

fn escape(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::audit_all;
    use crate::model::{CandidateSummary, SourceDocument};
    use crate::validator::SummaryValidator;

    #[test]
    fn test_clean_report() {
        let report = audit_all(&SummaryValidator::default(), &[]);
        let md = render_audit(&report);
        assert!(md.contains("# Copyright Audit Report"));
        assert!(md.contains("No copyright risks detected"));
        assert!(!md.contains("## Failed Summaries"));
    }

    #[test]
    fn test_failure_rows() {
        let body = "the museum reopened its modern art wing on saturday after a two year \
            renovation that doubled the gallery space and added a rooftop sculpture garden";
        let source = SourceDocument::new("Museum reopens", "https://arts.example/m").with_body(body);
        let summary = CandidateSummary::new("m1", "culture", "Museum | reopens", body)
            .with_sources(vec![source]);

        let report = audit_all(&SummaryValidator::default(), &[summary]);
        let md = render_audit(&report);
        assert!(md.contains("## Failed Summaries"));
        assert!(md.contains("`m1`"));
        assert!(md.contains("Museum \\| reopens"));
        assert!(md.contains("`longQuote`"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("가나다라마", 3), "가나다…");
    }
}
