//! Report generation: JSON and Markdown output
//!
//! Renders batch audit results and ledger statistics for the admin layer
//! and the periodic audit job.

pub mod json;
pub mod markdown;

use crate::engine::AuditReport;
use crate::CopyguardResult;
use std::path::Path;

/// Output format for an audit report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Structured JSON (machine-readable)
    Json,
    /// Human-readable Markdown with summary tables
    Markdown,
}

impl std::str::FromStr for ReportFormat {
    type Err = crate::CopyguardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "md" | "markdown" => Ok(Self::Markdown),
            other => Err(crate::CopyguardError::Report(format!(
                "unknown report format '{}'",
                other
            ))),
        }
    }
}

/// Render an audit report to a string
pub fn render_audit(report: &AuditReport, format: ReportFormat) -> CopyguardResult<String> {
    match format {
        ReportFormat::Json => json::render_audit(report),
        ReportFormat::Markdown => Ok(markdown::render_audit(report)),
    }
}

/// Write an audit report in the specified format
pub fn write_audit(report: &AuditReport, format: ReportFormat, output: &Path) -> CopyguardResult<()> {
    let content = render_audit(report, format)?;
    std::fs::write(output, content)?;
    tracing::info!("Wrote audit report to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert!("sarif".parse::<ReportFormat>().is_err());
    }
}
