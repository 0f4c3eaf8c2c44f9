use crate::ledger::ResolutionLedger;
use anyhow::Context;
use logishield_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableSeverity, RenderableStatus,
};
use logishield_types::{
    ids, AuditData, AuditReport, AuditStatus, Finding, LogishieldReport, Severity, SeverityCounts,
    ToolMeta, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

fn tool_meta() -> ToolMeta {
    ToolMeta {
        name: "logishield".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Wrap an evaluation result in the on-disk report envelope.
pub fn build_envelope(
    audit: AuditReport,
    shipment_id: Option<String>,
    started_at: OffsetDateTime,
    finished_at: OffsetDateTime,
) -> LogishieldReport {
    let AuditReport {
        status,
        findings,
        estimated_tax,
        data,
    } = audit;

    LogishieldReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at,
        finished_at,
        shipment_id,
        status,
        findings,
        estimated_tax,
        data,
    }
}

/// Report written when the audit could not run (bad config, unreadable or malformed manifest).
pub fn runtime_error_report(message: &str) -> LogishieldReport {
    let now = OffsetDateTime::now_utc();
    let findings = vec![Finding {
        severity: Severity::Critical,
        check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
        code: ids::CODE_RUNTIME_ERROR.to_string(),
        message: message.to_string(),
        item_index: None,
        hscode: None,
        help: Some("Fix the manifest or configuration and re-run the audit.".to_string()),
        fingerprint: None,
        data: serde_json::Value::Null,
    }];
    let data = AuditData {
        profile: "unknown".to_string(),
        counts: SeverityCounts::from_findings(&findings),
        ..AuditData::default()
    };

    LogishieldReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: tool_meta(),
        started_at: now,
        finished_at: now,
        shipment_id: None,
        status: AuditStatus::from_findings(&findings),
        findings,
        estimated_tax: 0.0,
        data,
    }
}

pub fn parse_report_json(text: &str) -> anyhow::Result<LogishieldReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();
    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse logishield report")
}

pub fn serialize_report(report: &LogishieldReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Exit code for an audit outcome: 0 = clear, 2 = flagged.
pub fn status_exit_code(status: AuditStatus) -> i32 {
    match status {
        AuditStatus::Clear => 0,
        AuditStatus::Flagged => 2,
    }
}

pub fn to_renderable(
    report: &LogishieldReport,
    ledger: Option<&ResolutionLedger>,
) -> RenderableReport {
    RenderableReport {
        status: match report.status {
            AuditStatus::Clear => RenderableStatus::Clear,
            AuditStatus::Flagged => RenderableStatus::Flagged,
        },
        shipment_id: report.shipment_id.clone(),
        findings: report
            .findings
            .iter()
            .map(|f| renderable_finding(f, ledger.is_some_and(|l| l.covers(f))))
            .collect(),
        data: RenderableData {
            items_scanned: report.data.items_scanned,
            estimated_tax: report.estimated_tax,
            critical: report.data.counts.critical,
            warning: report.data.counts.warning,
        },
    }
}

fn renderable_finding(f: &Finding, resolved: bool) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Critical => RenderableSeverity::Critical,
        },
        item_index: f.item_index,
        hscode: f.hscode.clone(),
        check_id: f.check_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        help: f.help.clone(),
        resolved,
    }
}
