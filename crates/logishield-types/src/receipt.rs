use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifiers for logishield artifacts.
pub const SCHEMA_REPORT_V1: &str = "logishield.report.v1";
pub const SCHEMA_CONFIG_V1: &str = "logishield.config.v1";

/// Severity of a single finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }
}

/// Overall audit outcome. `Flagged` iff at least one finding was emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AuditStatus {
    Clear,
    Flagged,
}

impl AuditStatus {
    pub fn from_findings(findings: &[Finding]) -> Self {
        if findings.is_empty() {
            AuditStatus::Clear
        } else {
            AuditStatus::Flagged
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AuditStatus::Clear => "clear",
            AuditStatus::Flagged => "flagged",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub check_id: String,
    pub code: String,
    pub message: String,

    /// Zero-based position of the offending line item in the manifest.
    /// Absent only for tool-level findings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_index: Option<usize>,

    /// Classification code of the offending line item, as submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hscode: Option<String>,

    /// Recommended action.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Stable identifier intended for dedup and resolution tracking. A hash of:
    /// `check_id + code + item_index + hscode`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Check-specific structured payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub info: u32,
    pub warning: u32,
    pub critical: u32,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut counts = SeverityCounts::default();
        for f in findings {
            match f.severity {
                Severity::Info => counts.info += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Critical => counts.critical += 1,
            }
        }
        counts
    }
}

/// Summary payload describing what an audit looked at.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AuditData {
    /// Name of the regulation profile the table was resolved from.
    pub profile: String,
    pub rules_loaded: u32,
    pub items_scanned: u32,
    /// Items whose classification code matched a regulation rule.
    pub items_matched: u32,
    pub counts: SeverityCounts,
}

/// Result of one evaluation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AuditReport {
    pub status: AuditStatus,
    pub findings: Vec<Finding>,
    pub estimated_tax: f64,
    pub data: AuditData,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Report envelope written to disk and consumed by renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = AuditData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipment_id: Option<String>,
    pub status: AuditStatus,
    pub findings: Vec<Finding>,
    pub estimated_tax: f64,
    pub data: TData,
}

pub type LogishieldReport = ReportEnvelope<AuditData>;
