//! Stable DTOs and IDs used across the logishield workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted audit report and envelope
//! - stable string IDs and codes
//! - explain registry for remediation guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod receipt;

pub use explain::{lookup_explanation, ExamplePair, Explanation};
pub use receipt::{
    AuditData, AuditReport, AuditStatus, Finding, LogishieldReport, ReportEnvelope, Severity,
    SeverityCounts, ToolMeta, SCHEMA_CONFIG_V1, SCHEMA_REPORT_V1,
};
