//! Use case orchestration for logishield.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and render layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod audit;
mod explain;
mod ledger;
mod manifest;
mod render;
mod report;
mod rules;

pub use audit::{run_audit, AuditInput, AuditOutput};
pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use ledger::ResolutionLedger;
pub use manifest::parse_manifest_json;
pub use render::{render_csv, render_markdown};
pub use report::{
    build_envelope, parse_report_json, runtime_error_report, serialize_report, status_exit_code,
    to_renderable,
};
pub use rules::format_rules;
