//! The `audit` use case: resolve the regulation table, evaluate a manifest, wrap the result.

use anyhow::Context;
use logishield_settings::{Overrides, ResolvedConfig};
use logishield_types::LogishieldReport;
use time::OffsetDateTime;

use crate::manifest::parse_manifest_json;
use crate::report::build_envelope;

/// Input for the audit use case.
#[derive(Clone, Debug)]
pub struct AuditInput<'a> {
    /// Manifest document (JSON object with `items`, or a bare array of line items).
    pub manifest_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the audit use case.
#[derive(Clone, Debug)]
pub struct AuditOutput {
    pub report: LogishieldReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

pub fn run_audit(input: AuditInput<'_>) -> anyhow::Result<AuditOutput> {
    let span = tracing::info_span!("audit");
    let _guard = span.enter();

    let started_at = OffsetDateTime::now_utc();

    // Empty config is allowed; the default profile applies.
    let cfg = if input.config_text.trim().is_empty() {
        logishield_settings::LogishieldConfigV1::default()
    } else {
        logishield_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = logishield_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    tracing::debug!(
        profile = resolved.table.profile(),
        rules = resolved.table.len(),
        "regulation table resolved"
    );

    let manifest = parse_manifest_json(input.manifest_text).context("parse manifest")?;
    tracing::debug!(items = manifest.items.len(), "manifest parsed");

    let audit = logishield_domain::evaluate(&manifest.items, &resolved.table)
        .context("evaluate manifest")?;
    tracing::info!(
        status = audit.status.as_str(),
        findings = audit.findings.len(),
        estimated_tax = audit.estimated_tax,
        "audit complete"
    );

    let finished_at = OffsetDateTime::now_utc();
    let report = build_envelope(audit, manifest.shipment_id, started_at, finished_at);

    Ok(AuditOutput {
        report,
        resolved_config: resolved,
    })
}
