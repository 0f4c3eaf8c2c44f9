use crate::checks;
use crate::error::EvaluateError;
use crate::model::{ManifestItem, RegulationTable};
use crate::tax;
use crate::validate::validate_items;
use logishield_types::{AuditData, AuditReport, AuditStatus, Finding, SeverityCounts};

/// Evaluate a manifest against a regulation table.
///
/// All items are validated before any check runs; a malformed item fails the whole call.
/// Findings come back in manifest order. The call has no side effects.
pub fn evaluate(
    manifest: &[ManifestItem],
    rules: &RegulationTable,
) -> Result<AuditReport, EvaluateError> {
    let items = validate_items(manifest)?;

    let mut findings: Vec<Finding> = Vec::new();
    checks::run_all(&items, rules, &mut findings);

    // Stable: checks emitting for the same item keep their run order.
    findings.sort_by_key(|f| f.item_index);

    let estimated_tax = tax::estimate(&items, rules)?;
    let status = AuditStatus::from_findings(&findings);

    let data = AuditData {
        profile: rules.profile().to_string(),
        rules_loaded: saturating_count(rules.len()),
        items_scanned: saturating_count(items.len()),
        items_matched: saturating_count(
            items
                .iter()
                .filter(|item| rules.get(item.hscode).is_some())
                .count(),
        ),
        counts: SeverityCounts::from_findings(&findings),
    };

    Ok(AuditReport {
        status,
        findings,
        estimated_tax,
        data,
    })
}

fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
