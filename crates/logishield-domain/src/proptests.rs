//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - status vs. findings agreement
//! - tax accumulation independent of findings
//! - manifest-order preservation and determinism

use crate::engine::evaluate;
use crate::model::{
    DeclaredCode, DeclaredFlag, ManifestItem, RegulationRule, RegulationTable, RestrictionLevel,
};
use logishield_types::{ids, AuditStatus, Severity};
use proptest::prelude::*;

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Codes drawn from a small pool so that manifests hit known and unknown rules.
fn arb_code() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("8542".to_string()),
        Just("2204".to_string()),
        Just("8506".to_string()),
        Just("3004".to_string()),
        Just("9999".to_string()),
        prop::string::string_regex("[0-9]{4}").unwrap(),
    ]
}

fn arb_restriction() -> impl Strategy<Value = RestrictionLevel> {
    prop_oneof![
        Just(RestrictionLevel::None),
        Just(RestrictionLevel::Moderate),
        Just(RestrictionLevel::High),
    ]
}

fn arb_rule() -> impl Strategy<Value = RegulationRule> {
    (
        "[A-Z][a-z]{2,12}",
        arb_restriction(),
        prop::option::of(0.0f64..=1.0),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(name, restriction, tax_rate, license_required)| RegulationRule {
            name,
            restriction,
            tax_rate,
            license_required,
        })
}

fn arb_table() -> impl Strategy<Value = RegulationTable> {
    prop::collection::vec((arb_code(), arb_rule()), 0..6).prop_map(|rules| {
        rules
            .into_iter()
            .fold(RegulationTable::new("prop"), |table, (code, rule)| {
                table.with_rule(code, rule)
            })
    })
}

fn arb_item() -> impl Strategy<Value = ManifestItem> {
    (arb_code(), 0.0f64..1_000_000.0, prop::option::of(any::<bool>())).prop_map(
        |(code, value, has_license)| ManifestItem {
            has_license: has_license.map(DeclaredFlag::Bool),
            ..ManifestItem::new(code, value)
        },
    )
}

fn arb_manifest() -> impl Strategy<Value = Vec<ManifestItem>> {
    prop::collection::vec(arb_item(), 0..24)
}

fn item_code(item: &ManifestItem) -> &str {
    item.hscode
        .as_ref()
        .and_then(DeclaredCode::as_text)
        .unwrap_or_default()
}

fn item_value(item: &ManifestItem) -> f64 {
    match item.value {
        Some(crate::model::DeclaredValue::Number(v)) => v,
        _ => unreachable!("strategies only produce numeric values"),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn status_is_flagged_iff_findings_exist(manifest in arb_manifest(), table in arb_table()) {
        let report = evaluate(&manifest, &table).expect("valid manifest");
        prop_assert_eq!(
            report.status == AuditStatus::Flagged,
            !report.findings.is_empty()
        );
    }

    #[test]
    fn unknown_codes_warn_and_pay_no_tax(manifest in arb_manifest(), table in arb_table()) {
        let report = evaluate(&manifest, &table).expect("valid manifest");

        for (index, item) in manifest.iter().enumerate() {
            if table.get(item_code(item)).is_some() {
                continue;
            }
            let warned = report.findings.iter().any(|f| {
                f.item_index == Some(index)
                    && f.severity == Severity::Warning
                    && f.code == ids::CODE_UNKNOWN_CODE
            });
            prop_assert!(warned, "item {} should carry an unknown-code warning", index);
        }
    }

    #[test]
    fn license_findings_match_restriction_and_flag(manifest in arb_manifest(), table in arb_table()) {
        let report = evaluate(&manifest, &table).expect("valid manifest");

        for (index, item) in manifest.iter().enumerate() {
            let expected = table
                .get(item_code(item))
                .is_some_and(|r| r.restriction == RestrictionLevel::High)
                && item.has_license != Some(DeclaredFlag::Bool(true));
            let present = report.findings.iter().any(|f| {
                f.item_index == Some(index)
                    && f.severity == Severity::Critical
                    && f.code == ids::CODE_MISSING_EXPORT_LICENSE
            });
            prop_assert_eq!(expected, present, "item {}", index);
        }
    }

    #[test]
    fn tax_is_sum_over_rated_matches(manifest in arb_manifest(), table in arb_table()) {
        let report = evaluate(&manifest, &table).expect("valid manifest");

        let expected = manifest
            .iter()
            .filter_map(|item| {
                let rate = table.get(item_code(item))?.tax_rate?;
                Some(item_value(item) * rate)
            })
            .fold(0.0, |acc, t| acc + t);

        prop_assert_eq!(report.estimated_tax.to_bits(), expected.to_bits());
        prop_assert!(report.estimated_tax >= 0.0);
    }

    #[test]
    fn findings_preserve_manifest_order(manifest in arb_manifest(), table in arb_table()) {
        let report = evaluate(&manifest, &table).expect("valid manifest");
        let indices: Vec<usize> = report.findings.iter().filter_map(|f| f.item_index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(indices.len(), report.findings.len());
    }

    #[test]
    fn evaluation_is_idempotent(manifest in arb_manifest(), table in arb_table()) {
        let first = evaluate(&manifest, &table).expect("valid manifest");
        let second = evaluate(&manifest, &table).expect("valid manifest");
        prop_assert_eq!(first.estimated_tax.to_bits(), second.estimated_tax.to_bits());
        prop_assert_eq!(first, second);
    }
}
