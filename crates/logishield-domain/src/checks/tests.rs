use super::{export_license, unknown_code};
use crate::model::{RegulationRule, RestrictionLevel};
use crate::test_support::{table_2025, valid};
use logishield_types::{ids, Severity};

#[test]
fn unknown_code_flags_only_unmatched_items() {
    let items = vec![
        valid(0, "8542", 1.0, false),
        valid(1, "9999", 250.0, false),
        valid(2, "2204", 1.0, true),
    ];

    let mut out = Vec::new();
    unknown_code::run(&items, &table_2025(), &mut out);

    assert_eq!(out.len(), 1);
    let finding = &out[0];
    assert_eq!(finding.severity, Severity::Warning);
    assert_eq!(finding.check_id, ids::CHECK_REGULATION_CLASSIFICATION);
    assert_eq!(finding.item_index, Some(1));
    assert_eq!(finding.data["value"], 250.0);
}

#[test]
fn unknown_code_ignores_license_flag() {
    let items = vec![valid(0, "9999", 1.0, true)];
    let mut out = Vec::new();
    unknown_code::run(&items, &table_2025(), &mut out);
    assert_eq!(out.len(), 1);

    let mut out = Vec::new();
    export_license::run(&items, &table_2025(), &mut out);
    assert!(out.is_empty());
}

#[test]
fn export_license_fires_on_high_without_license() {
    let items = vec![
        valid(0, "8542", 50000.0, false),
        valid(1, "8542", 50000.0, true),
        valid(2, "2204", 12000.0, false),
    ];

    let mut out = Vec::new();
    export_license::run(&items, &table_2025(), &mut out);

    assert_eq!(out.len(), 1);
    let finding = &out[0];
    assert_eq!(finding.severity, Severity::Critical);
    assert_eq!(finding.code, ids::CODE_MISSING_EXPORT_LICENSE);
    assert_eq!(finding.item_index, Some(0));
    assert_eq!(finding.data["rule"], "Microchips");
}

#[test]
fn license_required_flag_alone_does_not_trigger() {
    let table = table_2025().with_rule(
        "3004",
        RegulationRule::new("Medicaments", RestrictionLevel::Moderate).with_license_required(true),
    );
    let items = vec![valid(0, "3004", 1.0, false)];

    let mut out = Vec::new();
    export_license::run(&items, &table, &mut out);
    assert!(out.is_empty());
}

#[test]
fn high_restriction_with_tax_still_flags() {
    let table = table_2025().with_rule(
        "8506",
        RegulationRule::new("Lithium Batteries", RestrictionLevel::High).with_tax_rate(0.05),
    );
    let items = vec![valid(0, "8506", 2500.0, false)];

    let mut out = Vec::new();
    export_license::run(&items, &table, &mut out);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].message, "missing export license for Lithium Batteries");
}
