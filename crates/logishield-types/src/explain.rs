//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// One-line recommended action, attached to findings as `help`.
    pub action: &'static str,
    /// Before/after manifest examples.
    pub examples: ExamplePair,
}

/// Before and after manifest examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A line item that would trigger a finding.
    pub before: &'static str,
    /// A line item that passes the check.
    pub after: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Check IDs
        ids::CHECK_REGULATION_CLASSIFICATION => Some(explain_classification()),
        ids::CHECK_REGULATION_EXPORT_LICENSE => Some(explain_export_license()),

        // Codes
        ids::CODE_UNKNOWN_CODE => Some(explain_unknown_code()),
        ids::CODE_MISSING_EXPORT_LICENSE => Some(explain_missing_export_license()),

        _ => None,
    }
}

/// Recommended action for a finding code, if the code is registered.
pub fn action_for(code: &str) -> Option<&'static str> {
    lookup_explanation(code).map(|e| e.action)
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_REGULATION_CLASSIFICATION,
        ids::CHECK_REGULATION_EXPORT_LICENSE,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[ids::CODE_UNKNOWN_CODE, ids::CODE_MISSING_EXPORT_LICENSE]
}

// --- Check-level explanations ---

fn explain_classification() -> Explanation {
    Explanation {
        title: "Classification Code Lookup",
        description: "\
Looks up every manifest line item's classification code (HS code) in the
regulation table.

Items whose code has no regulation rule cannot be assessed automatically:
- no restriction level is known, so licensing cannot be checked
- no tax rate is known, so the item contributes nothing to the duty estimate",
        remediation: "\
Review the item by hand and either:
- correct the classification code on the manifest if it was mistyped
- add a rule for the code to logishield.toml if it is a legitimate new code",
        action: "Review the classification manually and correct the code or add a regulation rule.",
        examples: ExamplePair {
            before: r#"{ "hscode": "9999", "value": 100 }"#,
            after: r#"{ "hscode": "2204", "value": 100 }"#,
        },
    }
}

fn explain_export_license() -> Explanation {
    Explanation {
        title: "Export License for Restricted Goods",
        description: "\
Checks that line items whose regulation rule carries a High restriction level
declare an export license.

Shipping high-restriction goods without a license exposes the shipment to
seizure and the exporter to penalties.",
        remediation: "\
Obtain the export license for the goods and mark the line item with
`\"has_license\": true` once the license is on file.",
        action: "Obtain the export license and set has_license on the line item.",
        examples: ExamplePair {
            before: r#"{ "hscode": "8542", "value": 50000, "has_license": false }"#,
            after: r#"{ "hscode": "8542", "value": 50000, "has_license": true }"#,
        },
    }
}

// --- Code-level explanations ---

fn explain_unknown_code() -> Explanation {
    Explanation {
        title: "Unknown Classification Code",
        description: "\
The line item's classification code does not appear in the regulation table,
so the item requires manual review.",
        remediation: "\
Verify the code against the harmonized system nomenclature. If it is valid,
extend the regulation table:

    [rules.\"9999\"]
    name = \"Widgets\"
    restriction = \"none\"",
        action: "Review the classification manually and correct the code or add a regulation rule.",
        examples: ExamplePair {
            before: r#"{ "hscode": "9999", "value": 100 }"#,
            after: r#"{ "hscode": "2204", "value": 100 }"#,
        },
    }
}

fn explain_missing_export_license() -> Explanation {
    Explanation {
        title: "Missing Export License",
        description: "\
A line item matched a High-restriction regulation rule but does not declare
an export license (the license flag is false or absent).",
        remediation: "\
Apply for the export license covering the goods, then mark the item:

    \"has_license\": true",
        action: "Obtain the export license and set has_license on the line item.",
        examples: ExamplePair {
            before: r#"{ "hscode": "8542", "value": 50000 }"#,
            after: r#"{ "hscode": "8542", "value": 50000, "has_license": true }"#,
        },
    }
}
