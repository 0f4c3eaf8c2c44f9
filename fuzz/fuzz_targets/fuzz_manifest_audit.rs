//! Fuzz target for manifest loading and evaluation.
//!
//! Goal: loading and evaluating a manifest should **never panic** on any input.
//! Malformed documents and items must come back as errors.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_manifest_audit
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(manifest) = logishield_app::parse_manifest_json(text) else {
        return;
    };
    let Some(table) = logishield_settings::preset("electronics") else {
        return;
    };

    if let Ok(report) = logishield_domain::evaluate(&manifest.items, &table) {
        // Status follows findings; the duty estimate is never negative.
        assert_eq!(report.findings.is_empty(), report.status.as_str() == "clear");
        assert!(report.estimated_tax >= 0.0);
    }
});
