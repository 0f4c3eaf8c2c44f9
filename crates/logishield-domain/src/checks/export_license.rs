use super::utils::item_finding;
use crate::model::{RegulationTable, RestrictionLevel};
use crate::validate::ValidItem;
use logishield_types::{ids, Finding, Severity};
use serde_json::json;

pub fn run(items: &[ValidItem<'_>], rules: &RegulationTable, out: &mut Vec<Finding>) {
    for item in items {
        let Some(rule) = rules.get(item.hscode) else { continue };
        if rule.restriction != RestrictionLevel::High || item.has_license {
            continue;
        }
        out.push(item_finding(
            item,
            Severity::Critical,
            ids::CHECK_REGULATION_EXPORT_LICENSE,
            ids::CODE_MISSING_EXPORT_LICENSE,
            format!("missing export license for {}", rule.name),
            json!({
                "rule": rule.name,
                "restriction": rule.restriction.as_str(),
                "value": item.value,
            }),
        ));
    }
}
