use super::utils::item_finding;
use crate::model::RegulationTable;
use crate::validate::ValidItem;
use logishield_types::{ids, Finding, Severity};
use serde_json::json;

pub fn run(items: &[ValidItem<'_>], rules: &RegulationTable, out: &mut Vec<Finding>) {
    for item in items {
        if rules.get(item.hscode).is_some() {
            continue;
        }
        out.push(item_finding(
            item,
            Severity::Warning,
            ids::CHECK_REGULATION_CLASSIFICATION,
            ids::CODE_UNKNOWN_CODE,
            format!("unknown code {} requires manual review", item.hscode),
            json!({
                "value": item.value,
            }),
        ));
    }
}
