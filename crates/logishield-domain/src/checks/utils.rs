use crate::fingerprint::fingerprint_for_item;
use crate::validate::ValidItem;
use logishield_types::{explain, Finding, Severity};
use serde_json::Value;

pub fn item_finding(
    item: &ValidItem<'_>,
    severity: Severity,
    check_id: &str,
    code: &str,
    message: String,
    data: Value,
) -> Finding {
    Finding {
        severity,
        check_id: check_id.to_string(),
        code: code.to_string(),
        message,
        item_index: Some(item.index),
        hscode: Some(item.hscode.to_string()),
        help: explain::action_for(code).map(str::to_string),
        fingerprint: Some(fingerprint_for_item(check_id, code, item.index, item.hscode)),
        data,
    }
}
