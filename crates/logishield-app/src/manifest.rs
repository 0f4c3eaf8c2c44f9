//! Manifest loading: JSON documents handed over by the upload layer.

use anyhow::Context;
use logishield_domain::model::{Manifest, ManifestItem};
use serde_json::Value;

/// Parse a manifest document.
///
/// Accepted shapes:
/// - `{"shipment_id": "...", "items": [ ... ]}`
/// - `[ ... ]` (bare list of line items, as exported by the dashboard table)
pub fn parse_manifest_json(text: &str) -> anyhow::Result<Manifest> {
    let value: Value = serde_json::from_str(text).context("manifest is not valid JSON")?;

    match value {
        Value::Array(_) => {
            let items: Vec<ManifestItem> =
                serde_json::from_value(value).context("parse manifest items")?;
            Ok(Manifest {
                shipment_id: None,
                items,
            })
        }
        Value::Object(ref obj) => {
            if !obj.get("items").is_some_and(Value::is_array) {
                anyhow::bail!("manifest object has no `items` array");
            }
            serde_json::from_value(value).context("parse manifest")
        }
        other => anyhow::bail!(
            "manifest must be a JSON object or array, got {}",
            json_kind(&other)
        ),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
